//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, ControllerConfig};
use crate::controller::PaginatedListController;
use crate::error::{Error, Result};
use crate::fetch::NoFetcher;
use crate::http::{HttpClientConfig, HttpFetcher};
use crate::observer::TracingObserver;
use crate::pagination::PageOverrides;
use crate::types::{JsonValue, OutputFormat};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch {
                url,
                path,
                method,
                page,
                size,
                query,
                headers,
                timeout,
            } => {
                let mut http = HttpClientConfig::builder()
                    .base_url(url)
                    .path(path)
                    .method(*method)
                    .timeout(Duration::from_secs(*timeout));
                for raw in headers {
                    let (key, value) = split_pair(raw)?;
                    http = http.header(key, value);
                }
                self.fetch(http.build(), *page, *size, query).await
            }
            Commands::Params { page, size, query } => self.params(*page, *size, query).await,
            Commands::Validate => self.validate(),
        }
    }

    /// Load the config file, or the defaults when none was given
    fn load_config(&self) -> Result<ControllerConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(ControllerConfig::default()),
        }
    }

    /// Load the config and merge `-q KEY=VALUE` fields into its static query
    fn config_with_query(&self, query: &[String]) -> Result<ControllerConfig> {
        let mut config = self.load_config()?;
        for raw in query {
            let (key, value) = parse_query_arg(raw)?;
            config.request_query.insert(key, value);
        }
        Ok(config)
    }

    async fn fetch(
        &self,
        http: HttpClientConfig,
        page: Option<u32>,
        size: Option<u32>,
        query: &[String],
    ) -> Result<()> {
        let config = self.config_with_query(query)?;
        let fetcher = HttpFetcher::new(http)?;
        info!("Fetching from {}", fetcher.endpoint());

        let controller = PaginatedListController::builder(config)
            .fetcher(fetcher)
            .observer(Arc::new(TracingObserver::new("cli")))
            .build()?;

        if page.is_some() || size.is_some() {
            controller
                .request_data(PageOverrides {
                    current: page,
                    size,
                })
                .await?;
        } else {
            controller.init().await?;
        }

        self.emit(&controller.snapshot().await)
    }

    async fn params(&self, page: Option<u32>, size: Option<u32>, query: &[String]) -> Result<()> {
        let config = self.config_with_query(query)?;
        let controller = PaginatedListController::builder(config)
            .fetcher(NoFetcher)
            .build()?;

        let params = controller
            .preview_params(PageOverrides {
                current: page,
                size,
            })
            .await;
        self.emit(&JsonValue::Object(params))
    }

    fn validate(&self) -> Result<()> {
        let Some(path) = &self.cli.config else {
            return Err(Error::config("validate needs --config <FILE>"));
        };
        let config = load_config(path)?;

        let mode = if config.use_outside_data {
            "outside data"
        } else if config.un_need_paging() {
            "unpaged"
        } else {
            "paged"
        };
        println!("Config is valid: {} ({mode})", path.display());
        Ok(())
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Parse a `KEY=VALUE` query argument.
///
/// The value is read as JSON when it parses (`3`, `true`, `[1,2]`), and as
/// a plain string otherwise.
pub fn parse_query_arg(raw: &str) -> Result<(String, JsonValue)> {
    let (key, value) = split_pair(raw)?;
    let value = serde_json::from_str::<JsonValue>(value).unwrap_or_else(|_| JsonValue::from(value));
    Ok((key.to_string(), value))
}

fn split_pair(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(Error::invalid_value(
            "query",
            format!("expected KEY=VALUE, got '{raw}'"),
        )),
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("command", &self.cli.command)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_query_arg_json_values() {
        assert_eq!(parse_query_arg("n=3").unwrap(), ("n".to_string(), json!(3)));
        assert_eq!(
            parse_query_arg("ids=[1,2]").unwrap(),
            ("ids".to_string(), json!([1, 2]))
        );
        assert_eq!(
            parse_query_arg("flag=true").unwrap(),
            ("flag".to_string(), json!(true))
        );
    }

    #[test]
    fn test_parse_query_arg_plain_string() {
        assert_eq!(
            parse_query_arg("status=open").unwrap(),
            ("status".to_string(), json!("open"))
        );
        assert_eq!(
            parse_query_arg("q=a=b").unwrap(),
            ("q".to_string(), json!("a=b"))
        );
    }

    #[test]
    fn test_parse_query_arg_rejects_missing_key() {
        assert!(parse_query_arg("=x").is_err());
        assert!(parse_query_arg("novalue").is_err());
    }
}
