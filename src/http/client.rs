//! HTTP fetcher implementation
//!
//! Provides a data fetcher that handles:
//! - Base URL joining and default headers
//! - Query string rendering for JSON parameters
//! - Error classification for failed responses

use crate::error::{Error, Result};
use crate::fetch::DataFetcher;
use crate::types::{JsonValue, Method, QueryParams};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Path of the list endpoint, joined onto the base URL
    pub path: String,
    /// HTTP method
    pub method: Method,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            path: String::new(),
            method: Method::GET,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("pagelist/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Full endpoint URL
    pub fn endpoint(&self) -> Result<Url> {
        if self.path.starts_with("http://") || self.path.starts_with("https://") {
            return Ok(Url::parse(&self.path)?);
        }

        let base = self.base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        let joined = if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        };
        Ok(Url::parse(&joined)?)
    }
}

/// Builder for HTTP client config
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the endpoint path
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the HTTP method
    pub fn method(mut self, method: Method) -> Self {
        self.config.method = method;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Data fetcher backed by an HTTP endpoint
pub struct HttpFetcher {
    client: Client,
    config: HttpClientConfig,
    endpoint: Url,
}

impl HttpFetcher {
    /// Create a fetcher for the configured endpoint
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// The endpoint requests go to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn send(&self, params: QueryParams) -> Result<Response> {
        let mut req = self
            .client
            .request(self.config.method.into(), self.endpoint.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        req = match self.config.method {
            Method::GET => req.query(&render_query(&params)),
            Method::POST => req.json(&JsonValue::Object(params)),
        };

        req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                }
            } else {
                Error::Http(e)
            }
        })
    }
}

#[async_trait]
impl DataFetcher for HttpFetcher {
    async fn fetch(&self, params: QueryParams) -> Result<JsonValue> {
        let response = self.send(params).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: {} {}", self.config.method.as_str(), self.endpoint);
        let body: JsonValue = response.json().await?;
        Ok(body)
    }
}

impl std::fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

/// Render JSON parameters as query pairs.
///
/// Scalars become their plain text form, arrays repeat the key once per
/// element, objects are sent as JSON text and nulls are dropped.
pub fn render_query(params: &QueryParams) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            JsonValue::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
