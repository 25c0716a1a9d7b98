//! Controller configuration
//!
//! This module contains the options recognized by the list controller and
//! the loaders that read them from YAML or JSON files.
//!
//! Both snake_case keys and the camelCase names used by table front ends
//! (`useOutsideData`, `requestQuery`, `queryTransformMap`,
//! `extraPagination.unNeedPaging`, ...) are accepted.

use crate::error::{Error, Result};
use crate::query::RenameMap;
use crate::types::{JsonObject, JsonValue, PageParam, QueryParams, Row};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Controller Config
// ============================================================================

/// Options for a [`PaginatedListController`](crate::controller::PaginatedListController)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Rows are supplied by the owner; the controller never fetches
    #[serde(default, alias = "useOutsideData")]
    pub use_outside_data: bool,

    /// Rows shown when `use_outside_data` is set
    #[serde(default, alias = "dataSource")]
    pub data_source: Vec<Row>,

    /// Row identity field, passed through to the render surface
    #[serde(default, alias = "rowKey")]
    pub row_key: String,

    /// Static fields merged into every request
    #[serde(default, alias = "requestQuery")]
    pub request_query: QueryParams,

    /// Outgoing field renames, applied after paging fields are added
    #[serde(default, alias = "queryTransformMap")]
    pub query_transform_map: RenameMap,

    /// Display overrides and the no-paging switch
    #[serde(default, alias = "extraPagination")]
    pub extra_pagination: ExtraPagination,

    /// Name of the page-number field sent to the fetcher
    #[serde(default, alias = "pageParam")]
    pub page_param: PageParam,
}

impl ControllerConfig {
    /// Create a config builder
    pub fn builder() -> ControllerConfigBuilder {
        ControllerConfigBuilder::default()
    }

    /// Whether paging is disabled
    pub fn un_need_paging(&self) -> bool {
        self.extra_pagination.un_need_paging
    }

    /// Check the config for values the controller cannot work with
    pub fn validate(&self) -> Result<()> {
        let mut targets = HashSet::new();
        for (source, target) in &self.query_transform_map {
            if source.is_empty() {
                return Err(Error::invalid_value(
                    "query_transform_map",
                    "source field name cannot be empty",
                ));
            }
            if target.is_empty() {
                return Err(Error::invalid_value(
                    "query_transform_map",
                    format!("rename target for '{source}' cannot be empty"),
                ));
            }
            if !targets.insert(target.as_str()) {
                return Err(Error::invalid_value(
                    "query_transform_map",
                    format!("more than one field renamed to '{target}'"),
                ));
            }
        }

        for key in ["current", "pageSize", "total"] {
            if let Some(value) = self.extra_pagination.overrides.get(key) {
                if value.as_u64().map_or(true, |n| n == 0 && key != "total") {
                    return Err(Error::invalid_value(
                        format!("extra_pagination.{key}"),
                        format!("expected a positive integer, got {value}"),
                    ));
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Extra Pagination
// ============================================================================

/// Pagination options beyond page/size/total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraPagination {
    /// Disable paging: no page params, no pagination display, bare list results
    #[serde(default, alias = "unNeedPaging")]
    pub un_need_paging: bool,

    /// Display props merged over the computed pagination
    #[serde(flatten)]
    pub overrides: JsonObject,
}

impl ExtraPagination {
    /// Paging disabled
    pub fn unpaged() -> Self {
        Self {
            un_need_paging: true,
            overrides: JsonObject::new(),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ControllerConfig`]
#[derive(Debug, Default)]
pub struct ControllerConfigBuilder {
    config: ControllerConfig,
}

impl ControllerConfigBuilder {
    /// Use rows supplied by the owner instead of fetching
    #[must_use]
    pub fn outside_data(mut self, rows: Vec<Row>) -> Self {
        self.config.use_outside_data = true;
        self.config.data_source = rows;
        self
    }

    /// Set the row key
    #[must_use]
    pub fn row_key(mut self, key: impl Into<String>) -> Self {
        self.config.row_key = key.into();
        self
    }

    /// Add a static query field
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.config.request_query.insert(key.into(), value.into());
        self
    }

    /// Rename an outgoing field
    #[must_use]
    pub fn rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.config
            .query_transform_map
            .insert(from.into(), to.into());
        self
    }

    /// Disable paging
    #[must_use]
    pub fn un_need_paging(mut self) -> Self {
        self.config.extra_pagination.un_need_paging = true;
        self
    }

    /// Add a display override for the pagination props
    #[must_use]
    pub fn pagination_override(
        mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Self {
        self.config
            .extra_pagination
            .overrides
            .insert(key.into(), value.into());
        self
    }

    /// Set the page-number field name
    #[must_use]
    pub fn page_param(mut self, param: PageParam) -> Self {
        self.config.page_param = param;
        self
    }

    /// Build the config
    pub fn build(self) -> ControllerConfig {
        self.config
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a config from a file. `.json` files are read as JSON, anything
/// else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<ControllerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_config_from_json(&content)
    } else {
        load_config_from_str(&content)
    }
}

/// Load a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<ControllerConfig> {
    let config: ControllerConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Load a config from a JSON string
pub fn load_config_from_json(json: &str) -> Result<ControllerConfig> {
    let config: ControllerConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ControllerConfig::default();
        assert!(!config.use_outside_data);
        assert!(!config.un_need_paging());
        assert!(config.request_query.is_empty());
        assert!(config.query_transform_map.is_empty());
        assert_eq!(config.page_param, PageParam::PageNum);
    }

    #[test]
    fn test_builder() {
        let config = ControllerConfig::builder()
            .row_key("id")
            .query("status", "open")
            .rename("status", "state")
            .pagination_override("showSizeChanger", true)
            .page_param(PageParam::Current)
            .build();

        assert_eq!(config.row_key, "id");
        assert_eq!(config.request_query["status"], json!("open"));
        assert_eq!(
            config.query_transform_map.get("status"),
            Some(&"state".to_string())
        );
        assert_eq!(
            config.extra_pagination.overrides["showSizeChanger"],
            json!(true)
        );
        assert_eq!(config.page_param, PageParam::Current);
    }

    #[test]
    fn test_yaml_snake_case() {
        let config = load_config_from_str(
            r"
row_key: id
request_query:
  status: open
query_transform_map:
  status: state
extra_pagination:
  un_need_paging: true
page_param: current
",
        )
        .unwrap();

        assert_eq!(config.row_key, "id");
        assert_eq!(config.request_query["status"], json!("open"));
        assert!(config.un_need_paging());
        assert_eq!(config.page_param, PageParam::Current);
    }

    #[test]
    fn test_json_camel_case() {
        let config = load_config_from_json(
            r#"{
                "useOutsideData": true,
                "dataSource": [{"id": 1}],
                "rowKey": "id",
                "requestQuery": {"a": 1},
                "queryTransformMap": {"a": "A"},
                "extraPagination": {"unNeedPaging": false, "showQuickJumper": true}
            }"#,
        )
        .unwrap();

        assert!(config.use_outside_data);
        assert_eq!(config.data_source, vec![json!({"id": 1})]);
        assert!(!config.un_need_paging());
        assert_eq!(
            config.extra_pagination.overrides["showQuickJumper"],
            json!(true)
        );
        assert!(!config
            .extra_pagination
            .overrides
            .contains_key("unNeedPaging"));
    }

    #[test]
    fn test_validate_rejects_duplicate_targets() {
        let config = ControllerConfig::builder()
            .rename("a", "X")
            .rename("b", "X")
            .build();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than one field renamed to 'X'"));
    }

    #[test]
    fn test_validate_rejects_empty_target() {
        let config = ControllerConfig::builder().rename("a", "").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_page_size_override() {
        let config = ControllerConfig::builder()
            .pagination_override("pageSize", 0)
            .build();
        assert!(config.validate().is_err());

        let config = ControllerConfig::builder()
            .pagination_override("total", 0)
            .build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("list.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        writeln!(file, "row_key: code").unwrap();
        assert_eq!(load_config(&yaml_path).unwrap().row_key, "code");

        let json_path = dir.path().join("list.json");
        std::fs::write(&json_path, r#"{"rowKey": "uid"}"#).unwrap();
        assert_eq!(load_config(&json_path).unwrap().row_key, "uid");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/pagelist.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
