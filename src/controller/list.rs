//! The list controller

use super::guard::InflightGuard;
use super::types::{ListSnapshot, RequestOutcome};
use crate::config::ControllerConfig;
use crate::decode::ResultShape;
use crate::error::{Error, Result};
use crate::fetch::{AlwaysValid, DataFetcher, NoFetcher, RequestValidator};
use crate::observer::{ListObserver, NoopObserver};
use crate::pagination::{
    reduce, PageOverrides, Pagination, PaginationAction, DEFAULT_CURRENT, DEFAULT_PAGE_SIZE,
};
use crate::query::build_params;
use crate::types::{JsonObject, JsonValue, QueryParams, Row};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// State replaced by completed fetches
#[derive(Debug, Default)]
struct ListState {
    pagination: Pagination,
    rows: Vec<Row>,
    data_source: Vec<Row>,
}

/// Drives fetching, paging and loading state for one list
pub struct PaginatedListController {
    config: ControllerConfig,
    fetcher: Arc<dyn DataFetcher>,
    validator: Arc<dyn RequestValidator>,
    observer: Arc<dyn ListObserver>,
    state: RwLock<ListState>,
    inflight: AtomicBool,
}

impl PaginatedListController {
    /// Create a controller that fetches through `fetcher`
    pub fn new(config: ControllerConfig, fetcher: impl DataFetcher + 'static) -> Self {
        Self::with_parts(
            config,
            Arc::new(fetcher),
            Arc::new(AlwaysValid),
            Arc::new(NoopObserver),
        )
    }

    /// Start building a controller
    pub fn builder(config: ControllerConfig) -> ControllerBuilder {
        ControllerBuilder::new(config)
    }

    fn with_parts(
        config: ControllerConfig,
        fetcher: Arc<dyn DataFetcher>,
        validator: Arc<dyn RequestValidator>,
        observer: Arc<dyn ListObserver>,
    ) -> Self {
        let state = ListState {
            data_source: config.data_source.clone(),
            ..ListState::default()
        };

        Self {
            config,
            fetcher,
            validator,
            observer,
            state: RwLock::new(state),
            inflight: AtomicBool::new(false),
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Load the first page. No-op when rows are supplied by the owner.
    pub async fn init(&self) -> Result<RequestOutcome> {
        if self.config.use_outside_data {
            return Ok(RequestOutcome::Skipped);
        }
        self.request_data(PageOverrides::page(DEFAULT_CURRENT, DEFAULT_PAGE_SIZE))
            .await
    }

    /// Re-fetch the current page with the current page size
    pub async fn refresh(&self) -> Result<RequestOutcome> {
        if self.config.use_outside_data {
            return Ok(RequestOutcome::Skipped);
        }
        self.request_data(PageOverrides::none()).await
    }

    /// Fetch another page, as asked for by the page-change control
    pub async fn handle_page_change(&self, current: u32, page_size: u32) -> Result<RequestOutcome> {
        self.request_data(PageOverrides::page(current, page_size))
            .await
    }

    // ========================================================================
    // Request Pipeline
    // ========================================================================

    /// Fetch a page and apply the result.
    ///
    /// Returns `Ok(Skipped)` when rows are supplied by the owner or a fetch
    /// is already in flight, and `Err(ValidationFailed)` without side effects
    /// when the validator rejects the call. State only changes after the fetch succeeds; fetch errors
    /// are returned as produced by the fetcher.
    pub async fn request_data(&self, overrides: PageOverrides) -> Result<RequestOutcome> {
        if self.config.use_outside_data {
            debug!("Rows are supplied by the owner, not fetching");
            return Ok(RequestOutcome::Skipped);
        }

        if !self.validator.validate() {
            warn!("Request rejected by validator");
            return Err(Error::ValidationFailed);
        }

        let Some(_inflight) = InflightGuard::acquire(&self.inflight, self.observer.as_ref())
        else {
            debug!("Fetch already in flight, skipping request");
            return Ok(RequestOutcome::Skipped);
        };

        let paged = !self.config.un_need_paging();
        let (page, size) = overrides.resolve(&self.state.read().await.pagination);
        let params = self.build_params(paged.then_some((page, size)));

        debug!(page, size, paged, "Dispatching fetch");
        let raw = match self.fetcher.fetch(params).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(page, size, error = %e, "Fetch failed");
                return Err(e);
            }
        };

        let decoded = ResultShape::from_un_need_paging(!paged).decode(&raw)?;
        let row_count = decoded.len();

        let pagination = {
            let mut state = self.state.write().await;
            if let Some(info) = decoded.page {
                let action = PaginationAction::completed(
                    info.page_no.unwrap_or(page),
                    size,
                    info.total_count,
                );
                state.pagination = reduce(state.pagination, action);
            }
            state.rows = decoded.rows;
            state.pagination
        };
        self.observer.on_list_change(&pagination);

        info!(
            current = pagination.current,
            page_size = pagination.page_size,
            total = pagination.total,
            rows = row_count,
            "Fetch completed"
        );

        Ok(RequestOutcome::Completed(raw))
    }

    /// Parameters the next fetch would send for `overrides`
    pub async fn preview_params(&self, overrides: PageOverrides) -> QueryParams {
        let (page, size) = overrides.resolve(&self.state.read().await.pagination);
        self.build_params((!self.config.un_need_paging()).then_some((page, size)))
    }

    fn build_params(&self, page: Option<(u32, u32)>) -> QueryParams {
        build_params(
            &self.config.request_query,
            page,
            self.config.page_param,
            &self.config.query_transform_map,
        )
    }

    // ========================================================================
    // Outside Data
    // ========================================================================

    /// Replace the rows supplied by the owner
    pub async fn set_data_source(&self, rows: Vec<Row>) {
        let pagination = {
            let mut state = self.state.write().await;
            state.data_source = rows;
            state.pagination
        };
        self.observer.on_list_change(&pagination);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Pagination of the last completed fetch
    pub async fn pagination(&self) -> Pagination {
        self.state.read().await.pagination
    }

    /// Rows to show: the owner's rows in outside-data mode, fetched rows
    /// otherwise
    pub async fn rows(&self) -> Vec<Row> {
        let state = self.state.read().await;
        if self.config.use_outside_data {
            state.data_source.clone()
        } else {
            state.rows.clone()
        }
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.inflight.load(Ordering::Acquire)
    }

    /// The controller's configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Pagination props for the render surface, with the configured
    /// display overrides merged over the computed values. `None` when
    /// paging is off.
    pub async fn display_pagination(&self) -> Option<JsonObject> {
        if self.config.un_need_paging() {
            return None;
        }
        let pagination = self.pagination().await;
        Some(self.merge_display(pagination))
    }

    fn merge_display(&self, pagination: Pagination) -> JsonObject {
        let mut props = JsonObject::new();
        props.insert("current".to_string(), JsonValue::from(pagination.current));
        props.insert(
            "pageSize".to_string(),
            JsonValue::from(pagination.page_size),
        );
        props.insert("total".to_string(), JsonValue::from(pagination.total));
        for (key, value) in &self.config.extra_pagination.overrides {
            props.insert(key.clone(), value.clone());
        }
        props
    }

    /// Current state in one piece
    pub async fn snapshot(&self) -> ListSnapshot {
        let pagination = self.pagination().await;
        let display_pagination =
            (!self.config.un_need_paging()).then(|| self.merge_display(pagination));

        ListSnapshot {
            pagination,
            display_pagination,
            rows: self.rows().await,
            loading: self.is_loading(),
            row_key: self.config.row_key.clone(),
        }
    }
}

impl std::fmt::Debug for PaginatedListController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedListController")
            .field("config", &self.config)
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`PaginatedListController`]
pub struct ControllerBuilder {
    config: ControllerConfig,
    fetcher: Option<Arc<dyn DataFetcher>>,
    validator: Arc<dyn RequestValidator>,
    observer: Arc<dyn ListObserver>,
}

impl ControllerBuilder {
    /// Create a builder for `config`
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            fetcher: None,
            validator: Arc::new(AlwaysValid),
            observer: Arc::new(NoopObserver),
        }
    }

    /// Set the data fetcher
    #[must_use]
    pub fn fetcher(mut self, fetcher: impl DataFetcher + 'static) -> Self {
        self.fetcher = Some(Arc::new(fetcher));
        self
    }

    /// Set a shared data fetcher
    #[must_use]
    pub fn shared_fetcher(mut self, fetcher: Arc<dyn DataFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Set the request validator
    #[must_use]
    pub fn validator(mut self, validator: impl RequestValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Set the change observer
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn ListObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build the controller.
    ///
    /// A fetcher is required unless rows are supplied by the owner.
    pub fn build(self) -> Result<PaginatedListController> {
        self.config.validate()?;

        let fetcher: Arc<dyn DataFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None if self.config.use_outside_data => Arc::new(NoFetcher),
            None => {
                return Err(Error::config(
                    "a data fetcher is required unless use_outside_data is set",
                ))
            }
        };

        Ok(PaginatedListController::with_parts(
            self.config,
            fetcher,
            self.validator,
            self.observer,
        ))
    }
}

impl std::fmt::Debug for ControllerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerBuilder")
            .field("config", &self.config)
            .field("has_fetcher", &self.fetcher.is_some())
            .finish_non_exhaustive()
    }
}
