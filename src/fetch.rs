//! Data fetcher and request validator capabilities
//!
//! The controller never talks to a transport directly. It hands the built
//! parameters to a [`DataFetcher`] and treats the returned JSON as opaque
//! until it is normalized. A [`RequestValidator`] may veto a request before
//! anything is dispatched.

use crate::error::{Error, Result};
use crate::types::{JsonValue, QueryParams};
use async_trait::async_trait;
use std::future::Future;

// ============================================================================
// Data Fetcher
// ============================================================================

/// Retrieves one page (or the whole list) for a set of parameters
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Fetch the raw result for `params`
    async fn fetch(&self, params: QueryParams) -> Result<JsonValue>;
}

#[async_trait]
impl<F, Fut> DataFetcher for F
where
    F: Fn(QueryParams) -> Fut + Send + Sync,
    Fut: Future<Output = Result<JsonValue>> + Send,
{
    async fn fetch(&self, params: QueryParams) -> Result<JsonValue> {
        (self)(params).await
    }
}

/// Fetcher used when the owner supplies rows. Calling it is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFetcher;

#[async_trait]
impl DataFetcher for NoFetcher {
    async fn fetch(&self, _params: QueryParams) -> Result<JsonValue> {
        Err(Error::config("no data fetcher configured"))
    }
}

// ============================================================================
// Request Validator
// ============================================================================

/// Decides whether a request may be dispatched
pub trait RequestValidator: Send + Sync {
    /// `false` rejects the request before any side effect
    fn validate(&self) -> bool;
}

impl<F> RequestValidator for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn validate(&self) -> bool {
        (self)()
    }
}

/// Validator that accepts every request
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysValid;

impl RequestValidator for AlwaysValid {
    fn validate(&self) -> bool {
        true
    }
}
