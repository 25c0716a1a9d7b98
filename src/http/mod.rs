//! HTTP data fetcher
//!
//! Sends the built request parameters to an endpoint and returns the JSON
//! body as the raw fetch result.
//!
//! # Features
//!
//! - **Query or body**: `GET` renders params as query string, `POST` sends them as JSON
//! - **Status classification**: non-2xx responses become `HttpStatus` errors
//! - **No retries**: every failure goes straight back to the controller

mod client;

pub use client::{render_query, HttpClientConfig, HttpClientConfigBuilder, HttpFetcher};
