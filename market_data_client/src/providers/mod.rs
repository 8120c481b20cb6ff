//! Data source abstraction for chart data.
//!
//! This module defines the [`DataSource`] trait, the single seam through which
//! the chart pipeline obtains a [`BarSeries`]. Concrete sources:
//!
//! - [`http::HttpProvider`] talks to the stock-data HTTP endpoint.
//! - [`file::JsonFileProvider`] replays a response document saved on disk.
//!
//! The trait is async and object safe, so callers usually hold an
//! `Arc<dyn DataSource>` and choose the concrete source at runtime.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data_client::models::{bar_series::BarSeries, request_params::StockDataRequest};
//! use market_data_client::providers::{DataSource, ProviderError};
//!
//! struct EmptySource;
//!
//! #[async_trait]
//! impl DataSource for EmptySource {
//!     async fn fetch_series(
//!         &self,
//!         request: &StockDataRequest,
//!     ) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries {
//!             symbol: request.code.clone(),
//!             stock_name: request.code.clone(),
//!             period: request.period,
//!             bars: vec![],
//!         })
//!     }
//! }
//! ```

pub mod file;
pub mod http;
pub mod response;

use std::path::PathBuf;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar_series::BarSeries, request_params::StockDataRequest};

/// Source of one-shot chart data requests.
///
/// Each call is a single request/response; implementations hold no
/// per-request state and may be shared freely.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the bar series for `request`.
    ///
    /// # Returns
    ///
    /// * `Ok(BarSeries)` - The series as delivered by the source, unvalidated.
    /// * `Err(ProviderError)` - Transport failure or a business error reported
    ///   by the source.
    async fn fetch_series(&self, request: &StockDataRequest) -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// base url + endpoint do not form a valid URL.
    #[snafu(display("Invalid data source URL {url:?}: {message}"))]
    InvalidBaseUrl {
        url: String,
        message: String,
        backtrace: Backtrace,
    },
}

/// How a failure should be classified for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source could not be reached or answered with something unusable.
    Transport,
    /// The source answered with a business error message.
    Domain,
    /// The request was rejected before it was sent.
    InvalidRequest,
}

/// Errors that can occur within a `DataSource` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// Network failure, timeout or a broken connection.
    #[snafu(display("{source}"))]
    Transport {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// Non-success HTTP status without a business error payload.
    #[snafu(display("HTTP {status}: {body}"))]
    Status {
        status: u16,
        body: String,
        backtrace: Backtrace,
    },

    /// The source reported a business error in the payload's `error` field.
    #[snafu(display("{message}"))]
    Domain {
        message: String,
        backtrace: Backtrace,
    },

    /// The response body could not be decoded into a series.
    #[snafu(display("Malformed response: {source}"))]
    Decode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// The request parameters were rejected before sending.
    #[snafu(display("Invalid request: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },

    /// A file-backed source failed to read its document.
    #[snafu(display("Failed to read {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

impl ProviderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProviderError::Domain { .. } => ErrorKind::Domain,
            ProviderError::Validation { .. } => ErrorKind::InvalidRequest,
            ProviderError::Transport { .. }
            | ProviderError::Status { .. }
            | ProviderError::Decode { .. }
            | ProviderError::Io { .. } => ErrorKind::Transport,
        }
    }
}
