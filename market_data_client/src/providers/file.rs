//! Replays a saved chart-data response from disk.
//!
//! Useful for offline rendering: save the JSON the endpoint returned once and
//! point the CLI at it with `--source-file`.

use std::path::PathBuf;

use async_trait::async_trait;
use snafu::ResultExt;
use tracing::info;

use crate::{
    models::{bar_series::BarSeries, request_params::StockDataRequest},
    providers::{DataSource, IoSnafu, ProviderError, ValidationSnafu, response::decode_response},
};

/// A [`DataSource`] that answers every request with one document on disk.
///
/// The document uses the same shape and decoding rules as the HTTP
/// endpoint; bars outside the requested date range are dropped.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for JsonFileProvider {
    async fn fetch_series(&self, request: &StockDataRequest) -> Result<BarSeries, ProviderError> {
        if let Err(message) = request.validate() {
            return ValidationSnafu { message }.fail();
        }

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .context(IoSnafu {
                path: self.path.clone(),
            })?;

        let mut series = decode_response(request, 200, &body)?;
        series
            .bars
            .retain(|bar| bar.date >= request.start_date && bar.date <= request.end_date);
        info!(
            path = %self.path.display(),
            bars = series.len(),
            "loaded chart data from file"
        );
        Ok(series)
    }
}
