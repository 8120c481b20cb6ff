//! HTTP source backed by the stock-data endpoint.

pub mod params;
pub mod provider;

use serde::{Deserialize, Serialize};

pub use provider::HttpProvider;

/// Connection settings for [`HttpProvider`].
///
/// Appears as the `[source]` table of the application config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpProviderConfig {
    /// Scheme, host and port of the backend, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Path of the chart-data route.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            endpoint: "/api/stock_data".to_string(),
            timeout_secs: 30,
        }
    }
}
