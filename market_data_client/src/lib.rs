//! Client side of the stock chart data contract.
//!
//! [`models`] holds the vendor-agnostic bar types and request parameters;
//! [`providers`] holds the [`DataSource`](providers::DataSource) trait and its
//! HTTP and file-backed implementations.

pub mod models;
pub mod providers;

pub use models::{
    bar::Bar, bar_series::BarSeries, period::Period, request_params::StockDataRequest,
};
pub use providers::{
    DataSource, ErrorKind, ProviderError, ProviderInitError,
    file::JsonFileProvider,
    http::{HttpProvider, HttpProviderConfig},
};
