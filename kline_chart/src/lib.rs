//! K-line (candlestick) chart pipeline for a single stock.
//!
//! Data flows one way: a [`DataSource`](market_data_client::DataSource)
//! yields a [`BarSeries`](market_data_client::BarSeries), [`format`] turns it
//! into chart-ready columns, [`render`] builds declarative chart specs and
//! [`summary`] derives the headline numbers. [`session`] ties these together
//! behind the query form and drives a display [`Surface`](session::surface::Surface).

pub mod config;
pub mod error;
pub mod format;
pub mod indicators;
#[cfg(feature = "cli")]
pub mod logging;
pub mod render;
pub mod session;
pub mod summary;

pub use error::{ChartError, FetchFailure};
pub use format::{FormattedSeries, format_series};
pub use session::ChartSession;
