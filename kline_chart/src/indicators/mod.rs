//! Technical indicators derived from a bar series.

pub mod kdj;
pub mod ma;
pub mod macd;
pub mod rsi;
mod smoothing;

use std::fmt;

use market_data_client::Bar;
use serde::{Deserialize, Serialize};

pub use kdj::{KDJ_PERIOD, KdjSeries, compute_kdj};
pub use ma::{MA_WINDOWS, MaPoint, compute_ma};
pub use macd::{MacdSeries, compute_macd};
pub use rsi::{RSI_PERIOD, compute_rsi};

/// Indicators selectable for the technical chart.
///
/// Each can be computed with [`compute_indicator`]; none of them is drawn yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Indicator {
    #[default]
    Macd,
    Kdj,
    Rsi,
}

impl Indicator {
    pub const ALL: [Indicator; 3] = [Indicator::Macd, Indicator::Kdj, Indicator::Rsi];

    pub fn as_token(&self) -> &'static str {
        match self {
            Indicator::Macd => "MACD",
            Indicator::Kdj => "KDJ",
            Indicator::Rsi => "RSI",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Output of one technical indicator, aligned index-for-index with its bars.
#[derive(Debug, Clone, PartialEq)]
pub enum TechnicalSeries {
    Macd(MacdSeries),
    Kdj(KdjSeries),
    Rsi(Vec<Option<f64>>),
}

/// Computes `indicator` with its default parameters.
pub fn compute_indicator(indicator: Indicator, bars: &[Bar]) -> TechnicalSeries {
    match indicator {
        Indicator::Macd => TechnicalSeries::Macd(compute_macd(bars)),
        Indicator::Kdj => TechnicalSeries::Kdj(compute_kdj(KDJ_PERIOD, bars)),
        Indicator::Rsi => TechnicalSeries::Rsi(compute_rsi(RSI_PERIOD, bars)),
    }
}

/// Rounds half away from zero to 2 decimal places and folds `-0.0` into `0.0`.
pub(crate) fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}
