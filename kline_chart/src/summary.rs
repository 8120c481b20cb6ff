//! Headline numbers for the most recent bar.

use market_data_client::Bar;

use crate::{error::ChartError, indicators::round2};

/// Volume is shown in units of 10,000 shares.
pub const VOLUME_UNIT: f64 = 10_000.0;
pub const VOLUME_SUFFIX: &str = "万";
/// Turnover is shown in units of 100,000,000.
pub const TURNOVER_UNIT: f64 = 100_000_000.0;
pub const TURNOVER_SUFFIX: &str = "亿";
/// Shown in every summary field when there is nothing to summarize.
pub const PLACEHOLDER: &str = "--";

/// Direction of the last close relative to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Change is zero or above.
    Positive,
    Negative,
}

impl Trend {
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Positive => "positive",
            Trend::Negative => "negative",
        }
    }
}

/// Summary of the last two bars of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Close of the last bar.
    pub price: f64,
    /// Last close minus the previous close, rounded to 2 decimals.
    pub change: f64,
    /// `change / previous close * 100` using the rounded `change`, rounded
    /// to 2 decimals; `None` when the previous close is zero.
    pub change_percent: Option<f64>,
    /// Last volume in [`VOLUME_UNIT`]s.
    pub volume: f64,
    /// Last volume times last close, in [`TURNOVER_UNIT`]s.
    pub turnover: f64,
}

/// Text for each summary region plus the styling of the change field.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDisplay {
    pub price: String,
    pub change: String,
    pub volume: String,
    pub turnover: String,
    pub trend: Option<Trend>,
}

impl SummaryDisplay {
    pub fn placeholder() -> Self {
        Self {
            price: PLACEHOLDER.into(),
            change: PLACEHOLDER.into(),
            volume: PLACEHOLDER.into(),
            turnover: PLACEHOLDER.into(),
            trend: None,
        }
    }
}

impl SummaryStats {
    pub fn trend(&self) -> Trend {
        if self.change >= 0.0 {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }

    pub fn display(&self) -> SummaryDisplay {
        let sign = match self.trend() {
            Trend::Positive => "+",
            Trend::Negative => "",
        };
        let percent = match self.change_percent {
            Some(p) => format!("{p:.2}"),
            None => PLACEHOLDER.to_string(),
        };
        SummaryDisplay {
            price: format!("{:.2}", self.price),
            change: format!("{sign}{:.2} ({percent}%)", self.change),
            volume: format!("{:.2}{VOLUME_SUFFIX}", self.volume),
            turnover: format!("{:.2}{TURNOVER_SUFFIX}", self.turnover),
            trend: Some(self.trend()),
        }
    }
}

/// Summarizes the last bar of `bars` against the one before it.
pub fn summarize(bars: &[Bar]) -> Result<SummaryStats, ChartError> {
    let [.., prev, last] = bars else {
        return Err(ChartError::InsufficientData { len: bars.len() });
    };

    // Sign, trend and percent all derive from the rounded change.
    let change = round2(last.close - prev.close);
    let change_percent = (prev.close != 0.0).then(|| round2(change / prev.close * 100.0));
    let volume = last.volume as f64;

    Ok(SummaryStats {
        price: last.close,
        change,
        change_percent,
        volume: volume / VOLUME_UNIT,
        turnover: volume * last.close / TURNOVER_UNIT,
    })
}
