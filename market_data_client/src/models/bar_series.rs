//! A collection of bars for one symbol and period.

use crate::models::{bar::Bar, period::Period};

/// Represents a complete, self-describing set of bars for a single symbol.
///
/// A series is produced fresh by every successful fetch and is not mutated
/// afterwards. Bars are expected in ascending date order with no duplicate
/// dates; [`BarSeries::first_unordered_index`] reports where that breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The code that was requested (e.g. "600519").
    pub symbol: String,
    /// Display name reported by the data source.
    pub stock_name: String,
    /// Granularity of each bar.
    pub period: Period,
    /// The OHLCV bars, oldest first.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Index of the first bar whose date is not strictly after its
    /// predecessor's, or `None` when the series is properly ordered.
    pub fn first_unordered_index(&self) -> Option<usize> {
        first_unordered_index(&self.bars)
    }
}

/// Same check as [`BarSeries::first_unordered_index`], on a bare slice.
pub fn first_unordered_index(bars: &[Bar]) -> Option<usize> {
    bars.windows(2)
        .position(|pair| pair[1].date <= pair[0].date)
        .map(|i| i + 1)
}
