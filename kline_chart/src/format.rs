//! Column-oriented view of a bar series, shaped for the chart renderers.

use chrono::NaiveDate;
use market_data_client::{
    Bar,
    models::{bar_series::first_unordered_index, request_params::DATE_FORMAT},
};

use crate::{
    error::ChartError,
    indicators::{MA_WINDOWS, MaPoint, compute_ma},
};

/// Parallel columns derived from a bar series. All columns share one length.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedSeries {
    /// X-axis categories, one per bar.
    pub categories: Vec<NaiveDate>,
    /// `[open, close, low, high]` per bar, the order the candlestick series expects.
    pub values: Vec<[f64; 4]>,
    pub volumes: Vec<u64>,
    pub ma5: Vec<MaPoint>,
    pub ma10: Vec<MaPoint>,
    pub ma20: Vec<MaPoint>,
}

impl FormattedSeries {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories as ISO `YYYY-MM-DD` labels.
    pub fn category_labels(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect()
    }

    /// Whether bar `index` closed above its open.
    pub fn is_up(&self, index: usize) -> bool {
        let [open, close, _, _] = self.values[index];
        close > open
    }

    /// The three moving averages with their legend names.
    pub fn moving_averages(&self) -> [(&'static str, &[MaPoint]); 3] {
        [
            ("MA5", self.ma5.as_slice()),
            ("MA10", self.ma10.as_slice()),
            ("MA20", self.ma20.as_slice()),
        ]
    }
}

/// Reshapes `bars` into chart columns and computes MA5/MA10/MA20.
///
/// Fails with [`ChartError::InvalidInput`] when dates are not strictly
/// ascending or a bar breaks the OHLC contract. An empty input yields empty
/// columns.
pub fn format_series(bars: &[Bar]) -> Result<FormattedSeries, ChartError> {
    if let Some(index) = first_unordered_index(bars) {
        return Err(ChartError::InvalidInput {
            index,
            reason: format!(
                "date {} does not follow {}",
                bars[index].date,
                bars[index - 1].date
            ),
        });
    }
    for (index, bar) in bars.iter().enumerate() {
        bar.check().map_err(|defect| ChartError::InvalidInput {
            index,
            reason: defect.to_string(),
        })?;
    }

    let [w5, w10, w20] = MA_WINDOWS;
    Ok(FormattedSeries {
        categories: bars.iter().map(|b| b.date).collect(),
        values: bars.iter().map(|b| [b.open, b.close, b.low, b.high]).collect(),
        volumes: bars.iter().map(|b| b.volume).collect(),
        ma5: compute_ma(w5, bars),
        ma10: compute_ma(w10, bars),
        ma20: compute_ma(w20, bars),
    })
}
