//! Simple moving average over closing prices.

use std::num::NonZeroUsize;

use market_data_client::Bar;
use serde::{Serialize, Serializer};

use super::round2;

/// Window sizes drawn on the price chart, in legend order.
pub const MA_WINDOWS: [NonZeroUsize; 3] = [
    NonZeroUsize::new(5).unwrap(),
    NonZeroUsize::new(10).unwrap(),
    NonZeroUsize::new(20).unwrap(),
];

/// One point of a moving-average line.
///
/// Serializes as the chart's missing-data marker `"-"` or as a plain number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaPoint {
    /// Fewer than `window` bars precede this position.
    Unavailable,
    /// Mean close of the trailing window, rounded to 2 decimals.
    Value(f64),
}

impl MaPoint {
    pub fn value(&self) -> Option<f64> {
        match self {
            MaPoint::Unavailable => None,
            MaPoint::Value(v) => Some(*v),
        }
    }
}

impl Serialize for MaPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaPoint::Unavailable => serializer.serialize_str("-"),
            MaPoint::Value(v) => serializer.serialize_f64(*v),
        }
    }
}

/// Computes the `window`-bar simple moving average of closes.
///
/// The output has one point per bar. Positions `0..window-1` are
/// [`MaPoint::Unavailable`]; every later position `i` holds the mean of
/// closes `i-window+1..=i`. Bars are taken in the order given.
pub fn compute_ma(window: NonZeroUsize, bars: &[Bar]) -> Vec<MaPoint> {
    let n = window.get();
    (0..bars.len())
        .map(|i| {
            if i + 1 < n {
                MaPoint::Unavailable
            } else {
                let sum: f64 = bars[i + 1 - n..=i].iter().map(|bar| bar.close).sum();
                MaPoint::Value(round2(sum / n as f64))
            }
        })
        .collect()
}
