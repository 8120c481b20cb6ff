//! Stochastic KDJ oscillator.

use std::num::NonZeroUsize;

use market_data_client::Bar;

use super::smoothing::weighted_mean;

pub const KDJ_PERIOD: NonZeroUsize = NonZeroUsize::new(9).unwrap();
/// K and D smoothing factor (center of mass 2).
const KDJ_ALPHA: f64 = 1.0 / 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct KdjSeries {
    pub k: Vec<Option<f64>>,
    pub d: Vec<Option<f64>>,
    /// `3k - 2d`; may leave 0..=100.
    pub j: Vec<Option<f64>>,
}

/// KDJ over a `period`-bar high/low window.
///
/// RSV is undefined for the first `period - 1` bars and for windows whose
/// high equals their low; K and D carry their last value across such gaps.
pub fn compute_kdj(period: NonZeroUsize, bars: &[Bar]) -> KdjSeries {
    let n = period.get();
    let rsv: Vec<Option<f64>> = (0..bars.len())
        .map(|i| {
            if i + 1 < n {
                return None;
            }
            let window = &bars[i + 1 - n..=i];
            let low = window.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
            let high = window.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
            (high > low).then(|| (bars[i].close - low) / (high - low) * 100.0)
        })
        .collect();

    let k = weighted_mean(&rsv, KDJ_ALPHA);
    let d = weighted_mean(&k, KDJ_ALPHA);
    let j = k
        .iter()
        .zip(&d)
        .map(|(k, d)| Some(3.0 * (*k)? - 2.0 * (*d)?))
        .collect();
    KdjSeries { k, d, j }
}
