//! Relative strength index over simple rolling means of gains and losses.

use std::num::NonZeroUsize;

use market_data_client::Bar;

pub const RSI_PERIOD: NonZeroUsize = NonZeroUsize::new(14).unwrap();

/// RSI of closes, one point per bar.
///
/// The first bar has no predecessor and counts as a zero change, so the
/// first value appears at index `period - 1`. A window with losses but no
/// gains is 0, gains but no losses is 100, and a window without any movement
/// is `None`.
pub fn compute_rsi(period: NonZeroUsize, bars: &[Bar]) -> Vec<Option<f64>> {
    let n = period.get();
    let deltas: Vec<f64> = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| if i == 0 { 0.0 } else { bar.close - bars[i - 1].close })
        .collect();

    (0..deltas.len())
        .map(|i| {
            if i + 1 < n {
                return None;
            }
            let window = &deltas[i + 1 - n..=i];
            let gain = window.iter().filter(|d| **d > 0.0).sum::<f64>() / n as f64;
            let loss = -window.iter().filter(|d| **d < 0.0).sum::<f64>() / n as f64;
            if loss == 0.0 {
                (gain > 0.0).then_some(100.0)
            } else {
                Some(100.0 - 100.0 / (1.0 + gain / loss))
            }
        })
        .collect()
}
