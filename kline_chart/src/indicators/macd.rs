//! MACD (12/26 EMA spread) with its 9-period signal line.

use market_data_client::Bar;

use super::smoothing::ema;

pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Three parallel lines, one value per bar. Defined from the first bar on.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    /// Fast EMA minus slow EMA of closes.
    pub macd: Vec<f64>,
    /// EMA of `macd`.
    pub signal: Vec<f64>,
    /// `macd - signal`.
    pub histogram: Vec<f64>,
}

pub fn compute_macd(bars: &[Bar]) -> MacdSeries {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let fast = ema(&closes, MACD_FAST);
    let slow = ema(&closes, MACD_SLOW);
    let macd: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = ema(&macd, MACD_SIGNAL);
    let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();
    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
