//! Canonical in-memory representation of one trading period (OHLCV).
//!
//! A [`Bar`] is what every [`DataSource`](crate::providers::DataSource)
//! yields, regardless of which backend shape it was decoded from.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

/// A single OHLCV bar for one calendar date.
///
/// Decoding accepts both the lowercase field names of the chart endpoint and
/// the capitalized names (`Date`, `Open`, ...) used by the analysis endpoint.
/// Any extra fields the backend sends along (amount, turnover rate, ...) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Trading date of this bar.
    #[serde(alias = "Date")]
    pub date: NaiveDate,

    /// Opening price.
    #[serde(alias = "Open")]
    pub open: f64,

    /// Closing price.
    #[serde(alias = "Close")]
    pub close: f64,

    /// Lowest price during the period.
    #[serde(alias = "Low")]
    pub low: f64,

    /// Highest price during the period.
    #[serde(alias = "High")]
    pub high: f64,

    /// Shares traded during the period.
    #[serde(alias = "Volume", deserialize_with = "deserialize_volume")]
    pub volume: u64,
}

/// Ways a bar can break the OHLC contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarDefect {
    #[error("price field `{field}` is not a finite number")]
    NonFinite { field: &'static str },

    #[error("price field `{field}` is negative ({value})")]
    Negative { field: &'static str, value: f64 },

    #[error("prices violate low <= min(open, close) <= max(open, close) <= high")]
    RangeViolation,
}

impl Bar {
    /// Returns `true` when the bar closed strictly above its open.
    ///
    /// A flat bar (`close == open`) is not an up bar.
    pub fn is_up(&self) -> bool {
        self.close > self.open
    }

    /// Checks the price fields against the OHLC contract.
    pub fn check(&self) -> Result<(), BarDefect> {
        let fields = [
            ("open", self.open),
            ("close", self.close),
            ("low", self.low),
            ("high", self.high),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(BarDefect::NonFinite { field });
            }
            if value < 0.0 {
                return Err(BarDefect::Negative { field, value });
            }
        }

        let body_low = self.open.min(self.close);
        let body_high = self.open.max(self.close);
        if self.low <= body_low && body_high <= self.high {
            Ok(())
        } else {
            Err(BarDefect::RangeViolation)
        }
    }
}

/// Volume arrives as an integer from some backends and as a float
/// (`12345.0`) from others. Both are accepted as long as the
/// value is finite and non-negative.
fn deserialize_volume<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct VolumeVisitor;

    impl de::Visitor<'_> for VolumeVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a non-negative volume")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom(format!("negative volume {v}")))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if v.is_finite() && v >= 0.0 {
                Ok(v.round() as u64)
            } else {
                Err(E::custom(format!("invalid volume {v}")))
            }
        }
    }

    deserializer.deserialize_any(VolumeVisitor)
}
