//! Bar granularity requested from the data source.
//!
//! The backend keys its responses by a lowercase period token (`"day"`,
//! `"week"`, `"month"`). [`Period`] is the typed form of that token and is
//! what the period buttons of the chart page switch between.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid period token: {token:?} (expected day, week or month)")]
pub struct PeriodParseError {
    pub token: String,
}

/// Granularity of each bar in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// One bar per trading day.
    #[default]
    Day,
    /// One bar per calendar week.
    Week,
    /// One bar per calendar month.
    Month,
}

impl Period {
    /// Every period, in the order the buttons are laid out.
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    /// Query-string token understood by the backend.
    pub const fn as_token(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Period::Day),
            "w" | "wk" | "week" | "weekly" => Ok(Period::Week),
            "m" | "mo" | "month" | "monthly" => Ok(Period::Month),
            _ => Err(PeriodParseError {
                token: s.to_string(),
            }),
        }
    }
}
