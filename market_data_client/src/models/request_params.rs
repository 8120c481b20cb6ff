use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::period::Period;

/// Wire and form format of every date in a request (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters for one chart-data request.
///
/// This is the typed form of the `(code, start_date, end_date, period)` key
/// the backend expects. Both dates are inclusive calendar dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDataRequest {
    /// Stock code as typed by the user (e.g. `"600519"`, `"00700"`).
    pub code: String,

    /// First date of the requested range (inclusive).
    pub start_date: NaiveDate,

    /// Last date of the requested range (inclusive).
    pub end_date: NaiveDate,

    /// Bar granularity.
    #[serde(default)]
    pub period: Period,
}

impl StockDataRequest {
    /// Checks the request before it is sent anywhere.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("stock code must not be empty".to_string());
        }
        if self.start_date > self.end_date {
            return Err(format!(
                "start date {} is after end date {}",
                self.start_date, self.end_date
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(code: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> StockDataRequest {
        StockDataRequest {
            code: code.to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            period: Period::Day,
        }
    }

    #[test]
    fn test_date_format_is_iso_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2025-03-07");
        assert_eq!(NaiveDate::parse_from_str("2025-03-07", DATE_FORMAT).unwrap(), date);
    }

    #[test]
    fn test_validate_accepts_single_day_range() {
        assert!(request("600519", (2025, 1, 2), (2025, 1, 2)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_code_and_inverted_range() {
        assert!(request("  ", (2025, 1, 2), (2025, 1, 3)).validate().is_err());
        let err = request("600519", (2025, 2, 1), (2025, 1, 1)).validate().unwrap_err();
        assert!(err.contains("2025-02-01"));
    }
}
