//! Decoding of the chart endpoint's response document.
//!
//! The endpoint answers with either
//! `{"stock_name": "...", "data": [bar, ...]}` or `{"error": "..."}`.
//! An `error` field wins over everything else, including a 2xx status.

use serde::Deserialize;
use serde_json::Value;
use snafu::ResultExt;

use crate::{
    models::{bar::Bar, bar_series::BarSeries, request_params::StockDataRequest},
    providers::{DecodeSnafu, DomainSnafu, ProviderError, StatusSnafu},
};

/// Longest slice of a non-JSON error body kept in [`ProviderError::Status`].
const MAX_BODY_PREVIEW: usize = 200;

#[derive(Deserialize, Debug)]
pub struct SuccessPayload {
    #[serde(default)]
    pub stock_name: Option<String>,
    pub data: Vec<Bar>,
}

/// Decodes a response body into a [`BarSeries`] for `request`.
///
/// # Arguments
///
/// * `request` - The request that produced the body; supplies symbol and period.
/// * `status` - HTTP status code (file sources pass 200).
/// * `body` - Raw response text.
pub fn decode_response(
    request: &StockDataRequest,
    status: u16,
    body: &str,
) -> Result<BarSeries, ProviderError> {
    let success = (200..300).contains(&status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !success => {
            return StatusSnafu {
                status,
                body: preview(body),
            }
            .fail();
        }
        Err(source) => return Err(source).context(DecodeSnafu),
    };

    if let Some(message) = domain_error(&value) {
        return DomainSnafu { message }.fail();
    }

    if !success {
        return StatusSnafu {
            status,
            body: preview(body),
        }
        .fail();
    }

    let payload: SuccessPayload = serde_json::from_value(value).context(DecodeSnafu)?;

    Ok(BarSeries {
        symbol: request.code.clone(),
        stock_name: payload
            .stock_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| request.code.clone()),
        period: request.period,
        bars: payload.data,
    })
}

fn domain_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn preview(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_BODY_PREVIEW) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
