use crate::models::request_params::{DATE_FORMAT, StockDataRequest};

/// Builds the query string pairs for a chart-data request.
pub fn construct_params(request: &StockDataRequest) -> Vec<(String, String)> {
    vec![
        ("code".to_string(), request.code.trim().to_string()),
        (
            "start_date".to_string(),
            request.start_date.format(DATE_FORMAT).to_string(),
        ),
        (
            "end_date".to_string(),
            request.end_date.format(DATE_FORMAT).to_string(),
        ),
        ("period".to_string(), request.period.as_token().to_string()),
    ]
}
