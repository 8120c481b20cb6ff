use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use snafu::ResultExt;
use tracing::{debug, info};

use crate::{
    models::{bar_series::BarSeries, request_params::StockDataRequest},
    providers::{
        ClientBuildSnafu, DataSource, InvalidBaseUrlSnafu, ProviderError, ProviderInitError,
        TransportSnafu, ValidationSnafu,
        http::{HttpProviderConfig, params::construct_params},
        response::decode_response,
    },
};

pub struct HttpProvider {
    client: Client,
    endpoint: Url,
}

impl HttpProvider {
    /// Creates a provider for the endpoint described by `config`.
    pub fn new(config: &HttpProviderConfig) -> Result<Self, ProviderInitError> {
        let raw = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.endpoint.trim_start_matches('/')
        );
        let endpoint = Url::parse(&raw)
            .map_err(|e| e.to_string())
            .and_then(|url| {
                if url.cannot_be_a_base() {
                    Err("URL cannot carry a path".to_string())
                } else {
                    Ok(url)
                }
            })
            .map_err(|message| {
                InvalidBaseUrlSnafu {
                    url: raw.clone(),
                    message,
                }
                .build()
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DataSource for HttpProvider {
    async fn fetch_series(&self, request: &StockDataRequest) -> Result<BarSeries, ProviderError> {
        if let Err(message) = request.validate() {
            return ValidationSnafu { message }.fail();
        }

        let query_params = construct_params(request);
        info!(
            code = %request.code,
            start = %request.start_date,
            end = %request.end_date,
            period = %request.period,
            "requesting chart data"
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query_params)
            .send()
            .await
            .context(TransportSnafu)?;

        let status = response.status().as_u16();
        let body = response.text().await.context(TransportSnafu)?;
        debug!(status, bytes = body.len(), "chart data response received");

        decode_response(request, status, &body)
    }
}
