use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use crate::config::ProxyConfig;

use super::errors::UpstreamError;
use super::types::UpstreamQuery;

/// Header carrying the RajaOngkir API key
pub(crate) const API_KEY_HEADER: &str = "key";

/// Longest slice of an error body echoed back in `UpstreamError::Status`
const MAX_ERROR_BODY: usize = 256;

/// Source of upstream documents for the fetch-or-cache layer
#[async_trait]
pub trait RemoteClient: Send + Sync + 'static {
    async fn fetch(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError>;
}

/// reqwest-backed client for the RajaOngkir REST API
#[derive(Debug, Clone)]
pub struct RajaOngkirClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RajaOngkirClient {
    /// Create a client from the startup configuration.
    ///
    /// The request timeout bounds the whole exchange (connect, send, and read
    /// the body).
    pub fn new(config: &ProxyConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, query: &UpstreamQuery) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, query.path());
        tracing::debug!("RajaOngkir request: {} {}", query.operation(), url);

        let builder = match query {
            UpstreamQuery::Provinces | UpstreamQuery::AllCities => self.http.get(&url),
            UpstreamQuery::CitiesInProvince { province_id } => self
                .http
                .get(&url)
                .query(&[("province", province_id.to_string())]),
            UpstreamQuery::Subdistricts { city_id } => {
                self.http.get(&url).query(&[("city", city_id.to_string())])
            }
            UpstreamQuery::ShippingCost(q) => self.http.post(&url).form(&[
                ("origin", q.origin.clone()),
                ("originType", "city".to_string()),
                ("destination", q.destination.clone()),
                ("destinationType", "city".to_string()),
                ("weight", q.weight.to_string()),
                ("courier", q.courier.clone()),
            ]),
        };

        builder.header(API_KEY_HEADER, &self.api_key)
    }
}

#[async_trait]
impl RemoteClient for RajaOngkirClient {
    async fn fetch(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError> {
        let response = self.request(query).send().await.map_err(|e| {
            tracing::error!("RajaOngkir {} request failed: {}", query.operation(), e);
            UpstreamError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                "RajaOngkir {} failed with status: {}",
                query.operation(),
                status
            );
            // The status is the error; an unreadable body must not replace it
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let body = response.text().await?;

        let document: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("RajaOngkir {} returned invalid JSON: {}", query.operation(), e);
            UpstreamError::from(e)
        })?;

        Ok(document)
    }
}

fn truncate(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
