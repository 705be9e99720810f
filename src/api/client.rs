//! # Countries Client
//!
//! One request: `GET {base_url}/region/{region}?fields=...`. The response is
//! sorted by common name before it reaches the rest of the app. No retries,
//! no backoff; failures are handed back as they happened.

use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;
use thiserror::Error;

use super::types::Country;
use crate::core::catalog::sort_by_common_name;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_REGION: &str = "europe";

/// Field selection sent with every request.
pub const FIELDS: &str = "name,capital,flags,population,currencies,languages,subregion,area";

/// Errors from fetching the country list.
///
/// Each variant keeps the underlying message as-is so the view can show
/// exactly what went wrong.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// The body was not the expected JSON array.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Anything that can produce the country list.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Human-readable description of where the data comes from.
    fn endpoint(&self) -> String;

    /// Fetches the raw, unsorted list.
    async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError>;
}

/// Fetches from `source` and sorts the result by common name.
pub async fn fetch_and_sort(source: &dyn CountrySource) -> Result<Vec<Country>, ApiError> {
    let mut countries = source.fetch_countries().await?;
    sort_by_common_name(&mut countries);
    Ok(countries)
}

/// REST Countries API client.
pub struct RestCountriesClient {
    base_url: String,
    region: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    /// `timeout` of `None` leaves reqwest's default (no timeout).
    pub fn new(base_url: String, region: String, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client ({}), using defaults", e);
            reqwest::Client::new()
        });

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            region,
            client,
        }
    }

    pub fn url(&self) -> String {
        format!("{}/region/{}?fields={}", self.base_url, self.region, FIELDS)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn endpoint(&self) -> String {
        self.url()
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
        let url = self.url();
        info!("Fetching countries: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            info!("Countries request failed: HTTP {}", status.as_u16());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("Countries response: {} bytes", body.len());

        let countries: Vec<Country> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }
}
