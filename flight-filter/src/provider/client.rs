//! Flight search HTTP client.
//!
//! Issues one outbound request per search to the SerpApi Google Flights
//! endpoint. The request is bounded by a fixed timeout; any failure is
//! surfaced once to the caller with no retry or caching.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::Iata;

use super::error::ProviderError;
use super::types::SearchResponse;

/// Default base URL for the SerpApi search endpoint.
const DEFAULT_BASE_URL: &str = "https://serpapi.com/search.json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the flight search client.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production SerpApi)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Currency for quoted prices
    pub currency: String,
}

impl ProviderConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            currency: "EUR".to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the price currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

/// Parameters for one flight search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Origin airport.
    pub origin: Iata,
    /// Destination airport.
    pub destination: Iata,
    /// Outbound date.
    pub outbound_date: NaiveDate,
    /// Return date; `None` makes this a one-way search.
    pub return_date: Option<NaiveDate>,
    /// Number of adult passengers.
    pub adults: u32,
    /// Number of child passengers.
    pub children: u32,
}

impl SearchQuery {
    /// Create a one-way query for one adult.
    pub fn one_way(origin: Iata, destination: Iata, outbound_date: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            outbound_date,
            return_date: None,
            adults: 1,
            children: 0,
        }
    }

    /// Set a return date, making this a round trip.
    pub fn with_return(mut self, date: NaiveDate) -> Self {
        self.return_date = Some(date);
        self
    }

    /// Set passenger counts.
    pub fn with_passengers(mut self, adults: u32, children: u32) -> Self {
        self.adults = adults;
        self.children = children;
        self
    }
}

/// Flight search API client.
#[derive(Debug, Clone)]
pub struct FlightClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    currency: String,
}

impl FlightClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            currency: config.currency,
        })
    }

    /// Currency prices are quoted in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Run one flight search.
    ///
    /// A payload-level `error` field from the provider is mapped to
    /// [`ProviderError::Search`], so an `Ok` response always carries a
    /// usable offer payload.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, ProviderError> {
        let mut params: Vec<(&str, String)> = vec![
            ("api_key", self.api_key.clone()),
            ("engine", "google_flights".to_string()),
            ("departure_id", query.origin.as_str().to_string()),
            ("arrival_id", query.destination.as_str().to_string()),
            ("outbound_date", query.outbound_date.format("%Y-%m-%d").to_string()),
            ("adults", query.adults.to_string()),
            ("children", query.children.to_string()),
            ("currency", self.currency.clone()),
            ("hl", "en".to_string()),
        ];

        // Trip type: 1 = round trip, 2 = one way
        match query.return_date {
            Some(return_date) => {
                params.push(("return_date", return_date.format("%Y-%m-%d").to_string()));
                params.push(("type", "1".to_string()));
            }
            None => params.push(("type", "2".to_string())),
        }

        debug!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.outbound_date,
            "searching flights"
        );

        let response = self.http.get(&self.base_url).query(&params).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        reject_payload_error(parsed)
    }
}

/// Map a payload-level error indicator to a hard search failure.
///
/// The provider reports key and quota problems inside an otherwise successful
/// HTTP response, so an `Ok` from here is the only path to a usable offer
/// payload.
fn reject_payload_error(mut response: SearchResponse) -> Result<SearchResponse, ProviderError> {
    match response.error.take() {
        Some(message) => Err(ProviderError::Search(message)),
        None => Ok(response),
    }
}
