//! WeatherAPI.com current conditions client
//!
//! This module fetches the current conditions for a city from the
//! `/v1/current.json` endpoint and classifies the answer as a result, an
//! unknown city, or a transport failure.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::CurrentWeather;

/// Default base URL for WeatherAPI.com
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com";

/// Path of the current conditions endpoint, relative to the base URL
const CURRENT_PATH: &str = "/v1/current.json";

/// Message used when the API reports an error without one
const DEFAULT_ERROR_MESSAGE: &str = "No matching location found.";

/// Errors that can occur when fetching current conditions
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with an error object: the location did not resolve
    #[error("Invalid city name: {message}")]
    InvalidCity {
        /// WeatherAPI error code, if present (1006 for unknown locations)
        code: Option<i64>,
        /// WeatherAPI error message
        message: String,
    },

    /// The request or the response body could not be handled
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FetchError {
    /// Returns true if the API rejected the city
    pub fn is_invalid_city(&self) -> bool {
        matches!(self, FetchError::InvalidCity { .. })
    }
}

/// Network and decoding failures
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(&'static str),
}

/// Client for fetching current conditions from WeatherAPI.com
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Create a new WeatherClient for the public API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at another server (a proxy, or a mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current conditions for a city
    ///
    /// # Arguments
    /// * `city` - The city query, sent as the `q` parameter
    ///
    /// # Returns
    /// * `Ok(CurrentWeather)` - Conditions for the resolved location
    /// * `Err(FetchError::InvalidCity)` - If the API reports an error object
    /// * `Err(FetchError::Transport)` - If the request or parsing fails
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let url = format!("{}{}", self.base_url, CURRENT_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await
            .map_err(TransportError::from)?;

        let status = response.status();
        let text = response.text().await.map_err(TransportError::from)?;
        debug!(%status, bytes = text.len(), "current conditions response received");

        // Unknown cities come back as 400 with an error body, so the body is
        // classified regardless of the status code.
        parse_current_response(&text)
    }
}

/// Classify a `current.json` response body.
///
/// An `error` object anywhere in the body wins over any payload; otherwise
/// `location.name`, `current.temp_c` and `current.condition.text` must all be
/// present.
pub fn parse_current_response(body: &str) -> Result<CurrentWeather, FetchError> {
    let response: Value = serde_json::from_str(body).map_err(TransportError::from)?;

    // Checked before any payload field is decoded, so a partial payload next
    // to an error object still classifies as an unknown city.
    if let Some(error) = response.get("error").filter(|error| !error.is_null()) {
        return Err(FetchError::InvalidCity {
            code: error.get("code").and_then(Value::as_i64),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_ERROR_MESSAGE)
                .to_string(),
        });
    }

    let location: ApiLocation = payload_field(&response, "location")?;
    let current: ApiCurrent = payload_field(&response, "current")?;

    Ok(CurrentWeather {
        name: location.name,
        temperature: current.temp_c,
        condition: current.condition.text,
    })
}

fn payload_field<T: DeserializeOwned>(
    response: &Value,
    field: &'static str,
) -> Result<T, TransportError> {
    let value = response
        .get(field)
        .filter(|value| !value.is_null())
        .ok_or(TransportError::MissingField(field))?;
    Ok(T::deserialize(value)?)
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}
