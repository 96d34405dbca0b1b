//! HTTP client for the Nominatim search endpoint.
//!
//! Wraps `reqwest` with the storefront's degradation policy: a failed or
//! malformed search turns into an empty suggestion list, never a fatal
//! error surfaced to the shopper.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::Place;

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/";

/// Client for the geocode search API.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_base_url`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a new client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeocodeError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::BaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // `search` path segment joins onto the root rather than replacing
        // the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeocodeError::BaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Free-text location search: `search?format=json&q=<query>`.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search(&self, query: &str) -> Result<Vec<Place>, GeocodeError> {
        let url = self.build_url(query)?;
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// [`search`](Self::search) with the storefront degradation policy:
    /// any failure logs a warning and yields an empty suggestion list.
    pub async fn search_or_empty(&self, query: &str) -> Vec<Place> {
        match self.search(query).await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(query, error = %e, "geocode search failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Builds the search URL with a properly percent-encoded query.
    fn build_url(&self, query: &str) -> Result<Url, GeocodeError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| GeocodeError::BaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query);
        Ok(url)
    }
}
