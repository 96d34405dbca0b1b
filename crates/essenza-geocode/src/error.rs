use thiserror::Error;

/// Errors returned by the geocode search client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The supplied base URL could not be parsed.
    #[error("invalid geocoder base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A search result carried a coordinate that is not a number.
    #[error("invalid coordinate '{value}' in search result")]
    Coordinate { value: String },
}
