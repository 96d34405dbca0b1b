use serde::Deserialize;

use crate::error::GeocodeError;

/// Initial map center when nothing is picked yet: Dubai.
pub const MAP_DEFAULT_CENTER: OrderLocation = OrderLocation {
    lat: 25.276_987,
    lng: 55.296_249,
};

/// One search hit from the geocode service, coordinates as the strings
/// the API returns them in.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl Place {
    /// Parses the string coordinates into an [`OrderLocation`].
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Coordinate`] if either value is not a
    /// number.
    pub fn location(&self) -> Result<OrderLocation, GeocodeError> {
        let parse = |value: &str| -> Result<f64, GeocodeError> {
            value.parse().map_err(|_| GeocodeError::Coordinate {
                value: value.to_string(),
            })
        };
        Ok(OrderLocation::new(parse(&self.lat)?, parse(&self.lon)?))
    }
}

/// A picked delivery coordinate, from the map or a search hit.
///
/// Displays as `"lat, lng"` with 6 decimal places — the exact string
/// written into the order form's location field. Typing freeform text
/// into that field instead is allowed and bypasses this type entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderLocation {
    pub lat: f64,
    pub lng: f64,
}

impl OrderLocation {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for OrderLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}
