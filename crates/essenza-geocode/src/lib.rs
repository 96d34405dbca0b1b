//! Location lookup for the checkout form.
//!
//! Wraps the Nominatim search endpoint behind [`GeocodeClient`] and
//! normalizes either a search hit or a direct map pick into the same
//! `"lat, lng"` string the order form stores. Search failures degrade to
//! an empty suggestion list; superseded in-flight searches are discarded
//! via [`SearchSequence`].

pub mod client;
pub mod error;
pub mod session;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use session::SearchSequence;
pub use types::{OrderLocation, Place, MAP_DEFAULT_CENTER};
