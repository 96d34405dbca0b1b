//! Core domain model for the Essenza storefront.
//!
//! Owns the product catalog (loaded and validated from YAML), the
//! blocked-size policy and product selector, the in-session cart store,
//! and the env-driven application configuration. Pricing, checkout, and
//! the geocode client live in their own crates.

pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod selector;

pub use app_config::AppConfig;
pub use cart::{CartStore, LineItem};
pub use catalog::{load_catalog, Catalog, Product, Variation};
pub use error::{CatalogError, ConfigError};
pub use selector::Selector;
