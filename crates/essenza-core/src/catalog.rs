use std::collections::{HashMap, HashSet};
use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A purchasable size option of a [`Product`], with its own price pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variation {
    /// Size label shown to the shopper, e.g. `"50ml"`.
    pub size: String,
    /// Current unit price, currency-agnostic.
    pub price: Decimal,
    /// Struck-through comparison price, used only for the "% OFF" badge.
    pub original_price: Decimal,
}

impl Variation {
    /// Percentage saved against the original price, rounded to the
    /// nearest integer. Zero when the original price is zero.
    #[must_use]
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.price, self.original_price)
    }
}

/// An immutable catalog entry. Defined once at load time and shared
/// read-only by every consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Path to the product image asset.
    pub image: String,
    /// Display price of the cheapest advertised variation.
    pub base_price: Decimal,
    pub base_original_price: Decimal,
    /// Ordered size options; never empty after validation.
    pub variations: Vec<Variation>,
}

impl Product {
    /// Percentage saved on the base price, for the catalog card badge.
    #[must_use]
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.base_price, self.base_original_price)
    }
}

fn discount_percent(price: Decimal, original: Decimal) -> i64 {
    if original.is_zero() {
        return 0;
    }
    let pct = (original - price) / original * Decimal::from(100);
    pct.round().to_i64().unwrap_or(0)
}

/// The full product catalog plus the blocked-size policy table.
///
/// The policy is an explicit mapping from product id to the size labels
/// that product must not sell, matched case-insensitively. It is part of
/// the catalog file so the referential check below can run at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    /// Product id -> blocked size labels. Products absent from the map
    /// have no blocked sizes.
    #[serde(default)]
    pub blocked_sizes: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Looks up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownProduct`] if no product matches.
    pub fn product(&self, id: &str) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))
    }

    /// Blocked size labels for a product, lower-cased for comparison.
    /// Empty for products without a policy entry.
    #[must_use]
    pub fn blocked_sizes(&self, product_id: &str) -> HashSet<String> {
        self.blocked_sizes
            .get(product_id)
            .map(|sizes| sizes.iter().map(|s| s.to_lowercase()).collect())
            .unwrap_or_default()
    }
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: Catalog = serde_yaml::from_str(&content)?;
    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for product in &catalog.products {
        if product.id.trim().is_empty() {
            return Err(CatalogError::Validation(
                "product id must be non-empty".to_string(),
            ));
        }
        if product.name.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "product '{}' has an empty name",
                product.id
            )));
        }
        if !seen_ids.insert(product.id.clone()) {
            return Err(CatalogError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }
        if product.variations.is_empty() {
            return Err(CatalogError::Validation(format!(
                "product '{}' has no variations",
                product.id
            )));
        }

        let mut seen_sizes = HashSet::new();
        for variation in &product.variations {
            if !seen_sizes.insert(variation.size.to_lowercase()) {
                return Err(CatalogError::Validation(format!(
                    "product '{}' has duplicate size '{}'",
                    product.id, variation.size
                )));
            }
            if variation.price > variation.original_price {
                // Display bug in the source data, not a load failure.
                tracing::warn!(
                    product_id = %product.id,
                    size = %variation.size,
                    "variation price exceeds its original price"
                );
            }
        }
    }

    for (product_id, sizes) in &catalog.blocked_sizes {
        let product = catalog.product(product_id).map_err(|_| {
            CatalogError::Validation(format!(
                "blocked_sizes references unknown product '{product_id}'"
            ))
        })?;
        for size in sizes {
            let exists = product
                .variations
                .iter()
                .any(|v| v.size.eq_ignore_ascii_case(size));
            if !exists {
                return Err(CatalogError::Validation(format!(
                    "blocked size '{}' does not exist on product '{}'",
                    size, product_id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    fn make_variation(size: &str, price: &str, original: &str) -> Variation {
        Variation {
            size: size.to_string(),
            price: dec(price),
            original_price: dec(original),
        }
    }

    fn make_product(id: &str, variations: Vec<Variation>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Ruhi - Product {id}"),
            category: "Signature Collection".to_string(),
            description: "A captivating blend.".to_string(),
            image: "/assets/product.png".to_string(),
            base_price: dec("145"),
            base_original_price: dec("190"),
            variations,
        }
    }

    fn two_size_catalog() -> Catalog {
        Catalog {
            products: vec![make_product(
                "1",
                vec![
                    make_variation("50ml", "145", "190"),
                    make_variation("100ml", "265", "350"),
                ],
            )],
            blocked_sizes: HashMap::new(),
        }
    }

    #[test]
    fn product_lookup_finds_existing_id() {
        let catalog = two_size_catalog();
        let product = catalog.product("1").expect("product 1 should exist");
        assert_eq!(product.variations.len(), 2);
    }

    #[test]
    fn product_lookup_unknown_id_errors() {
        let catalog = two_size_catalog();
        let err = catalog.product("99").unwrap_err();
        assert!(err.to_string().contains("unknown product id"));
    }

    #[test]
    fn blocked_sizes_empty_without_policy_entry() {
        let catalog = two_size_catalog();
        assert!(catalog.blocked_sizes("1").is_empty());
    }

    #[test]
    fn blocked_sizes_lowercased_for_comparison() {
        let mut catalog = two_size_catalog();
        catalog
            .blocked_sizes
            .insert("1".to_string(), vec!["50ML".to_string()]);
        let blocked = catalog.blocked_sizes("1");
        assert!(blocked.contains("50ml"));
    }

    #[test]
    fn discount_percent_rounds_to_nearest_integer() {
        // (190 - 145) / 190 * 100 = 23.68... -> 24
        let variation = make_variation("50ml", "145", "190");
        assert_eq!(variation.discount_percent(), 24);
    }

    #[test]
    fn discount_percent_zero_original_is_zero() {
        let variation = make_variation("50ml", "145", "0");
        assert_eq!(variation.discount_percent(), 0);
    }

    #[test]
    fn validate_rejects_empty_variations() {
        let catalog = Catalog {
            products: vec![make_product("1", vec![])],
            blocked_sizes: HashMap::new(),
        };
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("no variations"));
    }

    #[test]
    fn validate_rejects_duplicate_product_id() {
        let catalog = Catalog {
            products: vec![
                make_product("1", vec![make_variation("50ml", "145", "190")]),
                make_product("1", vec![make_variation("50ml", "145", "190")]),
            ],
            blocked_sizes: HashMap::new(),
        };
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate product id"));
    }

    #[test]
    fn validate_rejects_duplicate_size_case_insensitive() {
        let catalog = Catalog {
            products: vec![make_product(
                "1",
                vec![
                    make_variation("50ml", "145", "190"),
                    make_variation("50ML", "150", "200"),
                ],
            )],
            blocked_sizes: HashMap::new(),
        };
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate size"));
    }

    #[test]
    fn validate_rejects_blocked_size_for_unknown_product() {
        let mut catalog = two_size_catalog();
        catalog
            .blocked_sizes
            .insert("42".to_string(), vec!["50ml".to_string()]);
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("unknown product '42'"));
    }

    #[test]
    fn validate_rejects_blocked_size_missing_from_variations() {
        let mut catalog = two_size_catalog();
        catalog
            .blocked_sizes
            .insert("1".to_string(), vec!["75ml".to_string()]);
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("does not exist on product '1'"));
    }

    #[test]
    fn validate_accepts_blocked_size_with_different_case() {
        let mut catalog = two_size_catalog();
        catalog
            .blocked_sizes
            .insert("1".to_string(), vec!["50ML".to_string()]);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn validate_accepts_price_above_original() {
        // Display bug, not a load failure.
        let catalog = Catalog {
            products: vec![make_product("1", vec![make_variation("50ml", "200", "190")])],
            blocked_sizes: HashMap::new(),
        };
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn serde_roundtrip_product() {
        let product = make_product("1", vec![make_variation("50ml", "145", "190")]);
        let json = serde_json::to_string(&product).expect("serialization failed");
        let decoded: Product = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.id, product.id);
        assert_eq!(decoded.variations.len(), 1);
        assert_eq!(decoded.variations[0].price, product.variations[0].price);
    }

    #[test]
    fn load_catalog_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("catalog.yaml");
        assert!(
            path.exists(),
            "catalog.yaml missing at {path:?} — required for this test"
        );
        let catalog = load_catalog(&path).expect("catalog.yaml should load");
        assert_eq!(catalog.products.len(), 4);
        assert!(catalog.blocked_sizes("1").contains("50ml"));
        assert!(catalog.blocked_sizes("3").contains("100ml"));
    }
}
