use std::collections::HashSet;

use crate::cart::LineItem;
use crate::catalog::{Catalog, Product, Variation};
use crate::error::CatalogError;

/// Variations of a product that are actually purchasable under the
/// blocked-size policy, in catalog order.
#[must_use]
pub fn valid_variations<'a>(product: &'a Product, blocked: &HashSet<String>) -> Vec<&'a Variation> {
    product
        .variations
        .iter()
        .filter(|v| !blocked.contains(&v.size.to_lowercase()))
        .collect()
}

/// Per-product selection state: a chosen size variation and a quantity.
///
/// Construction applies the blocked-size policy and defaults to the first
/// valid variation; quantity starts at 1 and never goes below it.
#[derive(Debug)]
pub struct Selector<'a> {
    product: &'a Product,
    valid: Vec<&'a Variation>,
    selected: usize,
    quantity: u32,
}

impl<'a> Selector<'a> {
    /// Builds a selector for the product under the catalog's policy.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NoPurchasableVariation`] when every size
    /// of the product is blocked. Callers surface this as a notice and
    /// keep the page usable.
    pub fn new(catalog: &'a Catalog, product_id: &str) -> Result<Self, CatalogError> {
        let product = catalog.product(product_id)?;
        let blocked = catalog.blocked_sizes(product_id);
        let valid = valid_variations(product, &blocked);
        if valid.is_empty() {
            return Err(CatalogError::NoPurchasableVariation(product.name.clone()));
        }
        Ok(Self {
            product,
            valid,
            selected: 0,
            quantity: 1,
        })
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        self.product
    }

    /// Purchasable variations, in catalog order.
    #[must_use]
    pub fn valid_variations(&self) -> &[&'a Variation] {
        &self.valid
    }

    /// The currently selected variation. Defaults to the first valid one.
    #[must_use]
    pub fn selected(&self) -> &Variation {
        self.valid[self.selected]
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selects a size by label, case-insensitively. Blocked or unknown
    /// sizes are rejected without changing the selection.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnavailableSize`] if the size is not among
    /// the valid variations.
    pub fn select_size(&mut self, size: &str) -> Result<(), CatalogError> {
        match self
            .valid
            .iter()
            .position(|v| v.size.eq_ignore_ascii_case(size))
        {
            Some(index) => {
                self.selected = index;
                Ok(())
            }
            None => Err(CatalogError::UnavailableSize {
                product_id: self.product.id.clone(),
                size: size.to_string(),
            }),
        }
    }

    pub fn increment(&mut self) {
        self.quantity += 1;
    }

    /// Decrements the quantity, clamped at 1. Below the floor this is a
    /// no-op, not an error.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    /// Builds the cart row for the current selection: composite id
    /// `<productId>-<size>`, name suffixed with the size, unit price from
    /// the selected variation.
    #[must_use]
    pub fn line_item(&self) -> LineItem {
        let variation = self.selected();
        LineItem {
            id: format!("{}-{}", self.product.id, variation.size),
            name: format!("{} - {}", self.product.name, variation.size),
            price: variation.price,
            image: self.product.image.clone(),
            category: self.product.category.clone(),
            quantity: self.quantity,
        }
    }
}

/// The featured-grid quick-add path: first valid variation, quantity 1,
/// no selector interaction.
///
/// # Errors
///
/// Returns [`CatalogError::UnknownProduct`] or
/// [`CatalogError::NoPurchasableVariation`] as appropriate.
pub fn quick_add(catalog: &Catalog, product_id: &str) -> Result<LineItem, CatalogError> {
    let selector = Selector::new(catalog, product_id)?;
    Ok(selector.line_item())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal::Decimal;

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal literal")
    }

    fn variation(size: &str, price: &str, original: &str) -> Variation {
        Variation {
            size: size.to_string(),
            price: dec(price),
            original_price: dec(original),
        }
    }

    /// The real storefront policy: products 1/2 block 50ml, 3/4 block
    /// 100ml.
    fn storefront_catalog() -> Catalog {
        let product = |id: &str, name: &str, p50: &str, o50: &str, p100: &str, o100: &str| Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "Signature Collection".to_string(),
            description: "Test fragrance.".to_string(),
            image: format!("/assets/{id}.png"),
            base_price: dec(p50),
            base_original_price: dec(o50),
            variations: vec![variation("50ml", p50, o50), variation("100ml", p100, o100)],
        };

        let mut blocked_sizes = HashMap::new();
        blocked_sizes.insert("1".to_string(), vec!["50ml".to_string()]);
        blocked_sizes.insert("2".to_string(), vec!["50ml".to_string()]);
        blocked_sizes.insert("3".to_string(), vec!["100ml".to_string()]);
        blocked_sizes.insert("4".to_string(), vec!["100ml".to_string()]);

        Catalog {
            products: vec![
                product("1", "Ruhi - Essence of Soul", "145", "190", "265", "350"),
                product("2", "Ruhi - Mystical Garden", "155", "210", "285", "380"),
                product("3", "Ruhi - Golden Sands", "125", "165", "225", "295"),
                product("4", "Ruhi - Royal Promise", "225", "285", "395", "495"),
            ],
            blocked_sizes,
        }
    }

    #[test]
    fn product_one_excludes_50ml_and_defaults_to_100ml() {
        let catalog = storefront_catalog();
        let selector = Selector::new(&catalog, "1").expect("product 1 has a valid size");
        let sizes: Vec<&str> = selector
            .valid_variations()
            .iter()
            .map(|v| v.size.as_str())
            .collect();
        assert_eq!(sizes, vec!["100ml"]);
        assert_eq!(selector.selected().size, "100ml");
    }

    #[test]
    fn product_three_excludes_100ml_and_defaults_to_50ml() {
        let catalog = storefront_catalog();
        let selector = Selector::new(&catalog, "3").expect("product 3 has a valid size");
        assert_eq!(selector.selected().size, "50ml");
    }

    #[test]
    fn selecting_blocked_size_is_rejected() {
        let catalog = storefront_catalog();
        let mut selector = Selector::new(&catalog, "1").expect("selector");
        let err = selector.select_size("50ml").unwrap_err();
        assert!(err.to_string().contains("not available"));
        // Selection unchanged.
        assert_eq!(selector.selected().size, "100ml");
    }

    #[test]
    fn selecting_unknown_size_is_rejected() {
        let catalog = storefront_catalog();
        let mut selector = Selector::new(&catalog, "3").expect("selector");
        assert!(selector.select_size("75ml").is_err());
    }

    #[test]
    fn select_size_is_case_insensitive() {
        let catalog = storefront_catalog();
        let mut selector = Selector::new(&catalog, "3").expect("selector");
        selector.select_size("50ML").expect("50ml is valid");
        assert_eq!(selector.selected().size, "50ml");
    }

    #[test]
    fn all_sizes_blocked_fails_gracefully() {
        let mut catalog = storefront_catalog();
        catalog.blocked_sizes.insert(
            "1".to_string(),
            vec!["50ml".to_string(), "100ml".to_string()],
        );
        let err = Selector::new(&catalog, "1").unwrap_err();
        assert!(matches!(err, CatalogError::NoPurchasableVariation(_)));
    }

    #[test]
    fn quantity_decrement_clamps_at_one() {
        let catalog = storefront_catalog();
        let mut selector = Selector::new(&catalog, "1").expect("selector");
        selector.decrement();
        assert_eq!(selector.quantity(), 1);
        selector.increment();
        selector.increment();
        assert_eq!(selector.quantity(), 3);
        selector.decrement();
        assert_eq!(selector.quantity(), 2);
    }

    #[test]
    fn set_quantity_floors_at_one() {
        let catalog = storefront_catalog();
        let mut selector = Selector::new(&catalog, "1").expect("selector");
        selector.set_quantity(0);
        assert_eq!(selector.quantity(), 1);
        selector.set_quantity(7);
        assert_eq!(selector.quantity(), 7);
    }

    #[test]
    fn line_item_uses_composite_id_and_suffixed_name() {
        let catalog = storefront_catalog();
        let mut selector = Selector::new(&catalog, "3").expect("selector");
        selector.set_quantity(2);
        let item = selector.line_item();
        assert_eq!(item.id, "3-50ml");
        assert_eq!(item.name, "Ruhi - Golden Sands - 50ml");
        assert_eq!(item.price, dec("125"));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn quick_add_picks_first_valid_variation_at_quantity_one() {
        let catalog = storefront_catalog();
        let item = quick_add(&catalog, "1").expect("quick add");
        assert_eq!(item.id, "1-100ml");
        assert_eq!(item.price, dec("265"));
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn quick_add_unknown_product_errors() {
        let catalog = storefront_catalog();
        assert!(quick_add(&catalog, "99").is_err());
    }
}
