use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use essenza_core::LineItem;

/// Static mapping from uppercase discount code to fractional rate.
///
/// Lookup upper-cases the entered code first, so input is effectively
/// case-insensitive. At most one code applies to an order; entering a new
/// code replaces whatever was applied before.
#[derive(Debug, Clone)]
pub struct DiscountTable {
    codes: HashMap<String, Decimal>,
}

impl Default for DiscountTable {
    /// The storefront's live codes: `SID10` for 10% and `NMK05` for 5%.
    fn default() -> Self {
        let mut codes = HashMap::new();
        codes.insert("SID10".to_string(), Decimal::new(10, 2));
        codes.insert("NMK05".to_string(), Decimal::new(5, 2));
        Self { codes }
    }
}

impl DiscountTable {
    #[must_use]
    pub fn from_codes(codes: HashMap<String, Decimal>) -> Self {
        Self { codes }
    }

    /// Rate for a code, matched case-insensitively.
    #[must_use]
    pub fn rate(&self, entered: &str) -> Option<Decimal> {
        self.codes.get(&entered.to_uppercase()).copied()
    }
}

/// What happened to the discount code entered with an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiscountOutcome {
    /// No code was entered.
    None,
    /// The code matched; its canonical uppercase form is recorded.
    Applied { code: String, rate: Decimal },
    /// The code did not match. Any previously applied discount is gone:
    /// the quote carries a zero discount. Non-fatal.
    Invalid { entered: String },
}

impl DiscountOutcome {
    /// The applied code label, for the "Discount (CODE)" summary line.
    #[must_use]
    pub fn applied_code(&self) -> Option<&str> {
        match self {
            DiscountOutcome::Applied { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// A fully computed order quote.
///
/// All amounts are exact decimals; nothing is rounded until formatting.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub total_items: u32,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub discount: DiscountOutcome,
    /// Subtotal minus discount, before VAT.
    pub final_total: Decimal,
    pub vat_rate: Decimal,
    pub vat_amount: Decimal,
    pub grand_total: Decimal,
}

impl Quote {
    /// Prices the cart: subtotal, discount (if `entered_code` matches the
    /// table), VAT on the discounted amount, grand total.
    #[must_use]
    pub fn compute(
        items: &[LineItem],
        entered_code: Option<&str>,
        discounts: &DiscountTable,
        vat_rate: Decimal,
    ) -> Self {
        let total_items = items.iter().map(|i| i.quantity).sum();
        let subtotal: Decimal = items
            .iter()
            .map(|i| i.price * Decimal::from(i.quantity))
            .sum();

        let (discount, discount_amount) = match entered_code.map(str::trim).filter(|c| !c.is_empty())
        {
            None => (DiscountOutcome::None, Decimal::ZERO),
            Some(entered) => match discounts.rate(entered) {
                Some(rate) => (
                    DiscountOutcome::Applied {
                        code: entered.to_uppercase(),
                        rate,
                    },
                    subtotal * rate,
                ),
                None => (
                    DiscountOutcome::Invalid {
                        entered: entered.to_string(),
                    },
                    Decimal::ZERO,
                ),
            },
        };

        let final_total = subtotal - discount_amount;
        let vat_amount = final_total * vat_rate;
        let grand_total = final_total + vat_amount;

        Self {
            total_items,
            subtotal,
            discount_amount,
            discount,
            final_total,
            vat_rate,
            vat_amount,
            grand_total,
        }
    }
}
