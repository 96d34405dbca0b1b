use std::fmt::Write as _;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rust_decimal::Decimal;
use serde::Serialize;

use essenza_core::{CartStore, LineItem};

use crate::error::CheckoutError;
use crate::pricing::{DiscountTable, Quote};

/// Matches JavaScript's `encodeURIComponent`: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The checkout form as the shopper filled it in.
///
/// `name`, `phone`, and `address` are required; the rest are optional and
/// an empty string means unset. `location` holds whatever ended up in the
/// location field — a normalized `"lat, lng"` pair from the picker or
/// freeform text typed directly, accepted verbatim.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub notes: String,
    pub location: String,
}

/// The result of a successful checkout hand-off.
///
/// Fire-and-forget: holding one of these means the message was rendered
/// and the deep link built, nothing more. Whether the chat message is
/// ever sent is outside this system's knowledge.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedOrder {
    pub quote: Quote,
    /// Plain-text order summary, WhatsApp markdown included.
    pub message: String,
    /// `https://wa.me/<phone>?text=<encoded message>`.
    pub url: String,
}

/// Pricing and hand-off configuration, bundled so callers thread one
/// collaborator around instead of four scalars.
#[derive(Debug, Clone)]
pub struct Checkout {
    discounts: DiscountTable,
    vat_rate: Decimal,
    whatsapp_phone: String,
    currency_label: String,
}

impl Checkout {
    #[must_use]
    pub fn new(vat_rate: Decimal, whatsapp_phone: String, currency_label: String) -> Self {
        Self {
            discounts: DiscountTable::default(),
            vat_rate,
            whatsapp_phone,
            currency_label,
        }
    }

    #[must_use]
    pub fn with_discounts(mut self, discounts: DiscountTable) -> Self {
        self.discounts = discounts;
        self
    }

    /// Prices the cart with an optionally entered discount code.
    #[must_use]
    pub fn quote(&self, items: &[LineItem], entered_code: Option<&str>) -> Quote {
        Quote::compute(items, entered_code, &self.discounts, self.vat_rate)
    }

    /// Validates the form and cart without submitting.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`CheckoutError`], one specific variant
    /// per missing field or the empty-cart condition.
    pub fn validate(&self, form: &OrderForm, cart: &CartStore) -> Result<(), CheckoutError> {
        if form.name.trim().is_empty() {
            return Err(CheckoutError::MissingName);
        }
        if form.phone.trim().is_empty() {
            return Err(CheckoutError::MissingPhone);
        }
        if form.address.trim().is_empty() {
            return Err(CheckoutError::MissingAddress);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(())
    }

    /// Submits the order: validates, prices, renders the WhatsApp
    /// message, builds the deep link, and clears the cart.
    ///
    /// The cart is cleared only on success; a validation failure leaves
    /// it exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns a field-specific [`CheckoutError`] when validation fails.
    pub fn place_order(
        &self,
        form: &OrderForm,
        cart: &mut CartStore,
        entered_code: Option<&str>,
    ) -> Result<PlacedOrder, CheckoutError> {
        self.validate(form, cart)?;

        let quote = self.quote(cart.items(), entered_code);
        let message = self.render_message(form, cart.items(), &quote);
        let url = deep_link(&self.whatsapp_phone, &message);

        tracing::info!(
            total_items = quote.total_items,
            grand_total = %quote.grand_total,
            "order handed off to chat link"
        );
        cart.clear();

        Ok(PlacedOrder {
            quote,
            message,
            url,
        })
    }

    /// Renders the plain-text order summary sent over WhatsApp.
    fn render_message(&self, form: &OrderForm, items: &[LineItem], quote: &Quote) -> String {
        let currency = &self.currency_label;
        let mut msg = String::new();

        msg.push_str("*New Order - Ruh Essenza*\n\n");

        msg.push_str("*Customer Information:*\n");
        let _ = writeln!(msg, "Name: {}", form.name);
        let _ = writeln!(msg, "Phone: {}", form.phone);
        let email = if form.email.trim().is_empty() {
            "N/A"
        } else {
            form.email.as_str()
        };
        let _ = writeln!(msg, "Email: {email}");

        msg.push_str("\n*Address:*\n");
        let _ = writeln!(msg, "{}", form.address);
        if !form.city.trim().is_empty() {
            let _ = writeln!(msg, "{}", form.city);
        }

        if !form.location.trim().is_empty() {
            let _ = writeln!(msg, "\n*Shared Location:* {}", form.location);
        }

        msg.push_str("\n*Order Details:*\n");
        for item in items {
            let line_total = item.price * Decimal::from(item.quantity);
            let _ = writeln!(
                msg,
                "\u{2022} {} x{} - {currency} {:.2}",
                item.name,
                item.quantity,
                line_total.round_dp(2)
            );
        }

        let _ = writeln!(
            msg,
            "\n*Subtotal: {currency} {:.2}*",
            quote.subtotal.round_dp(2)
        );
        if quote.discount_amount > Decimal::ZERO {
            let code = quote.discount.applied_code().unwrap_or_default();
            let _ = writeln!(
                msg,
                "*Discount ({code}): -{currency} {:.2}*",
                quote.discount_amount.round_dp(2)
            );
        }
        let _ = writeln!(msg, "*VAT: {currency} {:.2}*", quote.vat_amount.round_dp(2));
        let _ = writeln!(
            msg,
            "*Total: {currency} {:.2}*",
            quote.grand_total.round_dp(2)
        );

        if !form.notes.trim().is_empty() {
            let _ = writeln!(msg, "\n*Notes:* {}", form.notes);
        }

        msg.push_str(
            "\nThank you for your order. The *Ruh Essenza* delivery team \
             will reach out to schedule the delivery.",
        );

        msg
    }
}

/// Builds the `wa.me` deep link with the message percent-encoded the way
/// `encodeURIComponent` would.
#[must_use]
pub fn deep_link(phone: &str, message: &str) -> String {
    let encoded = utf8_percent_encode(message, URI_COMPONENT);
    format!("https://wa.me/{phone}?text={encoded}")
}
