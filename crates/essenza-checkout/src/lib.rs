//! Pricing and checkout for the Essenza storefront.
//!
//! Computes the order quote (subtotal, discount, VAT, grand total),
//! validates the checkout form, renders the WhatsApp order message, and
//! builds the `wa.me` deep link the storefront opens to hand the order
//! off. Also owns the order-cutoff countdown and delivery-window
//! estimation, both pure functions of a supplied wall-clock instant.

pub mod delivery;
pub mod error;
pub mod order;
pub mod pricing;

pub use delivery::{Countdown, DeliveryWindow};
pub use error::CheckoutError;
pub use order::{Checkout, OrderForm, PlacedOrder};
pub use pricing::{DiscountOutcome, DiscountTable, Quote};
