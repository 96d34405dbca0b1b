use thiserror::Error;

/// Checkout validation failures.
///
/// Each variant names the specific condition that blocked submission, so
/// the storefront can show a targeted notice. None of these touch the
/// cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("please enter your full name")]
    MissingName,

    #[error("please enter your phone number")]
    MissingPhone,

    #[error("please enter your delivery address")]
    MissingAddress,

    #[error("your cart is empty")]
    EmptyCart,
}
