//! Checkout error types.

use thiserror::Error;

/// Errors that can occur in cart and checkout operations.
///
/// An unknown promo code is deliberately not represented here: invalid
/// user input on the promo field is routine and reported as a
/// [`PromoOutcome`](crate::cart::PromoOutcome) value instead.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Customer details failed validation.
    #[error("{0}")]
    Validation(String),

    /// Checkout was entered with an empty cart.
    #[error("your cart is empty")]
    EmptyCart,

    /// The order backend rejected the draft.
    #[error("order could not be created: {0}")]
    OrderCreation(String),

    /// The payment processor declined or failed.
    #[error("payment failed: {0}")]
    Payment(String),

    /// Invalid checkout state transition.
    #[error("invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Cart snapshot could not be loaded or saved.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<jobdeck_store::StoreError> for CheckoutError {
    fn from(e: jobdeck_store::StoreError) -> Self {
        CheckoutError::Storage(e.to_string())
    }
}
