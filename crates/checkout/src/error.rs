//! Checkout error types.

use thiserror::Error;

/// Errors raised by the order placement workflow.
///
/// These propagate to the caller uncaught; recoverable business conditions
/// (empty cart, unavailable item, rejected confirmation) are returned as
/// values instead and never appear here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The payment method declined the charge.
    #[error("Payment failed")]
    PaymentFailed,
}
