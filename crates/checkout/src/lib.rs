//! Order placement workflow for the food-ordering system.
//!
//! This crate drives a cart through the three checkout phases:
//! 1. Validate — every cart item must be on the restaurant menu
//! 2. Checkout — a non-committing preview of totals and delivery info
//! 3. Confirm — re-validate, then charge the payment method
//!
//! Business outcomes (empty cart, unavailable item, rejected confirmation)
//! are returned as values; contract violations and payment failure are
//! raised as errors. The two channels are deliberately separate.

pub mod error;
pub mod placement;
pub mod services;

pub use error::CheckoutError;
pub use placement::{
    CheckoutSummary, OrderConfirmation, OrderId, OrderPlacement, OrderValidation,
};
pub use services::{DefaultPaymentMethod, PaymentMethod, RestaurantMenu, UserProfile};
