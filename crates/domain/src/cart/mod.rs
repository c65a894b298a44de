//! Cart model and related types.

mod aggregate;
mod item;
mod value_objects;

pub use aggregate::{Cart, CartEntry, CartUpdate};
pub use item::CartItem;
pub use value_objects::{ItemName, Money, TotalBreakdown};

use thiserror::Error;

/// Errors raised for contract violations on cart inputs.
///
/// These are the "thrown" half of the error model: bad constructor or
/// mutation arguments are programmer errors and propagate with `?`, unlike
/// the business outcomes (`CartUpdate`, order validation) which are returned
/// as plain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Item name is empty.
    #[error("Item name cannot be empty")]
    EmptyItemName,

    /// Invalid price.
    #[error("Invalid price: {price} (must be greater than 0)")]
    InvalidPrice { price: i64 },

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than or equal to 0)")]
    InvalidQuantity { quantity: i64 },
}
