//! Domain layer for the food-ordering workflow.
//!
//! This crate provides the cart model:
//! - `Money` and `ItemName` value objects
//! - `CartItem` entity with quantity/subtotal logic
//! - `Cart` collection with add/remove/update and on-demand totals

pub mod cart;

pub use cart::{
    Cart, CartEntry, CartError, CartItem, CartUpdate, ItemName, Money, TotalBreakdown,
};
