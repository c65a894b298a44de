//! A single line in the cart.

use serde::{Deserialize, Serialize};

use super::{CartError, ItemName, Money};

/// An item held in a cart: a named product at a fixed unit price with a
/// mutable quantity.
///
/// The price is set at construction and never changes; quantity changes go
/// through [`CartItem::update_quantity`], which rejects negative values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    name: ItemName,
    price: Money,
    quantity: u32,
}

impl CartItem {
    /// Creates a new cart item.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidPrice`] if the price is not positive, or
    /// [`CartError::InvalidQuantity`] if the quantity is negative or does
    /// not fit in a `u32`.
    pub fn new(
        name: impl Into<ItemName>,
        price: Money,
        quantity: i64,
    ) -> Result<Self, CartError> {
        if !price.is_positive() {
            return Err(CartError::InvalidPrice {
                price: price.cents(),
            });
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity { quantity })?;

        Ok(Self {
            name: name.into(),
            price,
            quantity,
        })
    }

    /// Returns the item name.
    pub fn name(&self) -> &ItemName {
        &self.name
    }

    /// Returns the fixed unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the current quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replaces the quantity with a new absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if the new quantity is
    /// negative or does not fit in a `u32`. The stored quantity is
    /// untouched on error.
    pub fn update_quantity(&mut self, new_quantity: i64) -> Result<(), CartError> {
        self.quantity = u32::try_from(new_quantity).map_err(|_| CartError::InvalidQuantity {
            quantity: new_quantity,
        })?;
        Ok(())
    }

    /// Returns the subtotal for this line (price × quantity). Pure.
    pub fn subtotal(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}
