//! Cart: an insertion-ordered collection of items, unique by name.

use serde::{Deserialize, Serialize};

use super::{CartError, CartItem, ItemName, Money, TotalBreakdown};

/// Outcome of a cart mutation.
///
/// Mutations that hit a business condition (item already present, item
/// missing) report it here as a returned value rather than an error;
/// `Display` yields the stable user-facing wording for each case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartUpdate {
    /// A new item was appended to the cart.
    Added { name: ItemName },

    /// An existing item's quantity changed; carries the resulting quantity.
    Updated { name: ItemName, quantity: u32 },

    /// An item was removed from the cart.
    Removed { name: ItemName },

    /// No item with the given name exists.
    NotFound { name: ItemName },
}

impl std::fmt::Display for CartUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartUpdate::Added { name } => write!(f, "Added {name} to cart"),
            CartUpdate::Updated { name, quantity } => {
                write!(f, "Updated {name} quantity to {quantity}")
            }
            CartUpdate::Removed { name } => write!(f, "Removed {name} from cart"),
            CartUpdate::NotFound { name } => write!(f, "{name} not found in cart"),
        }
    }
}

/// Snapshot of a single cart line as exposed by [`Cart::view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Item name.
    pub name: ItemName,

    /// Current quantity.
    pub quantity: u32,

    /// Line subtotal (price × quantity).
    pub subtotal: Money,
}

/// A shopping cart.
///
/// Items are kept in insertion order and are unique by name: adding a name
/// that is already present accumulates quantity instead of duplicating the
/// line. All derived values (subtotal, tax, total) are recomputed on demand
/// and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Tax rate applied to the subtotal, in percent.
    pub const TAX_RATE_PERCENT: i64 = 10;

    /// Flat delivery fee, charged unconditionally.
    pub const DELIVERY_FEE: Money = Money::from_cents(500);

    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of distinct items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item with the given name, if present.
    pub fn get_item(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.name().as_str() == name)
    }

    /// Adds an item to the cart, or accumulates quantity onto an existing
    /// line with the same name (delta-add; the price given here is ignored
    /// for an existing line, whose price is fixed).
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyItemName`] for an empty name,
    /// [`CartError::InvalidPrice`] for a non-positive price, and
    /// [`CartError::InvalidQuantity`] for a negative quantity. Inputs are
    /// validated before any lookup, so the cart is untouched on error.
    pub fn add_item(
        &mut self,
        name: impl Into<ItemName>,
        price: Money,
        quantity: i64,
    ) -> Result<CartUpdate, CartError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CartError::EmptyItemName);
        }
        if !price.is_positive() {
            return Err(CartError::InvalidPrice {
                price: price.cents(),
            });
        }
        if quantity < 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.name() == &name)
        {
            let new_quantity = existing.quantity() as i64 + quantity;
            existing.update_quantity(new_quantity)?;
            return Ok(CartUpdate::Updated {
                name,
                quantity: existing.quantity(),
            });
        }

        let item = CartItem::new(name.clone(), price, quantity)?;
        self.items.push(item);
        Ok(CartUpdate::Added { name })
    }

    /// Removes the item with the given name. Never fails; a missing name is
    /// reported as [`CartUpdate::NotFound`].
    pub fn remove_item(&mut self, name: &str) -> CartUpdate {
        let original_len = self.items.len();
        self.items.retain(|item| item.name().as_str() != name);

        if self.items.len() == original_len {
            CartUpdate::NotFound {
                name: ItemName::new(name),
            }
        } else {
            CartUpdate::Removed {
                name: ItemName::new(name),
            }
        }
    }

    /// Sets the quantity of an existing item to a new absolute value.
    ///
    /// Unlike [`Cart::add_item`] this does not accumulate. A missing name is
    /// a [`CartUpdate::NotFound`] result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for a negative quantity,
    /// whether or not the name exists.
    pub fn update_item_quantity(
        &mut self,
        name: &str,
        new_quantity: i64,
    ) -> Result<CartUpdate, CartError> {
        if new_quantity < 0 {
            return Err(CartError::InvalidQuantity {
                quantity: new_quantity,
            });
        }

        match self
            .items
            .iter_mut()
            .find(|item| item.name().as_str() == name)
        {
            Some(item) => {
                item.update_quantity(new_quantity)?;
                Ok(CartUpdate::Updated {
                    name: ItemName::new(name),
                    quantity: item.quantity(),
                })
            }
            None => Ok(CartUpdate::NotFound {
                name: ItemName::new(name),
            }),
        }
    }

    /// Computes the priced breakdown of the cart.
    ///
    /// The delivery fee applies even to an empty cart, whose total is the
    /// fee alone. Pure; nothing is cached or mutated.
    pub fn calculate_total(&self) -> TotalBreakdown {
        let subtotal = self
            .items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.subtotal());
        let tax = subtotal.percent(Self::TAX_RATE_PERCENT);

        TotalBreakdown {
            subtotal,
            tax,
            delivery_fee: Self::DELIVERY_FEE,
            total: subtotal + tax + Self::DELIVERY_FEE,
        }
    }

    /// Returns a lazy, insertion-ordered view of the cart lines.
    ///
    /// The iterator borrows the cart, so each call reflects current state;
    /// re-invoke it for a fresh pass.
    pub fn view(&self) -> impl Iterator<Item = CartEntry> + '_ {
        self.items.iter().map(|item| CartEntry {
            name: item.name().clone(),
            quantity: item.quantity(),
            subtotal: item.subtotal(),
        })
    }
}
