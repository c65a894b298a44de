//! Order placement: validate, checkout preview, confirm.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain::{Cart, CartEntry, TotalBreakdown};

use crate::error::CheckoutError;
use crate::services::{PaymentMethod, RestaurantMenu, UserProfile};

/// Unique identifier assigned to a confirmed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random order ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of validating the cart against the menu.
///
/// A returned value, not an error: an empty cart or an off-menu item is an
/// expected business condition. `Display` yields the stable wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderValidation {
    /// Every cart item is available.
    Valid,

    /// The cart has no items.
    EmptyCart,

    /// The first cart item (in cart order) that is not on the menu.
    ItemUnavailable { name: String },
}

impl OrderValidation {
    /// Returns true if the order passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, OrderValidation::Valid)
    }
}

impl std::fmt::Display for OrderValidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderValidation::Valid => write!(f, "Order is valid"),
            OrderValidation::EmptyCart => write!(f, "Cart is empty"),
            OrderValidation::ItemUnavailable { name } => {
                write!(f, "{name} is not available")
            }
        }
    }
}

/// Non-committing checkout preview: cart lines, totals, delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Snapshot of the cart lines in insertion order.
    pub items: Vec<CartEntry>,

    /// Priced breakdown of the cart.
    pub total_info: TotalBreakdown,

    /// Where the order would be delivered.
    pub delivery_address: String,
}

/// Result of a confirm attempt that did not hard-fail.
///
/// `success: false` carries a generic message by design; callers that need
/// the specific reason call [`OrderPlacement::validate_order`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Whether the order was confirmed.
    pub success: bool,

    /// Stable outcome message.
    pub message: String,

    /// Identifier of the confirmed order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,

    /// Delivery estimate for the confirmed order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
}

impl OrderConfirmation {
    fn confirmed(order_id: OrderId) -> Self {
        Self {
            success: true,
            message: "Order confirmed".to_string(),
            order_id: Some(order_id),
            estimated_delivery: Some("45 minutes".to_string()),
        }
    }

    fn validation_failed() -> Self {
        Self {
            success: false,
            message: "Order validation failed".to_string(),
            order_id: None,
            estimated_delivery: None,
        }
    }
}

/// Drives one cart through validation, checkout preview and confirmation.
///
/// The cart, profile and menu are injected shared references; the caller
/// keeps its own handles and may mutate the cart between phases. Nothing is
/// persisted here — every phase recomputes from the live cart, and a failed
/// confirmation leaves the cart untouched.
#[derive(Debug, Clone)]
pub struct OrderPlacement {
    cart: Arc<RwLock<Cart>>,
    user_profile: Arc<UserProfile>,
    restaurant_menu: Arc<RestaurantMenu>,
}

impl OrderPlacement {
    /// Creates a placement workflow over the given collaborators.
    pub fn new(
        cart: Arc<RwLock<Cart>>,
        user_profile: Arc<UserProfile>,
        restaurant_menu: Arc<RestaurantMenu>,
    ) -> Self {
        Self {
            cart,
            user_profile,
            restaurant_menu,
        }
    }

    /// Checks that the cart is non-empty and every item is on the menu.
    ///
    /// Items are checked in cart order and the first unavailable one wins;
    /// later items are not inspected. Idempotent and side-effect-free.
    #[tracing::instrument(skip(self))]
    pub fn validate_order(&self) -> OrderValidation {
        let cart = self.cart.read().unwrap();

        if cart.is_empty() {
            return OrderValidation::EmptyCart;
        }

        for item in cart.items() {
            if !self.restaurant_menu.is_item_available(item.name().as_str()) {
                return OrderValidation::ItemUnavailable {
                    name: item.name().to_string(),
                };
            }
        }

        OrderValidation::Valid
    }

    /// Computes the checkout preview for the current cart state.
    ///
    /// Deliberately does not validate: a caller may preview an invalid or
    /// empty cart (whose total is the delivery fee alone).
    #[tracing::instrument(skip(self))]
    pub fn proceed_to_checkout(&self) -> CheckoutSummary {
        let cart = self.cart.read().unwrap();

        CheckoutSummary {
            items: cart.view().collect(),
            total_info: cart.calculate_total(),
            delivery_address: self.user_profile.delivery_address().to_string(),
        }
    }

    /// Validates the order, then charges the payment method for the total.
    ///
    /// A validation failure is a returned `success: false` confirmation with
    /// a generic message. A declined charge is a hard
    /// [`CheckoutError::PaymentFailed`]. Neither path mutates the cart.
    #[tracing::instrument(skip(self, payment_method))]
    pub fn confirm_order(
        &self,
        payment_method: &dyn PaymentMethod,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let validation = self.validate_order();
        if !validation.is_valid() {
            tracing::warn!(reason = %validation, "order confirmation rejected");
            metrics::counter!("orders_rejected_total").increment(1);
            return Ok(OrderConfirmation::validation_failed());
        }

        let total = self.cart.read().unwrap().calculate_total().total;
        if !payment_method.process_payment(total) {
            tracing::warn!(%total, "payment declined");
            metrics::counter!("payments_failed_total").increment(1);
            return Err(CheckoutError::PaymentFailed);
        }

        let order_id = OrderId::new();
        tracing::info!(%order_id, %total, "order confirmed");
        metrics::counter!("orders_confirmed_total").increment(1);

        Ok(OrderConfirmation::confirmed(order_id))
    }
}
