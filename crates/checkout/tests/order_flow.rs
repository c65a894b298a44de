//! Integration tests for the full order placement flow.
//!
//! These tests share one cart between the caller and the workflow, the way
//! a handler would: populate the cart, validate, preview, confirm.

use std::sync::{Arc, RwLock};

use checkout::{
    CheckoutError, DefaultPaymentMethod, OrderPlacement, PaymentMethod, RestaurantMenu,
    UserProfile,
};
use domain::{Cart, Money};

struct DecliningPayment;

impl PaymentMethod for DecliningPayment {
    fn process_payment(&self, _amount: Money) -> bool {
        false
    }
}

/// Helper building the standard test fixture: menu of three items, one
/// address, an empty shared cart.
fn setup() -> (Arc<RwLock<Cart>>, OrderPlacement) {
    let cart = Arc::new(RwLock::new(Cart::new()));
    let placement = OrderPlacement::new(
        Arc::clone(&cart),
        Arc::new(UserProfile::new("123 Main St")),
        Arc::new(RestaurantMenu::new(["Burger", "Pizza", "Salad"])),
    );
    (cart, placement)
}

mod validation {
    use super::*;

    #[test]
    fn empty_cart_fails_validation() {
        let (_cart, placement) = setup();

        let validation = placement.validate_order();
        assert!(!validation.is_valid());
        assert_eq!(validation.to_string(), "Cart is empty");
    }

    #[test]
    fn off_menu_item_fails_validation() {
        let (cart, placement) = setup();
        cart.write()
            .unwrap()
            .add_item("Pasta", Money::from_cents(1599), 1)
            .unwrap();

        let validation = placement.validate_order();
        assert!(!validation.is_valid());
        assert_eq!(validation.to_string(), "Pasta is not available");
    }

    #[test]
    fn available_items_pass_validation() {
        let (cart, placement) = setup();
        {
            let mut cart = cart.write().unwrap();
            cart.add_item("Burger", Money::from_cents(899), 2).unwrap();
            cart.add_item("Pizza", Money::from_cents(1299), 1).unwrap();
        }

        let validation = placement.validate_order();
        assert!(validation.is_valid());
        assert_eq!(validation.to_string(), "Order is valid");
    }

    #[test]
    fn cart_can_change_between_validations() {
        let (cart, placement) = setup();
        assert!(!placement.validate_order().is_valid());

        cart.write()
            .unwrap()
            .add_item("Burger", Money::from_cents(899), 1)
            .unwrap();
        assert!(placement.validate_order().is_valid());

        cart.write().unwrap().remove_item("Burger");
        assert!(!placement.validate_order().is_valid());
    }
}

mod checkout_preview {
    use super::*;

    #[test]
    fn summary_carries_items_totals_and_address() {
        let (cart, placement) = setup();
        cart.write()
            .unwrap()
            .add_item("Pizza", Money::from_cents(1299), 1)
            .unwrap();

        let summary = placement.proceed_to_checkout();

        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.items[0].name.as_str(), "Pizza");
        assert_eq!(summary.items[0].quantity, 1);
        assert_eq!(summary.items[0].subtotal, Money::from_cents(1299));

        assert_eq!(summary.total_info.subtotal, Money::from_cents(1299));
        assert_eq!(summary.total_info.tax, Money::from_cents(130));
        assert_eq!(summary.total_info.delivery_fee, Money::from_cents(500));
        assert_eq!(summary.total_info.total, Money::from_cents(1929));

        assert_eq!(summary.delivery_address, "123 Main St");
    }

    #[test]
    fn summary_serialization_shape() {
        let (cart, placement) = setup();
        cart.write()
            .unwrap()
            .add_item("Pizza", Money::from_cents(1299), 1)
            .unwrap();

        let json = serde_json::to_value(placement.proceed_to_checkout()).unwrap();
        assert!(json.get("items").unwrap().is_array());
        assert!(json.get("total_info").is_some());
        assert_eq!(json.get("delivery_address").unwrap(), "123 Main St");
    }
}

mod confirmation {
    use super::*;

    #[test]
    fn confirm_succeeds_with_accepting_payment() {
        let (cart, placement) = setup();
        cart.write()
            .unwrap()
            .add_item("Burger", Money::from_cents(899), 1)
            .unwrap();

        let confirmation = placement.confirm_order(&DefaultPaymentMethod).unwrap();
        assert!(confirmation.success);
        assert_eq!(confirmation.message, "Order confirmed");
        assert!(confirmation.order_id.is_some());
        assert_eq!(
            confirmation.estimated_delivery.as_deref(),
            Some("45 minutes")
        );
    }

    #[test]
    fn each_confirmation_gets_a_fresh_order_id() {
        let (cart, placement) = setup();
        cart.write()
            .unwrap()
            .add_item("Burger", Money::from_cents(899), 1)
            .unwrap();

        let first = placement.confirm_order(&DefaultPaymentMethod).unwrap();
        let second = placement.confirm_order(&DefaultPaymentMethod).unwrap();
        assert_ne!(first.order_id, second.order_id);
    }

    #[test]
    fn confirm_swallows_the_specific_validation_reason() {
        let (cart, placement) = setup();
        cart.write()
            .unwrap()
            .add_item("Pasta", Money::from_cents(1599), 1)
            .unwrap();

        // validate_order reports the detail; confirm_order does not.
        assert_eq!(placement.validate_order().to_string(), "Pasta is not available");

        let confirmation = placement.confirm_order(&DefaultPaymentMethod).unwrap();
        assert!(!confirmation.success);
        assert_eq!(confirmation.message, "Order validation failed");
    }

    #[test]
    fn declined_payment_propagates_and_preserves_cart() {
        let (cart, placement) = setup();
        cart.write()
            .unwrap()
            .add_item("Pizza", Money::from_cents(1299), 1)
            .unwrap();

        let before = cart.read().unwrap().item_count();
        let err = placement.confirm_order(&DecliningPayment).unwrap_err();
        assert_eq!(err, CheckoutError::PaymentFailed);
        assert_eq!(err.to_string(), "Payment failed");
        assert_eq!(cart.read().unwrap().item_count(), before);
    }

    #[test]
    fn full_flow_validate_preview_confirm() {
        let (cart, placement) = setup();
        {
            let mut cart = cart.write().unwrap();
            cart.add_item("Burger", Money::from_cents(899), 2).unwrap();
            cart.add_item("Salad", Money::from_cents(499), 1).unwrap();
        }

        assert!(placement.validate_order().is_valid());

        let summary = placement.proceed_to_checkout();
        // 2 × $8.99 + $4.99 = $22.97; tax $2.30; fee $5.00; total $30.27
        assert_eq!(summary.total_info.subtotal, Money::from_cents(2297));
        assert_eq!(summary.total_info.tax, Money::from_cents(230));
        assert_eq!(summary.total_info.total, Money::from_cents(3027));

        let confirmation = placement.confirm_order(&DefaultPaymentMethod).unwrap();
        assert!(confirmation.success);

        // Confirmation does not consume the cart.
        assert_eq!(cart.read().unwrap().item_count(), 2);
    }
}
