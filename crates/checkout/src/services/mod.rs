//! Collaborators consumed by the order placement workflow.

pub mod menu;
pub mod payment;
pub mod profile;

pub use menu::RestaurantMenu;
pub use payment::{DefaultPaymentMethod, PaymentMethod};
pub use profile::UserProfile;
