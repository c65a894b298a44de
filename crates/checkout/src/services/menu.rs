//! Restaurant menu availability lookup.

use std::collections::HashSet;

/// The set of items a restaurant currently offers.
///
/// Order validation only needs membership lookup; browsing, filtering and
/// menu management live elsewhere.
#[derive(Debug, Clone, Default)]
pub struct RestaurantMenu {
    available_items: HashSet<String>,
}

impl RestaurantMenu {
    /// Creates a menu from a list of available item names.
    pub fn new<I, S>(available_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_items: available_items.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the named item is on the menu.
    pub fn is_item_available(&self, name: &str) -> bool {
        self.available_items.contains(name)
    }
}
