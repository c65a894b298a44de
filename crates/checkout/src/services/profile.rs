//! User profile collaborator.

/// The slice of a user profile the workflow reads: the delivery address.
#[derive(Debug, Clone)]
pub struct UserProfile {
    delivery_address: String,
}

impl UserProfile {
    /// Creates a profile with the given delivery address.
    pub fn new(delivery_address: impl Into<String>) -> Self {
        Self {
            delivery_address: delivery_address.into(),
        }
    }

    /// Returns the delivery address.
    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }
}
