//! Payment capability trait and reference implementation.

use domain::Money;

/// Capability to charge an amount, all-or-nothing.
///
/// This is the seam to a payment gateway: the workflow only needs the
/// boolean contract. Settlement states, retries and refunds are out of
/// scope.
pub trait PaymentMethod: Send + Sync {
    /// Charges the given amount, returning true on success.
    fn process_payment(&self, amount: Money) -> bool;
}

/// Reference payment method: accepts any positive amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPaymentMethod;

impl PaymentMethod for DefaultPaymentMethod {
    fn process_payment(&self, amount: Money) -> bool {
        amount.is_positive()
    }
}
