use serde::{Deserialize, Serialize};

use super::cart::Cart;

/// Figures handed to an external payment service when the shopper checks out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub item_count: u64,
    /// Total in minor currency units (cents), rounded half away from zero.
    pub amount_minor_units: i64,
}

impl CheckoutSummary {
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.total();
        Self {
            subtotal,
            item_count: cart.item_count(),
            amount_minor_units: to_minor_units(subtotal),
        }
    }
}

fn to_minor_units(amount: f64) -> i64 {
    // Saturating float-to-int cast; NaN maps to 0.
    (amount * 100.0).round() as i64
}
