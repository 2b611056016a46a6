use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::identifiers::ProductId;
use crate::types::time::Millis;

/// What the shopper did with a product, in increasing order of intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    View,
    Cart,
    Purchase,
}

impl InteractionKind {
    /// Default intent multiplier: purchase 3, cart 2, view 1.
    pub fn type_weight(self) -> f64 {
        match self {
            InteractionKind::View => 1.0,
            InteractionKind::Cart => 2.0,
            InteractionKind::Purchase => 3.0,
        }
    }
}

/// One recorded shopper action.
///
/// `category` is copied from the product when the interaction is recorded, so
/// scoring never needs a catalog lookup and dangling product ids still count
/// toward their category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub product_id: ProductId,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub timestamp: Millis,
    pub category: String,
}

impl Interaction {
    pub fn new(
        product_id: impl Into<ProductId>,
        kind: InteractionKind,
        category: impl Into<String>,
        timestamp: Millis,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            kind,
            timestamp,
            category: category.into(),
        }
    }

    /// Record an action against a catalog product, denormalizing its category.
    pub fn for_product(product: &Product, kind: InteractionKind, timestamp: Millis) -> Self {
        Self::new(product.id.clone(), kind, product.category.clone(), timestamp)
    }
}
