use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Product;
use crate::types::identifiers::ProductId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Product {0} is not in the cart")]
    UnknownProduct(ProductId),
}

/// A product snapshot plus how many the shopper wants.
///
/// Serializes flat (product fields alongside `quantity`), matching the
/// caller's stored cart blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added,
    QuantityIncreased,
    QuantityUpdated,
    Removed,
}

/// Ordered cart lines, one per product id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Add one unit: bump an existing line or append a new one.
    pub fn add(&mut self, product: &Product) -> CartChange {
        if let Some(item) = self.find_mut(&product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return CartChange::QuantityIncreased;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        CartChange::Added
    }

    /// Drop a line. Removing an absent product is a no-op.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| &item.product.id == id)?;
        Some(self.items.remove(index))
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<CartChange, CartError> {
        if quantity <= 0 {
            return self
                .remove(id)
                .map(|_| CartChange::Removed)
                .ok_or_else(|| CartError::UnknownProduct(id.clone()));
        }

        let item = self
            .find_mut(id)
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;
        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Ok(CartChange::QuantityUpdated)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over every line.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Units across all lines, not distinct products.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| &item.product.id == id)
    }
}
