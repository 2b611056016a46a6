use std::path::{Path, PathBuf};

use tracing::info;

use super::cart::Cart;
use crate::store::{load_json, persist_json, StoreError};

/// Caller-side owner of the cart blob.
///
/// Mutate through [`cart_mut`](Self::cart_mut), then [`persist`](Self::persist).
#[derive(Debug)]
pub struct CartStore {
    path: PathBuf,
    cart: Cart,
}

impl CartStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let cart: Cart = load_json(&path)?.unwrap_or_default();

        info!(path = %path.display(), lines = cart.items().len(), "opened cart store");
        Ok(Self { path, cart })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn persist(&self) -> Result<(), StoreError> {
        persist_json(&self.path, &self.cart)
    }
}
