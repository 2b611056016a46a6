use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::Product;

/// Catalog-unique product identifier.
///
/// Interactions reference products by this id without any foreign-key
/// guarantee, so a `ProductId` may name a product no longer in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a catalog, in product order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    /// Hash the canonical JSON form of every product, one per line.
    ///
    /// Products are serialized field-by-field in declaration order, so two
    /// catalogs with the same products in the same order always agree.
    pub fn from_products(products: &[Product]) -> Result<Self, serde_json::Error> {
        let mut hasher = Sha256::new();
        for product in products {
            hasher.update(serde_json::to_vec(product)?);
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        Ok(CatalogVersion(format!("sha256:{hex}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
