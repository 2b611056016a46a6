// Read-only after construction:
// no mutation
// no "update" methods
// products keep their seeded order

use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::product::{Product, MAX_RATING};
use crate::types::identifiers::{CatalogVersion, ProductId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate product ID: {0}")]
    DuplicateProductId(ProductId),
    #[error("Invalid price {price} for product {id}")]
    InvalidPrice { id: ProductId, price: f64 },
    #[error("Invalid rating {rating} for product {id}, expected 0.0..=5.0")]
    InvalidRating { id: ProductId, rating: f64 },
}

/// A validated, ordered set of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    version: CatalogVersion,
}

impl Catalog {
    /// Validate products and fingerprint them.
    ///
    /// Rejects duplicate ids, negative or non-finite prices, and ratings
    /// outside `0.0..=5.0`. Order is preserved; ranking ties fall back to it.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProductId(product.id.clone()));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id.clone(),
                    price: product.price,
                });
            }
            if !(0.0..=MAX_RATING).contains(&product.rating) {
                return Err(CatalogError::InvalidRating {
                    id: product.id.clone(),
                    rating: product.rating,
                });
            }
        }

        let version = CatalogVersion::from_products(&products)?;

        Ok(Catalog { products, version })
    }

    /// Load a JSON array of products from disk.
    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        let f = std::fs::File::open(path)?;
        let products: Vec<Product> = serde_json::from_reader(std::io::BufReader::new(f))?;
        let catalog = Self::new(products)?;

        info!(
            path = %path.display(),
            products = catalog.len(),
            version = catalog.version.as_str(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.products
            .iter()
            .map(|product| product.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Products whose category matches `category` exactly.
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// A blank query matches every product.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }

        self.products
            .iter()
            .filter(|product| {
                [&product.name, &product.description, &product.category]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
