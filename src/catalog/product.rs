use serde::{Deserialize, Serialize};

use crate::types::identifiers::ProductId;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// An immutable catalog entry.
///
/// Field order is the serialized order and feeds the catalog version hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Opaque image reference, never interpreted.
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub rating: f64,
    #[serde(rename = "reviews", alias = "reviewCount", default)]
    pub review_count: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Build a product from the fields the engines score on.
    /// Descriptive fields start empty and can be filled with the `with_*` helpers.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: String::new(),
            image: String::new(),
            category: category.into(),
            rating,
            review_count: 0,
            features: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}
