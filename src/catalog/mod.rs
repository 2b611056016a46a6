pub mod catalog;
pub mod product;
pub mod seed;

pub use crate::types::identifiers::{CatalogVersion, ProductId};
pub use catalog::{Catalog, CatalogError};
pub use product::{Product, MAX_RATING};
pub use seed::seed_products;
