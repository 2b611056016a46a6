//! Deterministic product recommendation engine for a storefront.
//!
//! `storefront-core` scores catalog products for a shopper from content
//! similarity and interaction history. It exposes two pure queries,
//! [`recommend()`] and [`trending()`], plus the caller-side state the storefront
//! needs around them: a validated catalog, an append-only interaction log,
//! and a cart, each with an explicit load/append/persist lifecycle.
//!
//! The engines never read the clock or touch storage. `now` is always an
//! argument, so identical inputs produce identical rankings.

pub mod cart;
pub mod catalog;
pub mod interactions;
pub mod recommend;
pub mod store;
pub mod types;

pub use recommend::{
    recommend, similarity, trending, RecommendationEngine, DEFAULT_RECOMMENDATION_LIMIT,
    DEFAULT_TRENDING_LIMIT,
};
