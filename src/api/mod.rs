//! Backend API abstraction.
//!
//! The homepage consumes four remote reads:
//!
//! ```text
//! GET  /api/settings/main_banner            -> MainBanner
//! GET  /api/categories                      -> [Category]
//! GET  /api/products?featured=true&limit=N  -> { products: [Product] }
//! POST /api/reviews/summary-batch           -> { reviews: { id: ReviewSummary } }
//! ```

pub mod http;

#[cfg(test)]
pub(crate) mod fake;

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Category, MainBanner, Product, ProductId, ReviewSummary};

// Re-export for convenience
pub use http::HttpStorefrontApi;

/// One of the backend reads the homepage depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    MainBanner,
    Categories,
    FeaturedProducts,
    ReviewSummaries,
}

impl Endpoint {
    /// Request path relative to the API origin.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::MainBanner => "api/settings/main_banner",
            Endpoint::Categories => "api/categories",
            Endpoint::FeaturedProducts => "api/products",
            Endpoint::ReviewSummaries => "api/reviews/summary-batch",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Endpoint::ReviewSummaries => "POST",
            _ => "GET",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}

/// Trait for storefront backends.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Fetch the hero banner settings.
    async fn main_banner(&self) -> Result<MainBanner>;

    /// Fetch all categories in server-defined display order.
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Fetch at most `limit` products flagged as featured.
    async fn featured_products(&self, limit: usize) -> Result<Vec<Product>>;

    /// Fetch review summaries for a batch of products in one round-trip.
    ///
    /// Products without reviews may be missing from the returned map.
    async fn review_summaries(
        &self,
        ids: &[ProductId],
    ) -> Result<HashMap<ProductId, ReviewSummary>>;
}
