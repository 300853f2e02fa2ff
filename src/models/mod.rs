// src/models/mod.rs

//! Domain models for the storefront homepage.
//!
//! This module contains all data structures used throughout the crate,
//! organized by their primary purpose.

mod banner;
mod catalog;
mod config;
mod review;

// Re-export all public types
pub use banner::MainBanner;
pub use catalog::{Category, Product, ProductId};
pub use config::{ApiConfig, Config, HomeConfig, MAX_FEATURED_LIMIT};
pub use review::{
    MAX_RATING, ProductRating, ReviewSummary, SummaryBatchRequest, SummaryBatchResponse,
};

/// Response body of the featured products endpoint.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    let items: Option<Vec<T>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}
