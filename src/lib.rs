// src/lib.rs

//! Storefront homepage data layer.
//!
//! Loads the hero banner, the category sidebar and the featured products
//! from the backend, caches review summaries per product, and prepares
//! icons and cache-busted image URLs for the rendering layer.

pub mod api;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

pub use api::{HttpStorefrontApi, StorefrontApi};
pub use error::{AppError, Result};
pub use services::{HomeDataAggregator, HomeOptions};
