//! Utility functions and helpers.

pub mod http;
pub mod url;

pub use url::{BannerUrls, CacheBuster, cache_busted};
