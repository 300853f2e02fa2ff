// src/utils/url.rs

//! Cache-busting URL helpers.

use chrono::Utc;
use serde::Serialize;

/// Append a `v=<timestamp>` freshness token to `base`.
///
/// The token goes in front of any `#fragment`. When `base` already carries
/// a query string the token is joined with `&`, otherwise with `?`.
///
/// # Examples
/// ```
/// use storefront::utils::url::cache_busted;
///
/// assert_eq!(
///     cache_busted("https://x/img.png", 1000),
///     "https://x/img.png?v=1000"
/// );
/// assert_eq!(
///     cache_busted("https://x/img.png?w=640", 1000),
///     "https://x/img.png?w=640&v=1000"
/// );
/// ```
pub fn cache_busted(base: &str, timestamp: i64) -> String {
    let (head, fragment) = match base.find('#') {
        Some(idx) => base.split_at(idx),
        None => (base, ""),
    };
    let separator = if head.contains('?') { '&' } else { '?' };
    format!("{head}{separator}v={timestamp}{fragment}")
}

/// A freshness token fixed for one render pass.
///
/// Every image built through the same `CacheBuster` carries the same token,
/// so the desktop and mobile banner variants always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheBuster {
    timestamp: i64,
}

impl CacheBuster {
    /// Token taken from the current wall clock, in milliseconds.
    pub fn now() -> Self {
        Self::at(Utc::now().timestamp_millis())
    }

    pub fn at(timestamp: i64) -> Self {
        Self { timestamp }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn apply(&self, base: &str) -> String {
        cache_busted(base, self.timestamp)
    }
}

impl Default for CacheBuster {
    fn default() -> Self {
        Self::now()
    }
}

/// Cache-busted hero images for both breakpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerUrls {
    pub desktop: String,
    pub mobile: String,
}
