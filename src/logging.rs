// src/logging.rs

//! Observability hooks for the homepage loader.
//!
//! Orchestration code never logs directly. It reports to a [`LoadObserver`]
//! so hosts can redirect or silence diagnostics without touching the loader.

use crate::api::Endpoint;
use crate::error::AppError;
use crate::models::Category;
use crate::services::LoadOutcome;

/// Receives diagnostics from [`HomeDataAggregator`](crate::services::HomeDataAggregator).
pub trait LoadObserver: Send + Sync {
    /// A read failed and its section keeps its previous value.
    fn read_failed(&self, endpoint: Endpoint, error: &AppError);

    /// A read succeeded and `items` records were applied.
    fn read_applied(&self, _endpoint: Endpoint, _items: usize) {}

    /// A category was dropped because it is not well-formed.
    fn category_rejected(&self, _category: &Category, _error: &AppError) {}

    /// `load()` was called again after the first fetch had started.
    fn load_skipped(&self) {}

    /// All reads settled.
    fn load_finished(&self, _outcome: &LoadOutcome) {}
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn read_failed(&self, endpoint: Endpoint, error: &AppError) {
        log::warn!("Skipping {}: {}", endpoint, error);
    }

    fn read_applied(&self, endpoint: Endpoint, items: usize) {
        log::debug!("Applied {} ({} items)", endpoint, items);
    }

    fn category_rejected(&self, category: &Category, error: &AppError) {
        log::warn!("Dropping category '{}': {}", category.name, error);
    }

    fn load_skipped(&self) {
        log::debug!("Homepage data already requested, ignoring load()");
    }

    fn load_finished(&self, outcome: &LoadOutcome) {
        log::info!(
            "Homepage loaded in {}ms: banner={}, categories={}, products={}, reviews={}, failures={}",
            outcome.elapsed().num_milliseconds(),
            outcome.banner_loaded,
            outcome.category_count,
            outcome.product_count,
            outcome.review_count,
            outcome.failures
        );
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl LoadObserver for SilentObserver {
    fn read_failed(&self, _endpoint: Endpoint, _error: &AppError) {}
}
