// src/services/reviews.rs

//! Review summary cache.
//!
//! Product cards read ratings synchronously through [`ReviewSummaryCache::get`],
//! which answers with a zero summary until the batch refresh lands.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::{Endpoint, StorefrontApi};
use crate::error::{AppError, Result};
use crate::models::{ProductId, ProductRating, ReviewSummary};

use super::ReadGuard;

/// Latest review summary per product.
pub struct ReviewSummaryCache {
    api: Arc<dyn StorefrontApi>,
    guard: ReadGuard,
    entries: RwLock<HashMap<ProductId, ReviewSummary>>,
}

impl ReviewSummaryCache {
    pub fn new(api: Arc<dyn StorefrontApi>, guard: ReadGuard) -> Self {
        Self {
            api,
            guard,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch summaries for `ids` in a single request.
    ///
    /// Entries for ids present in the response are replaced; every other
    /// entry is left as it was. An empty `ids` slice issues no request. On
    /// failure the cache is unchanged. Returns the number of entries written.
    pub async fn refresh_batch(&self, ids: &[ProductId]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let endpoint = Endpoint::ReviewSummaries;
        let fresh = self
            .guard
            .run(endpoint, self.api.review_summaries(ids))
            .await?;
        if self.guard.is_cancelled() {
            return Err(AppError::Cancelled(endpoint));
        }

        let written = fresh.len();
        self.write().extend(fresh);
        Ok(written)
    }

    /// Summary for `id`, or the zero summary when none is cached.
    pub fn get(&self, id: ProductId) -> ReviewSummary {
        self.read().get(&id).copied().unwrap_or_default()
    }

    /// Display projection of [`get`](Self::get).
    pub fn rating(&self, id: ProductId) -> ProductRating {
        self.get(id).rating()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.read().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<ProductId, ReviewSummary>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ProductId, ReviewSummary>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
