//! In-memory backend for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{Endpoint, StorefrontApi};
use crate::error::{AppError, Result};
use crate::models::{Category, MainBanner, Product, ProductId, ReviewSummary};

/// Scripted answer for one endpoint.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Status(u16),
    /// Never settles.
    Hang,
}

/// Backend double that records every call it receives.
pub struct FakeApi {
    banner: Reply<MainBanner>,
    categories: Reply<Vec<Category>>,
    products: Reply<Vec<Product>>,
    reviews: Reply<HashMap<ProductId, ReviewSummary>>,
    latency: Duration,
    calls: Mutex<HashMap<Endpoint, usize>>,
    batches: Mutex<Vec<Vec<ProductId>>>,
    limits: Mutex<Vec<usize>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            banner: Reply::Ok(MainBanner::default()),
            categories: Reply::Ok(Vec::new()),
            products: Reply::Ok(Vec::new()),
            reviews: Reply::Ok(HashMap::new()),
            latency: Duration::ZERO,
            calls: Mutex::new(HashMap::new()),
            batches: Mutex::new(Vec::new()),
            limits: Mutex::new(Vec::new()),
        }
    }

    pub fn banner(mut self, reply: Reply<MainBanner>) -> Self {
        self.banner = reply;
        self
    }

    pub fn categories(mut self, reply: Reply<Vec<Category>>) -> Self {
        self.categories = reply;
        self
    }

    pub fn products(mut self, reply: Reply<Vec<Product>>) -> Self {
        self.products = reply;
        self
    }

    pub fn reviews(mut self, reply: Reply<HashMap<ProductId, ReviewSummary>>) -> Self {
        self.reviews = reply;
        self
    }

    /// Delay every answer, forcing callers to actually suspend.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self, endpoint: Endpoint) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&endpoint)
            .copied()
            .unwrap_or(0)
    }

    /// Id lists received by the summary batch endpoint, in call order.
    pub fn batches(&self) -> Vec<Vec<ProductId>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn limits(&self) -> Vec<usize> {
        self.limits.lock().unwrap().clone()
    }

    async fn answer<T: Clone>(&self, endpoint: Endpoint, reply: &Reply<T>) -> Result<T> {
        *self.calls.lock().unwrap().entry(endpoint).or_default() += 1;
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match reply {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Status(status) => Err(AppError::status(endpoint, *status)),
            Reply::Hang => futures::future::pending().await,
        }
    }
}

#[async_trait]
impl StorefrontApi for FakeApi {
    async fn main_banner(&self) -> Result<MainBanner> {
        self.answer(Endpoint::MainBanner, &self.banner).await
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.answer(Endpoint::Categories, &self.categories).await
    }

    async fn featured_products(&self, limit: usize) -> Result<Vec<Product>> {
        self.limits.lock().unwrap().push(limit);
        self.answer(Endpoint::FeaturedProducts, &self.products).await
    }

    async fn review_summaries(
        &self,
        ids: &[ProductId],
    ) -> Result<HashMap<ProductId, ReviewSummary>> {
        self.batches.lock().unwrap().push(ids.to_vec());
        self.answer(Endpoint::ReviewSummaries, &self.reviews).await
    }
}

/// `count` products with ids `1..=count`.
pub fn products(count: u64) -> Vec<Product> {
    (1..=count).map(Product::new).collect()
}
