// src/api/http.rs

//! `reqwest` implementation of [`StorefrontApi`].

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::{Endpoint, StorefrontApi};
use crate::error::{AppError, Result};
use crate::models::{
    ApiConfig, Category, MainBanner, Product, ProductId, ProductPage, ReviewSummary,
    SummaryBatchRequest, SummaryBatchResponse,
};
use crate::utils::http::create_async_client;

/// Storefront backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: Client,
    base: Url,
}

impl HttpStorefrontApi {
    /// Create a client for the backend described by `config`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = create_async_client(config)?;
        Self::with_client(client, &config.base_url)
    }

    /// Reuse an existing HTTP client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // Endpoint paths are relative, so the base must act as a directory.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url> {
        Ok(self.base.join(endpoint.path())?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(self.url(endpoint)?)
            .query(query)
            .send()
            .await?;
        Self::decode(endpoint, response).await
    }

    /// Reject non-success statuses, then parse the body as JSON.
    async fn decode<T: DeserializeOwned>(endpoint: Endpoint, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(endpoint, status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn main_banner(&self) -> Result<MainBanner> {
        self.get_json(Endpoint::MainBanner, &[]).await
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.get_json(Endpoint::Categories, &[]).await
    }

    async fn featured_products(&self, limit: usize) -> Result<Vec<Product>> {
        let query = [
            ("featured", "true".to_string()),
            ("limit", limit.to_string()),
        ];
        let page: ProductPage = self.get_json(Endpoint::FeaturedProducts, &query).await?;
        Ok(page.products)
    }

    async fn review_summaries(
        &self,
        ids: &[ProductId],
    ) -> Result<HashMap<ProductId, ReviewSummary>> {
        let endpoint = Endpoint::ReviewSummaries;
        let response = self
            .client
            .post(self.url(endpoint)?)
            .json(&SummaryBatchRequest { product_ids: ids })
            .send()
            .await?;
        let batch: SummaryBatchResponse = Self::decode(endpoint, response).await?;
        Ok(batch.into_summaries())
    }
}
