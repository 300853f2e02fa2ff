// src/services/home.rs

//! Homepage data aggregator.
//!
//! Fetches the banner, the category list and the featured products in
//! parallel, then refreshes review summaries for the products it got. Each
//! read fails on its own: a broken section keeps its default value while the
//! rest of the page fills in.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::api::{Endpoint, StorefrontApi};
use crate::error::Result;
use crate::logging::{LoadObserver, LogObserver};
use crate::models::{Category, Config, MainBanner, Product, ProductId, ProductRating};
use crate::utils::url::{BannerUrls, CacheBuster};

use super::{CategoryIcon, CategoryIconResolver, ReadGuard, ReviewSummaryCache};

/// Lifecycle of the page data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLoadState {
    #[default]
    NotFetched,
    Loading,
    Loaded,
}

/// Knobs for [`HomeDataAggregator`].
#[derive(Debug, Clone)]
pub struct HomeOptions {
    /// Number of featured products requested
    pub featured_limit: usize,
    /// Deadline for each individual read
    pub read_timeout: Duration,
}

impl HomeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            featured_limit: config.home.featured_limit,
            read_timeout: config.api.timeout(),
        }
    }
}

impl Default for HomeOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Summary of one `load()` run.
#[derive(Debug, Clone, Serialize)]
pub struct LoadOutcome {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub banner_loaded: bool,
    pub category_count: usize,
    pub product_count: usize,
    pub review_count: usize,
    /// Reads that failed or timed out
    pub failures: usize,
}

impl LoadOutcome {
    fn started() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            banner_loaded: false,
            category_count: 0,
            product_count: 0,
            review_count: 0,
            failures: 0,
        }
    }

    pub fn elapsed(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }
}

/// Sidebar entry ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub category: Category,
    pub href: String,
    pub icon: CategoryIcon,
}

/// Product card ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub product: Product,
    pub review_summary: ProductRating,
}

/// Everything the homepage template needs, in one value.
#[derive(Debug, Clone, Serialize)]
pub struct HomeSnapshot {
    pub state: PageLoadState,
    pub loading: bool,
    pub banner: MainBanner,
    pub banner_urls: Option<BannerUrls>,
    pub categories: Vec<CategoryEntry>,
    pub featured_products: Vec<ProductCard>,
}

#[derive(Debug, Default)]
struct HomeState {
    load_state: PageLoadState,
    banner: MainBanner,
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Owns the homepage data for one page instance.
pub struct HomeDataAggregator {
    api: Arc<dyn StorefrontApi>,
    guard: ReadGuard,
    observer: Arc<dyn LoadObserver>,
    featured_limit: usize,
    cache_buster: CacheBuster,
    icons: CategoryIconResolver,
    reviews: ReviewSummaryCache,
    state: RwLock<HomeState>,
}

impl HomeDataAggregator {
    pub fn new(api: Arc<dyn StorefrontApi>, options: &HomeOptions) -> Self {
        let guard = ReadGuard::new(options.read_timeout);
        Self {
            reviews: ReviewSummaryCache::new(Arc::clone(&api), guard.clone()),
            api,
            guard,
            observer: Arc::new(LogObserver),
            featured_limit: options.featured_limit,
            cache_buster: CacheBuster::now(),
            icons: CategoryIconResolver::new(),
            state: RwLock::new(HomeState::default()),
        }
    }

    /// Replace the default `log`-backed observer.
    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Pin the cache-busting token instead of taking it from the clock.
    pub fn with_cache_buster(mut self, cache_buster: CacheBuster) -> Self {
        self.cache_buster = cache_buster;
        self
    }

    /// Resolve category icons against a different keyword table.
    pub fn with_icon_resolver(mut self, icons: CategoryIconResolver) -> Self {
        self.icons = icons;
        self
    }

    /// Fetch the page data once.
    ///
    /// Only the first call does any work; later calls return `None` without
    /// touching the network. Read failures are reported to the observer and
    /// never returned. The state reaches [`PageLoadState::Loaded`] even when
    /// every read fails.
    pub async fn load(&self) -> Option<LoadOutcome> {
        if !self.begin_loading() {
            self.observer.load_skipped();
            return None;
        }
        let loading = SettleOnDrop(&self.state);
        let mut outcome = LoadOutcome::started();

        let (banner, categories, products) = futures::join!(
            self.guard.run(Endpoint::MainBanner, self.api.main_banner()),
            self.guard.run(Endpoint::Categories, self.api.categories()),
            self.guard.run(
                Endpoint::FeaturedProducts,
                self.api.featured_products(self.featured_limit)
            ),
        );

        if let Some(banner) = self.settle(Endpoint::MainBanner, banner, &mut outcome) {
            self.write().banner = banner;
            outcome.banner_loaded = true;
            self.observer.read_applied(Endpoint::MainBanner, 1);
        }

        if let Some(categories) = self.settle(Endpoint::Categories, categories, &mut outcome) {
            let categories = self.accept_categories(categories);
            outcome.category_count = categories.len();
            self.observer
                .read_applied(Endpoint::Categories, categories.len());
            self.write().categories = categories;
        }

        let mut product_ids = Vec::new();
        if let Some(mut products) =
            self.settle(Endpoint::FeaturedProducts, products, &mut outcome)
        {
            products.truncate(self.featured_limit);
            product_ids = products.iter().map(|p| p.id).collect();
            outcome.product_count = products.len();
            self.observer
                .read_applied(Endpoint::FeaturedProducts, products.len());
            self.write().products = products;
        }

        drop(loading);

        if !product_ids.is_empty() {
            let refreshed = self.reviews.refresh_batch(&product_ids).await;
            if let Some(written) = self.settle(Endpoint::ReviewSummaries, refreshed, &mut outcome)
            {
                outcome.review_count = written;
                self.observer.read_applied(Endpoint::ReviewSummaries, written);
            }
        }

        outcome.finished_at = Utc::now();
        self.observer.load_finished(&outcome);
        Some(outcome)
    }

    /// Abandon in-flight reads. Results that arrive afterwards are dropped.
    pub fn teardown(&self) {
        self.guard.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.guard.is_cancelled()
    }

    pub fn load_state(&self) -> PageLoadState {
        self.read().load_state
    }

    /// True until the first load has settled.
    pub fn is_loading(&self) -> bool {
        self.load_state() != PageLoadState::Loaded
    }

    pub fn main_banner(&self) -> MainBanner {
        self.read().banner.clone()
    }

    /// Categories in server order.
    pub fn categories(&self) -> Vec<Category> {
        self.read().categories.clone()
    }

    pub fn featured_products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn reviews(&self) -> &ReviewSummaryCache {
        &self.reviews
    }

    /// Rating shown on a product card; zero until summaries arrive.
    pub fn product_rating(&self, id: ProductId) -> ProductRating {
        self.reviews.rating(id)
    }

    pub fn category_icon(&self, category: &Category) -> CategoryIcon {
        self.icons.resolve(category)
    }

    /// `base` with this page's cache-busting token.
    pub fn cache_busted_url(&self, base: &str) -> String {
        self.cache_buster.apply(base)
    }

    /// Hero images for both breakpoints, or `None` without a banner image.
    pub fn banner_urls(&self) -> Option<BannerUrls> {
        let state = self.read();
        if !state.banner.has_image() {
            return None;
        }
        Some(BannerUrls {
            desktop: self.cache_busted_url(&state.banner.image_url),
            mobile: self.cache_busted_url(state.banner.mobile_image()),
        })
    }

    pub fn snapshot(&self) -> HomeSnapshot {
        let state = self.read();
        let categories = state
            .categories
            .iter()
            .map(|category| CategoryEntry {
                href: category.href(),
                icon: self.category_icon(category),
                category: category.clone(),
            })
            .collect();
        let featured_products = state
            .products
            .iter()
            .map(|product| ProductCard {
                review_summary: self.product_rating(product.id),
                product: product.clone(),
            })
            .collect();
        let banner = state.banner.clone();
        let load_state = state.load_state;
        drop(state);

        HomeSnapshot {
            state: load_state,
            loading: load_state != PageLoadState::Loaded,
            banner_urls: self.banner_urls(),
            banner,
            categories,
            featured_products,
        }
    }

    /// Flip `NotFetched` to `Loading`; false if a load already started.
    fn begin_loading(&self) -> bool {
        let mut state = self.write();
        if state.load_state != PageLoadState::NotFetched {
            return false;
        }
        state.load_state = PageLoadState::Loading;
        true
    }

    /// Unwrap a read result, reporting failures and discarding anything
    /// that settled after teardown.
    fn settle<T>(
        &self,
        endpoint: Endpoint,
        result: Result<T>,
        outcome: &mut LoadOutcome,
    ) -> Option<T> {
        match result {
            Ok(_) if self.is_torn_down() => None,
            Ok(value) => Some(value),
            Err(error) if error.is_cancelled() => None,
            Err(error) => {
                outcome.failures += 1;
                self.observer.read_failed(endpoint, &error);
                None
            }
        }
    }

    fn accept_categories(&self, categories: Vec<Category>) -> Vec<Category> {
        categories
            .into_iter()
            .filter(|category| match category.validate() {
                Ok(()) => true,
                Err(error) => {
                    self.observer.category_rejected(category, &error);
                    false
                }
            })
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, HomeState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HomeState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for HomeDataAggregator {
    fn drop(&mut self) {
        self.guard.cancel();
    }
}

/// Marks the page loaded however the initial reads end, including when the
/// `load()` future itself is dropped mid-flight.
struct SettleOnDrop<'a>(&'a RwLock<HomeState>);

impl Drop for SettleOnDrop<'_> {
    fn drop(&mut self) {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .load_state = PageLoadState::Loaded;
    }
}
