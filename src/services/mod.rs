//! Service layer for the storefront homepage.
//!
//! This module contains the business logic for:
//! - Page data orchestration (`HomeDataAggregator`)
//! - Review summary caching (`ReviewSummaryCache`)
//! - Category icon selection (`CategoryIconResolver`)
//! - Read deadlines and cancellation (`ReadGuard`)

mod guard;
mod home;
mod icons;
mod reviews;

pub use guard::ReadGuard;
pub use home::{
    CategoryEntry, HomeDataAggregator, HomeOptions, HomeSnapshot, LoadOutcome, PageLoadState,
    ProductCard,
};
pub use icons::{
    BuiltinIcon, CategoryIcon, CategoryIconResolver, KEYWORD_ICONS, KEYWORD_ICONS_VERSION,
};
pub use reviews::ReviewSummaryCache;
