//! Review summary records.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ProductId;

/// Highest rating a product can have.
pub const MAX_RATING: f64 = 5.0;

/// Aggregate rating statistics for one product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub average_rating: f64,
}

impl ReviewSummary {
    pub fn new(total_count: u64, average_rating: f64) -> Self {
        Self {
            total_count,
            average_rating,
        }
        .normalized()
    }

    /// Clamp the average into `[0, MAX_RATING]`.
    pub fn normalized(self) -> Self {
        let average_rating = if self.average_rating.is_finite() {
            self.average_rating.clamp(0.0, MAX_RATING)
        } else {
            0.0
        };
        Self {
            average_rating,
            ..self
        }
    }

    /// Project onto the field names product cards expect.
    pub fn rating(&self) -> ProductRating {
        ProductRating {
            rating: self.average_rating,
            count: self.total_count,
        }
    }
}

/// Display projection of a [`ReviewSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductRating {
    pub rating: f64,
    pub count: u64,
}

/// Request body of the summary batch endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryBatchRequest<'a> {
    pub product_ids: &'a [ProductId],
}

/// Response body of the summary batch endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryBatchResponse {
    #[serde(default, deserialize_with = "lenient_reviews")]
    pub reviews: HashMap<u64, ReviewSummary>,
}

impl SummaryBatchResponse {
    pub fn into_summaries(self) -> HashMap<ProductId, ReviewSummary> {
        self.reviews
            .into_iter()
            .map(|(id, summary)| (ProductId(id), summary.normalized()))
            .collect()
    }
}

// Summaries decode per entry so a malformed one only loses its own product.
// Unreadable values become zero.

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n as u64)
        })
        .unwrap_or(0))
}

fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_f64().unwrap_or(0.0))
}

fn lenient_reviews<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<HashMap<u64, ReviewSummary>, D::Error> {
    let raw = Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| {
            let id = key.parse().ok()?;
            Some((id, ReviewSummary::deserialize(value).unwrap_or_default()))
        })
        .collect())
}
