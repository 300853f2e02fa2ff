//! Catalog records: products and categories.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// Backend product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog product.
///
/// Only `id` is interpreted here. Every other field the backend sends is
/// kept in `fields` and serialized back untouched for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Create a product carrying nothing but its identifier.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Look up an opaque backend field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A product category shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,

    /// Lowercase routing keyword, also used for icon fallback matching
    pub slug: String,

    /// Uploaded category image
    #[serde(default)]
    pub image: Option<String>,

    /// Icon-library identifier
    #[serde(default)]
    pub icon: Option<String>,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            image: None,
            icon: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Uploaded image, ignoring empty values.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }

    /// Icon-library name, ignoring empty values.
    pub fn icon_name(&self) -> Option<&str> {
        self.icon.as_deref().filter(|s| !s.is_empty())
    }

    /// Path the sidebar entry links to.
    pub fn href(&self) -> String {
        format!("/category/{}", self.slug)
    }

    /// Check the slug is non-empty and URL-safe.
    pub fn validate(&self) -> Result<()> {
        if self.slug.is_empty() {
            return Err(AppError::validation(format!(
                "category {} has an empty slug",
                self.id
            )));
        }
        let url_safe = self
            .slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'));
        if !url_safe {
            return Err(AppError::validation(format!(
                "category {} slug '{}' is not URL-safe",
                self.id, self.slug
            )));
        }
        Ok(())
    }
}
