//! Hero banner settings.

use serde::{Deserialize, Serialize};

/// Main banner configuration served by the settings endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainBanner {
    #[serde(default)]
    pub image_url: String,

    /// Mobile variant, falls back to `image_url`
    #[serde(default)]
    pub mobile_image_url: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default = "defaults::button_text")]
    pub button_text: String,

    #[serde(default = "defaults::button_link")]
    pub button_link: String,
}

impl MainBanner {
    /// Image shown on small screens.
    pub fn mobile_image(&self) -> &str {
        self.mobile_image_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.image_url)
    }

    /// True when there is nothing to draw in the hero section.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

impl Default for MainBanner {
    fn default() -> Self {
        Self {
            image_url: String::new(),
            mobile_image_url: None,
            title: String::new(),
            subtitle: String::new(),
            button_text: defaults::button_text(),
            button_link: defaults::button_link(),
        }
    }
}

mod defaults {
    pub fn button_text() -> String {
        "Почати покупки".into()
    }
    pub fn button_link() -> String {
        "/products".into()
    }
}
