// src/services/icons.rs

//! Category icon resolution.
//!
//! Each sidebar entry gets exactly one icon, picked in this order:
//!
//! 1. the category's uploaded image,
//! 2. the icon-library name configured on the category,
//! 3. the first entry of [`KEYWORD_ICONS`] whose keyword occurs in the slug,
//! 4. [`BuiltinIcon::Default`].

use serde::Serialize;

use crate::models::Category;

/// Bumped whenever [`KEYWORD_ICONS`] gains, loses or reorders entries.
pub const KEYWORD_ICONS_VERSION: u32 = 1;

/// Slug keywords and their icons. Matching is a case-sensitive substring
/// test and the first hit wins, so order matters.
pub const KEYWORD_ICONS: &[(&str, BuiltinIcon)] = &[
    ("glass", BuiltinIcon::Glasses),
    ("home", BuiltinIcon::Home),
    ("tool", BuiltinIcon::Tools),
    ("kid", BuiltinIcon::Kids),
    ("book", BuiltinIcon::Books),
    ("tech", BuiltinIcon::Tech),
    ("food", BuiltinIcon::Food),
    ("cloth", BuiltinIcon::Clothing),
    ("sport", BuiltinIcon::Sport),
];

/// Icons bundled with the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinIcon {
    Glasses,
    Home,
    Tools,
    Kids,
    Books,
    Tech,
    Food,
    Clothing,
    Sport,
    Default,
}

impl BuiltinIcon {
    pub fn name(self) -> &'static str {
        match self {
            BuiltinIcon::Glasses => "glasses",
            BuiltinIcon::Home => "home",
            BuiltinIcon::Tools => "tools",
            BuiltinIcon::Kids => "kids",
            BuiltinIcon::Books => "books",
            BuiltinIcon::Tech => "tech",
            BuiltinIcon::Food => "food",
            BuiltinIcon::Clothing => "clothing",
            BuiltinIcon::Sport => "sport",
            BuiltinIcon::Default => "default",
        }
    }

    /// Stroke path data on a 24x24 viewBox.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            BuiltinIcon::Glasses => &[
                "M15 12a3 3 0 11-6 0 3 3 0 016 0z",
                "M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z",
            ],
            BuiltinIcon::Home => &[
                "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
            ],
            BuiltinIcon::Tools => &[
                "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z",
                "M15 12a3 3 0 11-6 0 3 3 0 016 0z",
            ],
            BuiltinIcon::Kids => &[
                "M14.828 14.828a4 4 0 01-5.656 0M9 10h.01M15 10h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            ],
            BuiltinIcon::Books => &[
                "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253",
            ],
            BuiltinIcon::Tech => &[
                "M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            ],
            BuiltinIcon::Food => &[
                "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2.293 2.293c-.63.63-.184 1.707.707 1.707H17m0 0a2 2 0 100 4 2 2 0 000-4zm-8 2a2 2 0 11-4 0 2 2 0 014 0z",
            ],
            BuiltinIcon::Clothing => &[
                "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
            ],
            BuiltinIcon::Sport => &[
                "M7 16a4 4 0 01-.88-7.903A5 5 0 1115.9 6L16 6a5 5 0 011 9.9M15 13l-3-3m0 0l-3 3m3-3v12",
            ],
            BuiltinIcon::Default => &["M4 6h16M4 12h16M4 18h16"],
        }
    }

    /// Inline SVG markup for the icon.
    pub fn to_svg(self) -> String {
        let paths: String = self
            .paths()
            .iter()
            .map(|d| {
                format!(
                    r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{d}"/>"#
                )
            })
            .collect();
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">{paths}</svg>"#
        )
    }
}

/// What the sidebar draws next to a category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CategoryIcon {
    /// Uploaded image
    Image { url: String, alt: String },
    /// Icon-library name; unknown names are the icon library's problem
    Named { name: String },
    /// Bundled icon
    Builtin { icon: BuiltinIcon },
}

/// Maps categories to icons.
#[derive(Debug, Clone, Copy)]
pub struct CategoryIconResolver {
    table: &'static [(&'static str, BuiltinIcon)],
}

impl CategoryIconResolver {
    pub fn new() -> Self {
        Self::with_table(KEYWORD_ICONS)
    }

    /// Resolver using a different keyword table, searched in order.
    pub fn with_table(table: &'static [(&'static str, BuiltinIcon)]) -> Self {
        Self { table }
    }

    pub fn resolve(&self, category: &Category) -> CategoryIcon {
        if let Some(url) = category.image_url() {
            return CategoryIcon::Image {
                url: url.to_string(),
                alt: category.name.clone(),
            };
        }

        if let Some(name) = category.icon_name() {
            return CategoryIcon::Named {
                name: name.to_string(),
            };
        }

        CategoryIcon::Builtin {
            icon: self.match_slug(&category.slug),
        }
    }

    /// First table icon whose keyword occurs in `slug`.
    pub fn match_slug(&self, slug: &str) -> BuiltinIcon {
        self.table
            .iter()
            .find(|(keyword, _)| slug.contains(keyword))
            .map_or(BuiltinIcon::Default, |&(_, icon)| icon)
    }
}

impl Default for CategoryIconResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin(icon: BuiltinIcon) -> CategoryIcon {
        CategoryIcon::Builtin { icon }
    }

    #[test]
    fn test_image_wins_over_icon() {
        let category = Category::new(1, "Glasses", "glasses")
            .with_image("/uploads/glasses.png")
            .with_icon("eye");

        assert_eq!(
            CategoryIconResolver::new().resolve(&category),
            CategoryIcon::Image {
                url: "/uploads/glasses.png".to_string(),
                alt: "Glasses".to_string(),
            }
        );
    }

    #[test]
    fn test_named_icon_ignores_slug() {
        let category = Category::new(2, "Home", "home").with_icon("book");

        assert_eq!(
            CategoryIconResolver::new().resolve(&category),
            CategoryIcon::Named {
                name: "book".to_string()
            }
        );
    }

    #[test]
    fn test_blank_image_falls_through() {
        let category = Category::new(3, "Tools", "power-tools")
            .with_image("")
            .with_icon(" ");

        assert_eq!(
            CategoryIconResolver::new().resolve(&category),
            builtin(BuiltinIcon::Tools)
        );
    }

    #[test]
    fn test_keyword_order_decides() {
        let resolver = CategoryIconResolver::new();

        // "toys" is not "tool", so only "kid" matches
        assert_eq!(resolver.match_slug("kids-toys"), BuiltinIcon::Kids);
        // both "home" and "tech" occur; "home" is listed first
        assert_eq!(resolver.match_slug("home-tech"), BuiltinIcon::Home);
        assert_eq!(resolver.match_slug("tech-for-home"), BuiltinIcon::Home);
        // both "glass" and "kid" occur; "glass" is listed first
        assert_eq!(resolver.match_slug("kids-glasses"), BuiltinIcon::Glasses);
        assert_eq!(resolver.match_slug("sportswear"), BuiltinIcon::Sport);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let resolver = CategoryIconResolver::new();
        assert_eq!(resolver.match_slug("Books"), BuiltinIcon::Default);
        assert_eq!(resolver.match_slug("books"), BuiltinIcon::Books);
    }

    #[test]
    fn test_unmatched_slug_gets_default() {
        let category = Category::new(9, "Garden", "garden");
        assert_eq!(
            CategoryIconResolver::new().resolve(&category),
            builtin(BuiltinIcon::Default)
        );
    }

    #[test]
    fn test_keyword_table_is_pinned() {
        let keywords: Vec<&str> = KEYWORD_ICONS.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keywords,
            ["glass", "home", "tool", "kid", "book", "tech", "food", "cloth", "sport"]
        );
        assert_eq!(KEYWORD_ICONS_VERSION, 1);
    }

    #[test]
    fn test_custom_table() {
        const TABLE: &[(&str, BuiltinIcon)] = &[("toy", BuiltinIcon::Kids)];
        let resolver = CategoryIconResolver::with_table(TABLE);
        assert_eq!(resolver.match_slug("kids-toys"), BuiltinIcon::Kids);
        assert_eq!(resolver.match_slug("home"), BuiltinIcon::Default);
    }

    #[test]
    fn test_svg_markup() {
        let svg = BuiltinIcon::Default.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"d="M4 6h16M4 12h16M4 18h16""#));
        assert_eq!(BuiltinIcon::Tools.paths().len(), 2);
    }

    #[test]
    fn test_icon_serialization() {
        let json = serde_json::to_value(builtin(BuiltinIcon::Kids)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "builtin", "icon": "kids" }));
    }
}
