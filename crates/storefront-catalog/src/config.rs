//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Settings shared by navigation, listing and search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Products per listing page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum number of search-as-you-type suggestions.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Number of brands listed in the navigation menu.
    #[serde(default = "default_menu_brand_limit")]
    pub menu_brand_limit: usize,

    /// URL layout.
    #[serde(default)]
    pub routes: RouteSettings,

    /// Fixed breadcrumb and fallback labels.
    #[serde(default)]
    pub labels: LabelSettings,
}

fn default_page_size() -> usize {
    9
}

fn default_suggestion_limit() -> usize {
    5
}

fn default_menu_brand_limit() -> usize {
    8
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            suggestion_limit: default_suggestion_limit(),
            menu_brand_limit: default_menu_brand_limit(),
            routes: RouteSettings::default(),
            labels: LabelSettings::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a TOML or JSON file (chosen by extension).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if path.extension().map(|ext| ext == "json").unwrap_or(false) {
            let config: Self = serde_json::from_str(&content)
                .map_err(|e| CatalogError::Config(format!("{}: {}", path.display(), e)))?;
            config.validate()
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(content)?;
        config.validate()
    }

    fn validate(self) -> Result<Self, CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::Config("page_size must be at least 1".to_string()));
        }
        Ok(self)
    }
}

/// URL layout of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSettings {
    /// Prefix every catalog URL lives under.
    #[serde(default = "default_category_prefix")]
    pub category_prefix: String,

    /// Reserved first segment of the brand index and brand pages.
    #[serde(default = "default_brands_segment")]
    pub brands_segment: String,
}

fn default_category_prefix() -> String {
    "/category".to_string()
}

fn default_brands_segment() -> String {
    "brendy".to_string()
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            category_prefix: default_category_prefix(),
            brands_segment: default_brands_segment(),
        }
    }
}

impl RouteSettings {
    /// `/category/<path>`
    pub fn category_href(&self, path: &str) -> String {
        format!("{}/{}", self.category_prefix, path)
    }

    /// `/category/brendy`
    pub fn brands_href(&self) -> String {
        self.category_href(&self.brands_segment)
    }

    /// `/category/brendy/<slug>`
    pub fn brand_href(&self, slug: &str) -> String {
        format!("{}/{}", self.brands_href(), slug)
    }

    /// Canonical product URL for a segment path, trailing slash included.
    pub fn product_url<S: AsRef<str>>(&self, segments: &[S]) -> String {
        let joined: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
        format!("{}/{}/", self.category_prefix, joined.join("/"))
    }
}

/// Labels of the fixed breadcrumbs and not-found fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    pub home: String,
    pub home_href: String,
    pub categories: String,
    pub brands: String,
    /// Last crumb of a product page whose category is unknown.
    pub product_fallback: String,
    /// Prefix of the search results crumb.
    pub search_results: String,
    /// Prefix of the search results crumb title.
    pub search_title: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            home: "Главная".to_string(),
            home_href: "/".to_string(),
            categories: "Категории".to_string(),
            brands: "Бренды".to_string(),
            product_fallback: "Товар".to_string(),
            search_results: "Результаты поиска".to_string(),
            search_title: "Поиск".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.routes.brands_segment, "brendy");
        assert_eq!(config.labels.home, "Главная");
    }

    #[test]
    fn test_partial_toml() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            page_size = 12

            [labels]
            home = "Home"
            "#,
        )
        .unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.labels.home, "Home");
        assert_eq!(config.labels.categories, "Категории");
        assert_eq!(config.routes.category_prefix, "/category");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = StorefrontConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_route_hrefs() {
        let routes = RouteSettings::default();
        assert_eq!(routes.category_href("sumki"), "/category/sumki");
        assert_eq!(routes.brand_href("ara"), "/category/brendy/ara");
        assert_eq!(
            routes.product_url(&["zhenskaya-obuv", "botinki_zhenskie_prod101"]),
            "/category/zhenskaya-obuv/botinki_zhenskie_prod101/"
        );
    }
}
