//! Brand reference list.

use crate::catalog::Product;
use crate::config::RouteSettings;
use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// An entry of the brand directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    /// Brand identifier.
    pub id: BrandId,
    /// Display name.
    pub name: String,
    /// Brand page path.
    pub url: String,
    /// URL slug, unique.
    pub slug: String,
}

impl Brand {
    /// Build a directory entry whose page lives under `routes`.
    pub fn new(
        id: impl Into<BrandId>,
        name: impl Into<String>,
        slug: impl Into<String>,
        routes: &RouteSettings,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: id.into(),
            name: name.into(),
            url: format!("{}/", routes.brand_href(&slug)),
            slug,
        }
    }

    /// Whether a product belongs to this brand.
    ///
    /// Products carry the brand as free text, so the join compares names
    /// case-insensitively rather than by id.
    pub fn matches(&self, product: &Product) -> bool {
        product.brand.to_lowercase() == self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    #[test]
    fn test_brand_url() {
        let brand = Brand::new("1", "Ara", "ara", &RouteSettings::default());
        assert_eq!(brand.url, "/category/brendy/ara/");

        let routes = RouteSettings {
            category_prefix: "/catalog".to_string(),
            brands_segment: "brands".to_string(),
        };
        assert_eq!(Brand::new("1", "Ara", "ara", &routes).url, "/catalog/brands/ara/");
    }

    #[test]
    fn test_matches_case_insensitive() {
        let brand = Brand::new("1", "Ara", "ara", &RouteSettings::default());
        let mut product = Product::new("p", "Ботинки", "/category/p/", Price::new("1 000 руб."));
        product.brand = "ARA".to_string();
        assert!(brand.matches(&product));

        product.brand = "ARA ".to_string();
        assert!(!brand.matches(&product));
    }
}
