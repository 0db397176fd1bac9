//! Storefront catalog engine.
//!
//! This crate provides the read-only data layer behind a footwear storefront:
//!
//! - **Catalog**: Categories, products, brands, product-category links
//! - **Navigation**: Path resolution, breadcrumbs, route classification, menu
//! - **Search**: Typed filter params, filtering, sorting, facets, pagination
//! - **Storefront**: Page assembly for category, brand, product and search pages
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront_catalog::prelude::*;
//!
//! let store = Storefront::embedded()?;
//!
//! // Second page of new ARA boots
//! let params = SearchParams::from_query_string("brands=ARA&isNew=true&pag=2");
//! let page = store.handle(&["zhenskaya-obuv", "botinki"], &params);
//! for crumb in page.breadcrumbs() {
//!     println!("{}", crumb.label);
//! }
//! # Ok::<(), CatalogError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod navigation;
pub mod search;
pub mod storefront;

pub use config::StorefrontConfig;
pub use error::CatalogError;
pub use ids::*;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{LabelSettings, RouteSettings, StorefrontConfig};
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::price::Price;

    // Catalog
    pub use crate::catalog::{Brand, Catalog, CatalogData, Category, Product, ProductCategoryLink};

    // Navigation
    pub use crate::navigation::{Breadcrumb, MenuItem, Navigator, RouteKind, RoutePath};

    // Search
    pub use crate::search::{FilterParams, FilterSection, Page, Pagination, SearchParams, SortOrder};

    // Pages
    pub use crate::storefront::{Listing, PageView, Storefront};
}
