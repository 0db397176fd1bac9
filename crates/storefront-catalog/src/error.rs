//! Catalog error types.
//!
//! Only loading and validation can fail. Lookups and queries report
//! absence through `Option` or an empty result instead.

use thiserror::Error;

/// Errors raised while loading or validating the catalog and its config.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two categories share the same id.
    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(String),

    /// Two categories share the same path.
    #[error("Duplicate category path: {0}")]
    DuplicateCategoryPath(String),

    /// A category references a parent that does not exist.
    #[error("Category {category} references unknown parent {parent}")]
    UnknownParent { category: String, parent: String },

    /// A category path does not match the chain of ancestor slugs.
    #[error("Category {category} has path {actual}, expected {expected}")]
    InconsistentPath {
        category: String,
        expected: String,
        actual: String,
    },

    /// A category level does not match its depth in the tree.
    #[error("Category {category} has level {actual}, expected {expected}")]
    InconsistentLevel {
        category: String,
        expected: u32,
        actual: u32,
    },

    /// Following parent links from a category leads back to itself.
    #[error("Category parent chain contains a cycle at {0}")]
    CategoryCycle(String),

    /// Two products share the same id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(String),

    /// Two products share the same canonical url.
    #[error("Duplicate product url: {0}")]
    DuplicateProductUrl(String),

    /// Two brands share the same slug.
    #[error("Duplicate brand slug: {0}")]
    DuplicateBrandSlug(String),

    /// The old price of a product does not exceed its current price.
    #[error("Product {product}: old price {old} does not exceed current price {current}")]
    InvalidPrice {
        product: String,
        current: String,
        old: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Config(e.to_string())
    }
}
