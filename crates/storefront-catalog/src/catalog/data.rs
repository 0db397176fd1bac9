//! Raw catalog collections as loaded from the dataset.

use crate::catalog::{Brand, Category, Product};
use crate::error::CatalogError;
use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// The mock dataset shipped with the crate.
const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Many-to-many edge between products and categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductCategoryLink {
    pub product_id: ProductId,
    pub category_id: CategoryId,
}

impl ProductCategoryLink {
    pub fn new(product_id: impl Into<ProductId>, category_id: impl Into<CategoryId>) -> Self {
        Self {
            product_id: product_id.into(),
            category_id: category_id.into(),
        }
    }
}

/// Option lists offered by the filter panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterAttributes {
    /// Selectable sizes.
    #[serde(default)]
    pub sizes: Vec<u32>,
    /// Selectable colors.
    #[serde(default)]
    pub colors: Vec<AttributeOption>,
    /// Selectable brands (matched against `Product::brand` verbatim).
    #[serde(default)]
    pub brands: Vec<AttributeOption>,
    /// Badge and discount toggles.
    #[serde(default)]
    pub specials: Vec<SpecialOption>,
}

/// A labelled filter value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeOption {
    pub id: String,
    pub name: String,
}

/// A badge or discount toggle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialOption {
    pub id: String,
    pub name: String,
    pub kind: SpecialKind,
}

/// What a special toggle inspects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SpecialKind {
    Badge,
    Discount,
}

/// Every static collection of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CatalogData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub product_categories: Vec<ProductCategoryLink>,
    #[serde(default)]
    pub filter_attributes: FilterAttributes,
}

impl CatalogData {
    /// Parse a dataset from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The dataset compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }
}
