//! Indexed, read-only catalog.

use std::collections::{HashMap, HashSet};

use tracing::{info, warn};

use crate::catalog::{Brand, CatalogData, Category, FilterAttributes, Product, ProductCategoryLink};
use crate::error::CatalogError;
use crate::ids::{CategoryId, ProductId};

/// Lookup tables over a [`CatalogData`], built in a single pass.
///
/// Entries point into the collections of the data they were built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndexes {
    categories_by_path: HashMap<String, usize>,
    categories_by_id: HashMap<CategoryId, usize>,
    /// Child positions per parent, ordered by `sort_order`.
    children: HashMap<CategoryId, Vec<usize>>,
    roots: Vec<usize>,
    products_by_id: HashMap<ProductId, usize>,
    products_by_url: HashMap<String, usize>,
    brands_by_slug: HashMap<String, usize>,
    /// Links whose product and category both exist, in declaration order.
    links: Vec<ProductCategoryLink>,
    categories_by_product: HashMap<ProductId, Vec<usize>>,
}

impl CatalogIndexes {
    /// Build every index from the raw collections.
    ///
    /// Pure over `data`: building twice yields equal indexes. Links that
    /// reference unknown products or categories are skipped.
    pub fn build(data: &CatalogData) -> Self {
        let mut indexes = Self::default();

        for (pos, category) in data.categories.iter().enumerate() {
            indexes.categories_by_path.insert(category.path.clone(), pos);
            indexes.categories_by_id.insert(category.id.clone(), pos);
            match &category.parent_id {
                Some(parent) => indexes.children.entry(parent.clone()).or_default().push(pos),
                None => indexes.roots.push(pos),
            }
        }

        let by_sort_order = |a: &usize, b: &usize| {
            data.categories[*a].sort_order.cmp(&data.categories[*b].sort_order)
        };
        indexes.roots.sort_by(by_sort_order);
        for children in indexes.children.values_mut() {
            children.sort_by(by_sort_order);
        }

        for (pos, product) in data.products.iter().enumerate() {
            indexes.products_by_id.insert(product.id.clone(), pos);
            indexes.products_by_url.insert(product.url.clone(), pos);
        }

        for (pos, brand) in data.brands.iter().enumerate() {
            indexes.brands_by_slug.insert(brand.slug.clone(), pos);
        }

        let mut dropped = 0usize;
        for link in &data.product_categories {
            let category = indexes.categories_by_id.get(&link.category_id).copied();
            match category {
                Some(category) if indexes.products_by_id.contains_key(&link.product_id) => {
                    indexes
                        .categories_by_product
                        .entry(link.product_id.clone())
                        .or_default()
                        .push(category);
                    indexes.links.push(link.clone());
                }
                _ => dropped += 1,
            }
        }
        if dropped > 0 {
            warn!(dropped, "skipped product-category links referencing unknown entities");
        }

        indexes
    }

    /// Number of usable product-category links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// The immutable, indexed catalog every query runs against.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    indexes: CatalogIndexes,
}

impl Catalog {
    /// Validate the collections and build their indexes.
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        validate(&data)?;
        let indexes = CatalogIndexes::build(&data);
        info!(
            categories = data.categories.len(),
            products = data.products.len(),
            brands = data.brands.len(),
            links = indexes.link_count(),
            "catalog indexed"
        );
        Ok(Self { data, indexes })
    }

    /// Load the dataset compiled into the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(CatalogData::embedded()?)
    }

    /// The raw collections.
    pub fn data(&self) -> &CatalogData {
        &self.data
    }

    /// The lookup tables.
    pub fn indexes(&self) -> &CatalogIndexes {
        &self.indexes
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.data.products
    }

    /// Brands in declaration order.
    pub fn brands(&self) -> &[Brand] {
        &self.data.brands
    }

    pub fn filter_attributes(&self) -> &FilterAttributes {
        &self.data.filter_attributes
    }

    /// Product-category links that resolve on both ends.
    pub fn links(&self) -> &[ProductCategoryLink] {
        &self.indexes.links
    }

    /// Find a category by its slash-joined path.
    pub fn category_by_path(&self, path: &str) -> Option<&Category> {
        self.indexes
            .categories_by_path
            .get(path)
            .map(|pos| &self.data.categories[*pos])
    }

    pub fn category_by_id(&self, id: &str) -> Option<&Category> {
        self.indexes
            .categories_by_id
            .get(id)
            .map(|pos| &self.data.categories[*pos])
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.indexes
            .products_by_id
            .get(id)
            .map(|pos| &self.data.products[*pos])
    }

    /// Find a product by its canonical detail path.
    pub fn product_by_url(&self, url: &str) -> Option<&Product> {
        self.indexes
            .products_by_url
            .get(url)
            .map(|pos| &self.data.products[*pos])
    }

    pub fn brand_by_slug(&self, slug: &str) -> Option<&Brand> {
        self.indexes
            .brands_by_slug
            .get(slug)
            .map(|pos| &self.data.brands[*pos])
    }

    /// Root categories ordered by `sort_order`.
    pub fn roots(&self) -> Vec<&Category> {
        self.indexes
            .roots
            .iter()
            .map(|pos| &self.data.categories[*pos])
            .collect()
    }

    /// Direct children of a category ordered by `sort_order`.
    pub fn subcategories(&self, parent: &str) -> Vec<&Category> {
        self.indexes
            .children
            .get(parent)
            .map(|children| children.iter().map(|pos| &self.data.categories[*pos]).collect())
            .unwrap_or_default()
    }

    pub fn has_subcategories(&self, id: &str) -> bool {
        self.indexes
            .children
            .get(id)
            .map(|children| !children.is_empty())
            .unwrap_or(false)
    }

    /// Categories a product is linked to, in link order.
    pub fn product_categories(&self, product_id: &str) -> Vec<&Category> {
        self.indexes
            .categories_by_product
            .get(product_id)
            .map(|cats| cats.iter().map(|pos| &self.data.categories[*pos]).collect())
            .unwrap_or_default()
    }

    /// Brand directory entry matching a product's free-text brand.
    pub fn brand_of(&self, product: &Product) -> Option<&Brand> {
        self.data.brands.iter().find(|brand| brand.matches(product))
    }
}

/// Check the structural invariants of the collections.
fn validate(data: &CatalogData) -> Result<(), CatalogError> {
    let mut by_id: HashMap<&str, &Category> = HashMap::new();
    let mut paths = HashSet::new();
    for category in &data.categories {
        if by_id.insert(category.id.as_str(), category).is_some() {
            return Err(CatalogError::DuplicateCategoryId(category.id.to_string()));
        }
        if !paths.insert(category.path.as_str()) {
            return Err(CatalogError::DuplicateCategoryPath(category.path.clone()));
        }
    }

    for category in &data.categories {
        if let Some(parent_id) = &category.parent_id {
            if !by_id.contains_key(parent_id.as_str()) {
                return Err(CatalogError::UnknownParent {
                    category: category.id.to_string(),
                    parent: parent_id.to_string(),
                });
            }
        }
    }

    for category in &data.categories {
        let parent = category
            .parent_id
            .as_ref()
            .map(|parent_id| by_id[parent_id.as_str()]);

        // A chain longer than the category count must revisit a node.
        let mut steps = 0usize;
        let mut cursor = category;
        while let Some(parent_id) = &cursor.parent_id {
            steps += 1;
            if steps > data.categories.len() {
                return Err(CatalogError::CategoryCycle(category.id.to_string()));
            }
            cursor = by_id[parent_id.as_str()];
        }

        let (expected_path, expected_level) = match parent {
            Some(parent) => (format!("{}/{}", parent.path, category.slug), parent.level + 1),
            None => (category.slug.clone(), 0),
        };
        if category.path != expected_path {
            return Err(CatalogError::InconsistentPath {
                category: category.id.to_string(),
                expected: expected_path,
                actual: category.path.clone(),
            });
        }
        if category.level != expected_level {
            return Err(CatalogError::InconsistentLevel {
                category: category.id.to_string(),
                expected: expected_level,
                actual: category.level,
            });
        }
    }

    let mut product_ids = HashSet::new();
    let mut product_urls = HashSet::new();
    for product in &data.products {
        if !product_ids.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateProductId(product.id.to_string()));
        }
        if !product_urls.insert(product.url.as_str()) {
            return Err(CatalogError::DuplicateProductUrl(product.url.clone()));
        }
        if !product.price.is_consistent() {
            return Err(CatalogError::InvalidPrice {
                product: product.id.to_string(),
                current: product.price.current.clone(),
                old: product.price.old.clone().unwrap_or_default(),
            });
        }
    }

    let mut slugs = HashSet::new();
    for brand in &data.brands {
        if !slugs.insert(brand.slug.as_str()) {
            return Err(CatalogError::DuplicateBrandSlug(brand.slug.clone()));
        }
    }

    Ok(())
}
