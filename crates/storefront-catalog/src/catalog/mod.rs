//! Product catalog module.
//!
//! Contains the static collections (categories, products, brands and their
//! links), the indexed [`Catalog`] built from them, and tree aggregation.

mod brand;
mod category;
mod data;
mod product;
mod store;
mod tree;

pub use brand::Brand;
pub use category::Category;
pub use data::{
    AttributeOption, CatalogData, FilterAttributes, ProductCategoryLink, SpecialKind, SpecialOption,
};
pub use product::{Badge, Badges, ColorSet, Discount, Product};
pub use store::{Catalog, CatalogIndexes};
