//! Product filter predicate.

use crate::catalog::Product;
use crate::search::FilterParams;

impl FilterParams {
    /// Check whether a product satisfies every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_query(product)
            && self.matches_sizes(product)
            && self.matches_colors(product)
            && self.matches_brands(product)
            && self.matches_price(product)
            && flag_matches(self.on_sale, product.on_sale())
            && flag_matches(self.is_new, product.is_new())
            && flag_matches(self.is_hit, product.is_hit())
    }

    fn matches_query(&self, product: &Product) -> bool {
        match self.active_query() {
            Some(query) => product.title.to_lowercase().contains(&query.to_lowercase()),
            None => true,
        }
    }

    /// Any requested size the product comes in. Sizes that do not start
    /// with a number never match.
    fn matches_sizes(&self, product: &Product) -> bool {
        self.sizes.is_empty()
            || self
                .sizes
                .iter()
                .filter_map(|size| parse_size(size))
                .any(|size| product.has_size(size))
    }

    fn matches_colors(&self, product: &Product) -> bool {
        self.colors.is_empty() || self.colors.iter().any(|color| product.color.contains(color))
    }

    /// Exact brand name membership.
    fn matches_brands(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.iter().any(|brand| *brand == product.brand)
    }

    fn matches_price(&self, product: &Product) -> bool {
        let price = product.current_price();
        self.min_price.map_or(true, |min| price >= min) && self.max_price.map_or(true, |max| price <= max)
    }
}

fn flag_matches(wanted: Option<bool>, actual: bool) -> bool {
    wanted.map_or(true, |wanted| wanted == actual)
}

/// Leading decimal digits of a size value (`"38"`, `" 38.5"` → 38).
pub fn parse_size(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(value.len(), |(pos, _)| pos);
    value[..end].parse().ok()
}

/// Products that satisfy `filters`, in input order.
pub fn filter_products<'a, I>(filters: &FilterParams, products: I) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|product| filters.matches(product)).collect()
}
