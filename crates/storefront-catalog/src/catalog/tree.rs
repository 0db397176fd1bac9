//! Category tree traversal and product aggregation.

use std::collections::HashSet;

use crate::catalog::{Catalog, Category, Product};
use crate::ids::CategoryId;

impl Catalog {
    /// The starting id followed by every transitive child, depth-first.
    ///
    /// Siblings are visited in `sort_order`. A category reached twice is
    /// not expanded again, so the walk terminates even on cyclic input.
    pub fn descendant_ids(&self, category_id: &str) -> Vec<CategoryId> {
        let mut visited = HashSet::new();
        let mut stack = vec![CategoryId::new(category_id)];
        let mut ids = Vec::new();

        while let Some(id) = stack.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            let children = self.subcategories(id.as_str());
            stack.extend(children.into_iter().rev().map(|child| child.id.clone()));
            ids.push(id);
        }

        ids
    }

    /// Products linked to any of the given categories, once each.
    ///
    /// Order follows the link declarations; a product keeps the position of
    /// its first qualifying link.
    pub fn products_in_categories(&self, category_ids: &[CategoryId]) -> Vec<&Product> {
        let wanted: HashSet<&str> = category_ids.iter().map(CategoryId::as_str).collect();
        let mut seen = HashSet::new();

        self.links()
            .iter()
            .filter(|link| wanted.contains(link.category_id.as_str()))
            .filter(|link| seen.insert(link.product_id.as_str()))
            .filter_map(|link| self.product_by_id(link.product_id.as_str()))
            .collect()
    }

    /// Products of the category at `path`, optionally with its descendants.
    ///
    /// An unknown path yields no products.
    pub fn products_for_category(&self, path: &str, include_children: bool) -> Vec<&Product> {
        let Some(category) = self.category_by_path(path) else {
            return Vec::new();
        };
        let ids = if include_children {
            self.descendant_ids(category.id.as_str())
        } else {
            vec![category.id.clone()]
        };
        self.products_in_categories(&ids)
    }

    /// Products listed on a category page.
    ///
    /// Categories with children include every descendant's products; leaf
    /// categories use their direct links only.
    pub fn category_products(&self, category: &Category) -> Vec<&Product> {
        let include_children = self.has_subcategories(category.id.as_str());
        self.products_for_category(&category.path, include_children)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, CatalogData, Category, Product, ProductCategoryLink};
    use crate::ids::CategoryId;
    use crate::price::Price;

    fn sample() -> Catalog {
        let women = Category::new_root("w", "Женская обувь", "zhenskaya-obuv");
        let shoes = Category::new_child(&women, "w-shoes", "Туфли", "tufli").with_sort_order(2);
        let closed = Category::new_child(&shoes, "w-closed", "Закрытые", "zakrytye");
        let offers = Category::new_child(&women, "w-offers", "ЛУЧШАЯ ЦЕНА", "best").with_sort_order(1).special();
        let product = |id: &str| Product::new(id, id, format!("/category/{}/", id), Price::new("1 000 руб."));

        let data = CatalogData {
            categories: vec![women, shoes, closed, offers],
            products: vec![product("p1"), product("p2"), product("p3")],
            product_categories: vec![
                ProductCategoryLink::new("p2", "w-closed"),
                ProductCategoryLink::new("p1", "w-shoes"),
                ProductCategoryLink::new("p2", "w-offers"),
                ProductCategoryLink::new("p3", "w-offers"),
            ],
            ..Default::default()
        };
        Catalog::new(data).unwrap()
    }

    fn ids(list: &[CategoryId]) -> Vec<&str> {
        list.iter().map(CategoryId::as_str).collect()
    }

    #[test]
    fn test_descendants_preorder() {
        let catalog = sample();
        assert_eq!(
            ids(&catalog.descendant_ids("w")),
            vec!["w", "w-offers", "w-shoes", "w-closed"]
        );
        assert_eq!(ids(&catalog.descendant_ids("w-closed")), vec!["w-closed"]);
    }

    #[test]
    fn test_products_deduplicated_in_link_order() {
        let catalog = sample();
        let products: Vec<_> = catalog
            .products_for_category("zhenskaya-obuv", true)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(products, vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn test_direct_links_only() {
        let catalog = sample();
        let products: Vec<_> = catalog
            .products_for_category("zhenskaya-obuv/tufli", false)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(products, vec!["p1"]);
        assert!(catalog.products_for_category("zhenskaya-obuv", false).is_empty());
    }

    #[test]
    fn test_unknown_path_is_empty() {
        let catalog = sample();
        assert!(catalog.products_for_category("nope", true).is_empty());
    }

    #[test]
    fn test_category_products_expands_parents_only() {
        let catalog = sample();
        let shoes = catalog.category_by_path("zhenskaya-obuv/tufli").unwrap();
        let products: Vec<_> = catalog.category_products(shoes).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(products, vec!["p2", "p1"]);
    }
}
