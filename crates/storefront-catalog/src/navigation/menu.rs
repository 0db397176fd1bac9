//! Header category menu.

use serde::Serialize;

use crate::navigation::Navigator;

/// Top-level menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submenu: Vec<SubMenuItem>,
}

/// Dropdown entry under a [`MenuItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubMenuItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub is_special: bool,
}

impl Navigator<'_> {
    /// Root categories with their regular children, then the brands entry.
    pub fn category_menu(&self) -> Vec<MenuItem> {
        let routes = &self.config.routes;
        let menu_url = |path: &str| format!("{}/", routes.category_href(path));

        let mut items: Vec<MenuItem> = self
            .catalog
            .roots()
            .into_iter()
            .map(|root| MenuItem {
                id: root.id.to_string(),
                title: root.name.clone(),
                url: Some(menu_url(&root.path)),
                submenu: self
                    .catalog
                    .subcategories(root.id.as_str())
                    .into_iter()
                    .filter(|child| !child.is_special)
                    .map(|child| SubMenuItem {
                        id: child.id.to_string(),
                        title: child.name.clone(),
                        url: menu_url(&child.path),
                        is_special: child.is_special,
                    })
                    .collect(),
            })
            .collect();

        items.push(MenuItem {
            id: "brands".to_string(),
            title: self.config.labels.brands.clone(),
            url: Some(routes.brands_href()),
            submenu: self
                .catalog
                .brands()
                .iter()
                .take(self.config.menu_brand_limit)
                .map(|brand| SubMenuItem {
                    id: brand.id.to_string(),
                    title: brand.name.clone(),
                    url: brand.url.clone(),
                    is_special: false,
                })
                .collect(),
        });

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Brand, Catalog, CatalogData, Category};
    use crate::config::{RouteSettings, StorefrontConfig};

    #[test]
    fn test_menu_skips_special_children() {
        let bags = Category::new_root("cat3", "Сумки", "sumki").with_sort_order(3);
        let women = Category::new_root("cat1", "Женская обувь", "zhenskaya-obuv").with_sort_order(1);
        let offers = Category::new_child(&women, "cat101", "ЛУЧШАЯ ЦЕНА", "luchshaya-tsena").special();
        let boots = Category::new_child(&women, "cat106", "Ботинки", "botinki").with_sort_order(6);
        let brands = (1..=10)
            .map(|n| {
                Brand::new(n.to_string(), format!("Brand {}", n), format!("brand-{}", n), &RouteSettings::default())
            })
            .collect();
        let catalog = Catalog::new(CatalogData {
            categories: vec![bags, women, offers, boots],
            brands,
            ..Default::default()
        })
        .unwrap();
        let config = StorefrontConfig::default();

        let menu = Navigator::new(&catalog, &config).category_menu();
        let ids: Vec<_> = menu.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["cat1", "cat3", "brands"]);

        assert_eq!(menu[0].url.as_deref(), Some("/category/zhenskaya-obuv/"));
        assert_eq!(menu[0].submenu.len(), 1);
        assert_eq!(menu[0].submenu[0].url, "/category/zhenskaya-obuv/botinki/");
        assert!(menu[1].submenu.is_empty());

        let brands = &menu[2];
        assert_eq!(brands.url.as_deref(), Some("/category/brendy"));
        assert_eq!(brands.submenu.len(), 8);
        assert_eq!(brands.submenu[0].url, "/category/brendy/brand-1/");
    }
}
