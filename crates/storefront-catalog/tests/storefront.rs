//! End-to-end checks against the embedded dataset.

use std::collections::HashSet;

use storefront_catalog::prelude::*;
use storefront_catalog::search::{filter_products, paginate};

fn store() -> Storefront {
    Storefront::embedded().expect("embedded catalog loads")
}

#[test]
fn every_category_path_resolves_to_itself() {
    let store = store();
    let nav = store.navigator();
    for category in store.catalog().categories() {
        let resolution = nav.resolve(&category.path);
        assert_eq!(resolution.category.map(|c| &c.id), Some(&category.id), "path {}", category.path);
        assert_eq!(resolution.breadcrumbs.len(), 2 + category.level as usize + 1);
    }
}

#[test]
fn linked_products_appear_under_every_ancestor() {
    let store = store();
    let catalog = store.catalog();

    for link in catalog.links() {
        let mut current = catalog.category_by_id(link.category_id.as_str());
        while let Some(category) = current {
            let products = catalog.products_for_category(&category.path, true);
            assert!(
                products.iter().any(|p| p.id == link.product_id),
                "{} missing under {}",
                link.product_id,
                category.path
            );
            current = category
                .parent_id
                .as_ref()
                .and_then(|parent| catalog.category_by_id(parent.as_str()));
        }
    }
}

#[test]
fn category_listing_has_no_duplicates() {
    let store = store();
    let products = store.catalog().products_for_category("zhenskaya-obuv", true);
    let unique: HashSet<_> = products.iter().map(|p| &p.id).collect();
    assert_eq!(unique.len(), products.len());
    assert!(!products.is_empty());
}

#[test]
fn root_descendants_are_unique() {
    let store = store();
    let ids = store.catalog().descendant_ids("cat1");
    assert_eq!(ids.len(), 20);
    assert_eq!(ids[0].as_str(), "cat1");
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 20);
}

#[test]
fn empty_filter_is_identity() {
    let store = store();
    let all: Vec<&Product> = store.catalog().products().iter().collect();
    let filtered = filter_products(&FilterParams::new(), all.iter().copied());
    assert_eq!(filtered, all);
}

#[test]
fn equal_price_bounds_select_exact_price() {
    let store = store();
    let products = store.catalog().products();
    let target = products[0].current_price();

    let filters = FilterParams::new().with_price_range(Some(target), Some(target));
    let found = filter_products(&filters, products);
    assert!(!found.is_empty());
    assert!(found.iter().all(|p| p.current_price() == target));
}

#[test]
fn first_page_is_first_nine() {
    let store = store();
    let all: Vec<&Product> = store.catalog().products().iter().collect();
    let page = paginate(all.clone(), 1, 9);

    assert_eq!(page.items, all[..9].to_vec());
    assert_eq!(page.pagination.total_pages, all.len().div_ceil(9));
}

#[test]
fn route_classification() {
    let store = store();
    let nav = store.navigator();
    let empty: [&str; 0] = [];

    assert_eq!(nav.classify(&empty), RouteKind::Category);
    assert_eq!(nav.classify(&["brendy"]), RouteKind::Category);
    assert_eq!(nav.classify(&["brendy", "ara"]), RouteKind::Brand);
    assert_eq!(
        nav.classify(&["zhenskaya-obuv", "botinki_zhenskie_prod101"]),
        RouteKind::Product
    );
}

#[test]
fn brand_and_new_flag_pick_single_product() {
    let store = store();
    let catalog = store.catalog();
    let ara = catalog.product_by_id("prod101").expect("prod101 exists");
    assert_eq!(ara.brand, "ARA");
    assert_eq!(ara.price.current, "14 392 руб.");
    assert!(ara.is_new());

    let others = catalog.products().iter().filter(|p| p.brand != "ARA").take(2);
    let list: Vec<&Product> = std::iter::once(ara).chain(others).collect();
    assert_eq!(list.len(), 3);

    let params = SearchParams::from_query_string("brands=ARA&isNew=true");
    let found = filter_products(&params.filters, list.iter().copied());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id.as_str(), "prod101");
}

#[test]
fn product_url_renders_product_page() {
    let store = store();
    let route = RoutePath::parse(
        "/category/zhenskaya-obuv/botinki_zhenskie_prod101/",
        &store.config().routes,
    );
    let page = store.handle(&route.segments, &SearchParams::default());

    match page {
        PageView::Product(page) => {
            assert_eq!(page.product.id.as_str(), "prod101");
            assert!(page.badges.contains(&"NEW".to_string()));
            assert_eq!(page.breadcrumbs[0].label, "Главная");
            assert!(page.breadcrumbs.len() > 2);
        }
        other => panic!("expected product page, got {}", other.name()),
    }
}

#[test]
fn category_url_with_query_paginates() {
    let store = store();
    let route = RoutePath::parse("/category/zhenskaya-obuv/?pag=99", &store.config().routes);
    let params = SearchParams::from_query_string(route.query.as_deref().unwrap_or_default());
    let page = store.handle(&route.segments, &params);

    match page {
        PageView::Category(page) => {
            assert_eq!(page.category.id.as_str(), "cat1");
            assert_eq!(page.listing.pagination.current_page, 1);
            assert!(page.listing.products.len() <= 9);
        }
        other => panic!("expected category page, got {}", other.name()),
    }
}

#[test]
fn menu_lists_roots_then_brands() {
    let store = store();
    let menu = store.category_menu();
    let brands = menu.last().expect("menu is not empty");
    assert_eq!(brands.id, "brands");
    assert_eq!(brands.submenu.len(), 8);
    assert_eq!(menu.len(), store.catalog().roots().len() + 1);
    assert!(menu.iter().flat_map(|item| &item.submenu).all(|sub| !sub.is_special));
}

#[test]
fn page_view_serializes_with_tag() {
    let store = store();
    let empty: [&str; 0] = [];
    let page = store.handle(&empty, &SearchParams::default());
    let json = serde_json::to_value(&page).expect("page serializes");
    assert_eq!(json["page"], "catalog_index");
    assert_eq!(json["breadcrumbs"][0]["href"], "/");
}
