//! Page assembly: routes, listings and search on top of the catalog.

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Brand, Catalog, Category, Product};
use crate::config::StorefrontConfig;
use crate::error::CatalogError;
use crate::navigation::{Breadcrumb, MenuItem, Navigator, RouteKind};
use crate::search::{
    filter_products, filter_sections, paginate, FilterParams, FilterSection, Pagination, SearchParams, SectionId,
};

/// A filtered, sorted and paginated product listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<'a> {
    /// Products of the current page.
    pub products: Vec<&'a Product>,
    pub breadcrumbs: Vec<Breadcrumb>,
    #[serde(flatten)]
    pub pagination: Pagination,
    /// Every product of the listing before filtering.
    #[serde(skip)]
    pub available: Vec<&'a Product>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage<'a> {
    pub category: &'a Category,
    #[serde(flatten)]
    pub listing: Listing<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandPage<'a> {
    /// Directory entry; `None` for an unknown slug.
    pub brand: Option<&'a Brand>,
    /// Brand name, or the raw slug when unknown.
    pub name: String,
    #[serde(flatten)]
    pub listing: Listing<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPage<'a> {
    pub product: &'a Product,
    /// Labels of the active badges.
    pub badges: Vec<String>,
    pub brand: Option<&'a Brand>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandsIndex<'a> {
    pub brands: &'a [Brand],
    pub breadcrumbs: Vec<Breadcrumb>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<'a> {
    pub query: String,
    #[serde(flatten)]
    pub listing: Listing<'a>,
}

/// Everything a catalog URL can render.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView<'a> {
    /// The bare category prefix: root categories.
    CatalogIndex {
        categories: Vec<&'a Category>,
        breadcrumbs: Vec<Breadcrumb>,
    },
    Category(CategoryPage<'a>),
    BrandsIndex(BrandsIndex<'a>),
    Brand(BrandPage<'a>),
    Product(ProductPage<'a>),
    NotFound {
        kind: RouteKind,
        name: String,
        breadcrumbs: Vec<Breadcrumb>,
    },
}

impl PageView<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            PageView::CatalogIndex { .. } => "catalog_index",
            PageView::Category(_) => "category",
            PageView::BrandsIndex(_) => "brands_index",
            PageView::Brand(_) => "brand",
            PageView::Product(_) => "product",
            PageView::NotFound { .. } => "not_found",
        }
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        match self {
            PageView::CatalogIndex { breadcrumbs, .. } | PageView::NotFound { breadcrumbs, .. } => breadcrumbs,
            PageView::Category(page) => &page.listing.breadcrumbs,
            PageView::BrandsIndex(page) => &page.breadcrumbs,
            PageView::Brand(page) => &page.listing.breadcrumbs,
            PageView::Product(page) => &page.breadcrumbs,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageView::NotFound { .. })
    }

    /// The product listing of category and brand pages.
    pub fn listing(&self) -> Option<&Listing<'_>> {
        match self {
            PageView::Category(page) => Some(&page.listing),
            PageView::Brand(page) => Some(&page.listing),
            _ => None,
        }
    }
}

/// The catalog together with its storefront settings.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    config: StorefrontConfig,
}

impl Storefront {
    pub fn new(catalog: Catalog, config: StorefrontConfig) -> Self {
        Self { catalog, config }
    }

    /// The embedded dataset with default settings.
    pub fn embedded() -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::embedded()?, StorefrontConfig::default()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(&self.catalog, &self.config)
    }

    /// Render the page for catalog URL segments and query params.
    pub fn handle<S: AsRef<str>>(&self, segments: &[S], params: &SearchParams) -> PageView<'_> {
        let nav = self.navigator();
        let parts: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
        let kind = nav.classify(&parts[..]);

        let not_found = |name: &str| PageView::NotFound {
            kind,
            name: name.to_string(),
            breadcrumbs: nav.breadcrumbs_for_route(&parts[..], kind),
        };

        match kind {
            RouteKind::Product => match self.product_page(&parts[..]) {
                Some(page) => PageView::Product(page),
                None => not_found(parts.last().copied().unwrap_or_default()),
            },
            RouteKind::Brand => {
                let slug = parts.get(1).copied().unwrap_or_default();
                let page = self.brand_page(slug, params);
                if page.brand.is_none() || page.listing.available.is_empty() {
                    debug!(slug, "brand has no products");
                    not_found(&page.name)
                } else {
                    PageView::Brand(page)
                }
            }
            RouteKind::Category => match parts.as_slice() {
                [] => PageView::CatalogIndex {
                    categories: self.catalog.roots(),
                    breadcrumbs: nav.root_breadcrumbs(),
                },
                [only] if nav.is_brands_segment(only) => PageView::BrandsIndex(self.brands_index()),
                _ => {
                    let path = parts.join("/");
                    match self.category_page(&path, params) {
                        Some(page) => PageView::Category(page),
                        None => not_found(parts.last().copied().unwrap_or_default()),
                    }
                }
            },
        }
    }

    /// Listing of a category; `None` for an unknown path.
    ///
    /// Categories with children list every descendant's products.
    pub fn category_page(&self, path: &str, params: &SearchParams) -> Option<CategoryPage<'_>> {
        let path = path.trim_matches('/');
        let resolution = self.navigator().resolve(path);
        let category = resolution.category?;
        let available = self.catalog.category_products(category);
        debug!(path, available = available.len(), "category listing");

        Some(CategoryPage {
            category,
            listing: self.listing(available, resolution.breadcrumbs, params),
        })
    }

    /// Detail page for the product at `/category/<segments>/`.
    pub fn product_page<S: AsRef<str>>(&self, segments: &[S]) -> Option<ProductPage<'_>> {
        if segments.is_empty() {
            return None;
        }
        let nav = self.navigator();
        let product = self.catalog.product_by_url(&self.config.routes.product_url(segments))?;

        let mut breadcrumbs = nav.product_breadcrumbs(product);
        if breadcrumbs.is_empty() {
            breadcrumbs = nav.breadcrumbs_for_route(segments, RouteKind::Product);
        }

        Some(ProductPage {
            product,
            badges: product.active_badges(),
            brand: self.catalog.brand_of(product),
            breadcrumbs,
        })
    }

    /// Products of a brand, matched by case-insensitive name.
    ///
    /// An unknown slug yields an empty listing named after the slug.
    pub fn brand_page(&self, slug: &str, params: &SearchParams) -> BrandPage<'_> {
        let (brand, breadcrumbs) = self.navigator().brand_breadcrumbs(slug);
        let available: Vec<&Product> = match brand {
            Some(brand) => self.catalog.products().iter().filter(|p| brand.matches(p)).collect(),
            None => Vec::new(),
        };

        BrandPage {
            brand,
            name: brand.map_or_else(|| slug.to_string(), |b| b.name.clone()),
            listing: self.listing(available, breadcrumbs, params),
        }
    }

    pub fn brands_index(&self) -> BrandsIndex<'_> {
        BrandsIndex {
            brands: self.catalog.brands(),
            breadcrumbs: self.navigator().brands_breadcrumbs(),
        }
    }

    /// Site-wide search over every product.
    pub fn search_page(&self, params: &SearchParams) -> SearchPage<'_> {
        let labels = &self.config.labels;
        let query = params.filters.active_query().unwrap_or_default().to_string();

        let mut breadcrumbs = self.navigator().root_breadcrumbs();
        breadcrumbs.push(
            Breadcrumb::current(format!("{}: \"{}\"", labels.search_results, query))
                .with_title(format!("{}: {}", labels.search_title, query)),
        );

        let available: Vec<&Product> = self.catalog.products().iter().collect();
        SearchPage {
            query,
            listing: self.listing(available, breadcrumbs, params),
        }
    }

    /// Search-as-you-type: the first title matches for a non-blank query.
    pub fn suggest(&self, query: &str) -> Vec<&Product> {
        let filters = FilterParams::new().with_query(query);
        if filters.active_query().is_none() {
            return Vec::new();
        }
        filter_products(&filters, self.catalog.products())
            .into_iter()
            .take(self.config.suggestion_limit)
            .collect()
    }

    /// Breadcrumbs for classified route segments.
    pub fn breadcrumbs_for_route<S: AsRef<str>>(&self, segments: &[S], kind: RouteKind) -> Vec<Breadcrumb> {
        self.navigator().breadcrumbs_for_route(segments, kind)
    }

    pub fn category_menu(&self) -> Vec<MenuItem> {
        self.navigator().category_menu()
    }

    /// Filter panel for a listing, counted over its unfiltered products.
    pub fn filter_sections(&self, listing: &Listing<'_>, params: &SearchParams) -> Vec<FilterSection> {
        filter_sections(self.catalog.filter_attributes(), &listing.available, &params.filters)
    }

    /// Filter panel of a rendered page; `None` for pages without a listing.
    ///
    /// Brand pages list a single brand, so their panel has no brand section.
    pub fn page_sections(&self, page: &PageView<'_>, params: &SearchParams) -> Option<Vec<FilterSection>> {
        let mut sections = self.filter_sections(page.listing()?, params);
        if matches!(page, PageView::Brand(_)) {
            sections.retain(|section| section.id != SectionId::Brand);
        }
        Some(sections)
    }

    fn listing<'a>(
        &'a self,
        available: Vec<&'a Product>,
        breadcrumbs: Vec<Breadcrumb>,
        params: &SearchParams,
    ) -> Listing<'a> {
        let mut products = filter_products(&params.filters, available.iter().copied());
        params.sort.apply(&mut products);

        let mut page = params.page;
        let requested = Pagination::new(page, self.config.page_size, products.len());
        if requested.is_out_of_range() {
            debug!(requested = page, total_pages = requested.total_pages, "page out of range, resetting to 1");
            page = 1;
        }
        let page = paginate(products, page, self.config.page_size);

        debug!(
            available = available.len(),
            matched = page.pagination.total,
            page = page.pagination.current_page,
            "listing built"
        );

        Listing {
            products: page.items,
            breadcrumbs,
            pagination: page.pagination,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Badge, CatalogData, ProductCategoryLink};
    use crate::config::RouteSettings;
    use crate::price::Price;

    fn storefront() -> Storefront {
        let women = Category::new_root("cat1", "Женская обувь", "zhenskaya-obuv");
        let boots = Category::new_child(&women, "cat106", "Ботинки", "botinki");
        let mut products: Vec<Product> = (1..=12)
            .map(|n| {
                let mut p = Product::new(
                    format!("prod{}", n),
                    format!("Ботинки {}", n),
                    format!("/category/zhenskaya-obuv/botinki_{}/", n),
                    Price::new(format!("{} 000 руб.", n)),
                );
                p.brand = if n % 2 == 0 { "ARA" } else { "Rieker" }.to_string();
                p
            })
            .collect();
        products[0].badges.is_new = Badge::new(true, "NEW");
        let links = products.iter().map(|p| ProductCategoryLink::new(p.id.clone(), "cat106")).collect();
        let routes = RouteSettings::default();

        let catalog = Catalog::new(CatalogData {
            categories: vec![women, boots],
            products,
            brands: vec![Brand::new("1", "Ara", "ara", &routes), Brand::new("2", "Tamaris", "tamaris", &routes)],
            product_categories: links,
            ..Default::default()
        })
        .unwrap();
        Storefront::new(catalog, StorefrontConfig::default())
    }

    #[test]
    fn test_category_page_includes_children() {
        let store = storefront();
        let page = store.category_page("zhenskaya-obuv", &SearchParams::default()).unwrap();
        assert_eq!(page.listing.available.len(), 12);
        assert_eq!(page.listing.products.len(), 9);
        assert_eq!(page.listing.pagination.total_pages, 2);
        assert!(store.category_page("nope", &SearchParams::default()).is_none());
    }

    #[test]
    fn test_page_reset_when_out_of_range() {
        let store = storefront();
        let params = SearchParams::from_query_string("pag=2&brands=ARA");
        let page = store.category_page("zhenskaya-obuv/botinki", &params).unwrap();
        assert_eq!(page.listing.pagination.total, 6);
        assert_eq!(page.listing.pagination.current_page, 1);
        assert_eq!(page.listing.products.len(), 6);
    }

    #[test]
    fn test_sorted_listing() {
        let store = storefront();
        let params = SearchParams::default().with_sort(crate::search::SortOrder::PriceDesc);
        let page = store.category_page("zhenskaya-obuv", &params).unwrap();
        assert_eq!(page.listing.products[0].id.as_str(), "prod12");
    }

    #[test]
    fn test_brand_pages() {
        let store = storefront();
        let page = store.brand_page("ara", &SearchParams::default());
        assert_eq!(page.name, "Ara");
        assert_eq!(page.listing.available.len(), 6);

        let unknown = store.brand_page("nobody", &SearchParams::default());
        assert!(unknown.brand.is_none());
        assert_eq!(unknown.name, "nobody");
        assert!(unknown.listing.products.is_empty());
        assert_eq!(unknown.listing.breadcrumbs.last().unwrap().label, "nobody");
    }

    #[test]
    fn test_handle_dispatch() {
        let store = storefront();
        let params = SearchParams::default();
        let empty: [&str; 0] = [];

        assert_eq!(store.handle(&empty, &params).name(), "catalog_index");
        assert_eq!(store.handle(&["brendy"], &params).name(), "brands_index");
        assert_eq!(store.handle(&["brendy", "ara"], &params).name(), "brand");
        assert_eq!(store.handle(&["zhenskaya-obuv", "botinki_3"], &params).name(), "product");
        assert_eq!(store.handle(&["zhenskaya-obuv"], &params).name(), "category");

        match store.handle(&["brendy", "tamaris"], &params) {
            PageView::NotFound { kind, name, breadcrumbs } => {
                assert_eq!(kind, RouteKind::Brand);
                assert_eq!(name, "Tamaris");
                assert_eq!(breadcrumbs.len(), 4);
            }
            other => panic!("expected not found, got {}", other.name()),
        }

        let missing = store.handle(&["zhenskaya-obuv", "sapogi"], &params);
        assert!(missing.is_not_found());
        assert_eq!(missing.breadcrumbs().last().unwrap().label, "sapogi");
    }

    #[test]
    fn test_product_page() {
        let store = storefront();
        let page = store.product_page(&["zhenskaya-obuv", "botinki_1"]).unwrap();
        assert_eq!(page.badges, vec!["NEW"]);
        assert!(page.brand.is_none());
        assert_eq!(page.breadcrumbs.last().unwrap().label, "Ботинки");
        assert!(store.product_page(&["zhenskaya-obuv", "botinki_99"]).is_none());
    }

    #[test]
    fn test_search_page() {
        let store = storefront();
        let page = store.search_page(&SearchParams::from_query_string("q=%D0%91%D0%BE%D1%82%D0%B8%D0%BD%D0%BA%D0%B8+1"));
        assert_eq!(page.query, "Ботинки 1");
        assert_eq!(page.listing.pagination.total, 4);

        let last = page.listing.breadcrumbs.last().unwrap();
        assert!(last.is_current);
        assert!(last.href.is_none());
        assert_eq!(last.label, "Результаты поиска: \"Ботинки 1\"");
        assert_eq!(last.title.as_deref(), Some("Поиск: Ботинки 1"));
    }

    #[test]
    fn test_suggest() {
        let store = storefront();
        assert!(store.suggest("  ").is_empty());
        assert_eq!(store.suggest("ботинки").len(), 5);
        assert_eq!(store.suggest("ботинки 12").len(), 1);
    }

    #[test]
    fn test_filter_sections_use_unfiltered_listing() {
        let store = storefront();
        let params = SearchParams::from_query_string("isNew=true");
        let page = store.category_page("zhenskaya-obuv", &params).unwrap();
        assert_eq!(page.listing.products.len(), 1);

        let sections = store.filter_sections(&page.listing, &params);
        let price = sections.iter().find(|s| s.id == SectionId::Price).unwrap();
        assert_eq!(price.price_range.unwrap().max, 12_000);
    }

    #[test]
    fn test_brand_page_has_no_brand_section() {
        let store = storefront();
        let params = SearchParams::default();

        let brand = store.handle(&["brendy", "ara"], &params);
        let sections = store.page_sections(&brand, &params).unwrap();
        let ids: Vec<_> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SectionId::Special, SectionId::Price, SectionId::Size, SectionId::Color]);

        let category = store.handle(&["zhenskaya-obuv"], &params);
        let sections = store.page_sections(&category, &params).unwrap();
        assert!(sections.iter().any(|s| s.id == SectionId::Brand));

        assert!(store.page_sections(&store.handle(&["brendy"], &params), &params).is_none());
    }

    #[test]
    fn test_huge_page_on_empty_listing() {
        let store = storefront();

        let search = store.search_page(&SearchParams::from_query_string("q=zzzz&pag=18446744073709551615"));
        assert!(search.listing.products.is_empty());
        assert_eq!(search.listing.pagination.total_pages, 0);

        let params = SearchParams::from_query_string("brands=NOPE&pag=3000000000000000000");
        let page = store.handle(&["zhenskaya-obuv"], &params);
        let listing = page.listing().unwrap();
        assert!(listing.products.is_empty());
        assert_eq!(listing.pagination.start_item(), 0);
    }

    #[test]
    fn test_huge_page_resets_on_non_empty_listing() {
        let store = storefront();
        let params = SearchParams::from_query_string("pag=18446744073709551615");
        let page = store.category_page("zhenskaya-obuv", &params).unwrap();
        assert_eq!(page.listing.pagination.current_page, 1);
        assert_eq!(page.listing.products.len(), 9);
    }
}
