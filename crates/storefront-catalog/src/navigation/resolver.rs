//! Path resolution and breadcrumb chains.

use crate::catalog::{Brand, Catalog, Category, Product};
use crate::config::StorefrontConfig;
use crate::navigation::{Breadcrumb, RouteKind, SubcategoryLinks};

/// A category path resolved against the catalog.
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    /// The category at the full path, if it exists.
    pub category: Option<&'a Category>,
    /// Root-to-leaf breadcrumbs for every segment of the path.
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Read-only view pairing the catalog with the URL and label settings.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) config: &'a StorefrontConfig,
}

impl<'a> Navigator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a StorefrontConfig) -> Self {
        Self { catalog, config }
    }

    /// Home and Categories, the prefix of every trail.
    pub fn root_breadcrumbs(&self) -> Vec<Breadcrumb> {
        let labels = &self.config.labels;
        vec![
            Breadcrumb::link(&labels.home, &labels.home_href),
            Breadcrumb::link(&labels.categories, &self.config.routes.category_prefix),
        ]
    }

    /// Home, Categories and the brand index.
    pub fn brands_breadcrumbs(&self) -> Vec<Breadcrumb> {
        let mut crumbs = self.root_breadcrumbs();
        crumbs.push(Breadcrumb::link(&self.config.labels.brands, self.config.routes.brands_href()));
        crumbs
    }

    /// Resolve a slash-joined category path.
    pub fn resolve(&self, path: &str) -> Resolution<'a> {
        Resolution {
            category: self.catalog.category_by_path(path.trim_matches('/')),
            breadcrumbs: self.breadcrumbs_for_path(path),
        }
    }

    /// Breadcrumbs for every prefix of `path`.
    ///
    /// Known prefixes use the category name and carry quick links to the
    /// category's children. Unknown segments are shown verbatim.
    pub fn breadcrumbs_for_path(&self, path: &str) -> Vec<Breadcrumb> {
        let routes = &self.config.routes;
        let mut crumbs = self.root_breadcrumbs();
        let mut current = String::new();

        for segment in path.split('/').filter(|s| !s.trim().is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);

            let crumb = match self.catalog.category_by_path(&current) {
                Some(category) => {
                    let mut links = SubcategoryLinks::new();
                    for child in self.catalog.subcategories(category.id.as_str()) {
                        links.insert(
                            child.slug.clone(),
                            Breadcrumb::link(&child.name, routes.category_href(&child.path))
                                .with_title(&child.name)
                                .with_special(child.is_special),
                        );
                    }
                    Breadcrumb::link(&category.name, routes.category_href(&current))
                        .with_title(&category.name)
                        .with_subcategories(links)
                }
                None => Breadcrumb::link(segment, routes.category_href(&current)).with_title(segment),
            };
            crumbs.push(crumb);
        }

        crumbs
    }

    /// Breadcrumbs of a product: those of its first linked category.
    ///
    /// Empty when the product is not linked to any category.
    pub fn product_breadcrumbs(&self, product: &Product) -> Vec<Breadcrumb> {
        self.catalog
            .product_categories(product.id.as_str())
            .first()
            .map(|main| self.breadcrumbs_for_path(&main.path))
            .unwrap_or_default()
    }

    /// The brand for a slug and its breadcrumbs.
    ///
    /// An unknown slug still gets a trail ending in the raw slug.
    pub fn brand_breadcrumbs(&self, slug: &str) -> (Option<&'a Brand>, Vec<Breadcrumb>) {
        let brand = self.catalog.brand_by_slug(slug);
        let href = self.config.routes.brand_href(slug);
        let mut crumbs = self.brands_breadcrumbs();
        crumbs.push(match brand {
            Some(brand) => Breadcrumb::link(&brand.name, href).with_title(&brand.name),
            None => Breadcrumb::link(slug, href),
        });
        (brand, crumbs)
    }

    /// Breadcrumbs for a classified route, with fallbacks for misses.
    pub fn breadcrumbs_for_route<S: AsRef<str>>(&self, segments: &[S], kind: RouteKind) -> Vec<Breadcrumb> {
        let parts: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
        let joined = parts.join("/");

        match kind {
            RouteKind::Brand => match parts.get(1) {
                Some(slug) => self.brand_breadcrumbs(slug).1,
                None => self.root_breadcrumbs(),
            },
            RouteKind::Product => {
                let crumbs = self
                    .catalog
                    .product_by_url(&self.config.routes.product_url(&parts))
                    .map(|product| self.product_breadcrumbs(product))
                    .unwrap_or_default();
                if !crumbs.is_empty() {
                    return crumbs;
                }
                let mut crumbs = self.root_breadcrumbs();
                crumbs.push(Breadcrumb::link(
                    &self.config.labels.product_fallback,
                    self.config.routes.category_href(&joined),
                ));
                crumbs
            }
            RouteKind::Category => {
                if parts.len() == 1 && self.is_brands_segment(parts[0]) {
                    self.brands_breadcrumbs()
                } else {
                    self.breadcrumbs_for_path(&joined)
                }
            }
        }
    }

    pub(crate) fn is_brands_segment(&self, segment: &str) -> bool {
        segment == self.config.routes.brands_segment
    }
}
