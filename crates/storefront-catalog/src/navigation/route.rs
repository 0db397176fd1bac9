//! Route classification and URL path parsing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RouteSettings;
use crate::navigation::Navigator;

/// Page intent of a catalog URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    Category,
    Brand,
    Product,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Category => "category",
            RouteKind::Brand => "brand",
            RouteKind::Product => "product",
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Navigator<'_> {
    /// Decide whether `segments` name a product, a brand or a category.
    ///
    /// The brands token is checked before the product index, so
    /// `brendy/<slug>` is always a brand page.
    pub fn classify<S: AsRef<str>>(&self, segments: &[S]) -> RouteKind {
        let kind = match segments.first().map(AsRef::as_ref) {
            None => RouteKind::Category,
            Some(first) if self.is_brands_segment(first) => {
                if segments.len() > 1 {
                    RouteKind::Brand
                } else {
                    RouteKind::Category
                }
            }
            Some(_) => {
                let url = self.config.routes.product_url(segments);
                if self.catalog.product_by_url(&url).is_some() {
                    RouteKind::Product
                } else {
                    RouteKind::Category
                }
            }
        };
        debug!(segments = segments.len(), kind = kind.as_str(), "route classified");
        kind
    }
}

/// A catalog URL split into path segments and the raw query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutePath {
    pub segments: Vec<String>,
    pub query: Option<String>,
}

impl RoutePath {
    /// Split a URL such as `/category/zhenskaya-obuv/botinki/?pag=2`.
    ///
    /// The category prefix is optional; empty segments are dropped and a
    /// `#fragment` is ignored.
    pub fn parse(url: &str, routes: &RouteSettings) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (url, None),
        };

        let prefix = routes.category_prefix.trim_end_matches('/');
        let path = match path.strip_prefix(prefix) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        };

        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            segments,
            query: query.filter(|q| !q.is_empty()),
        }
    }

    /// Slash-joined segments, the category path form.
    pub fn joined(&self) -> String {
        self.segments.join("/")
    }
}
