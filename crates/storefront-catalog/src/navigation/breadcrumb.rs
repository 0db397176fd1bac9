//! Breadcrumb trail entries.

use serde::{Serialize, Serializer};

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Text shown for the crumb.
    pub label: String,
    /// Link target; `None` renders a non-navigable crumb.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Tooltip text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Quick links to the direct children of the crumb's category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<SubcategoryLinks>,
    /// Promotional styling.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub special: bool,
    /// Terminal crumb of the trail.
    #[serde(rename = "isCurrent", skip_serializing_if = "std::ops::Not::not")]
    pub is_current: bool,
}

impl Breadcrumb {
    /// A navigable crumb.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            title: None,
            subcategories: None,
            special: false,
            is_current: false,
        }
    }

    /// A non-navigable crumb marking the current page.
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            title: None,
            subcategories: None,
            special: false,
            is_current: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach child quick links; an empty set leaves the crumb without any.
    pub fn with_subcategories(mut self, links: SubcategoryLinks) -> Self {
        self.subcategories = (!links.is_empty()).then_some(links);
        self
    }

    pub fn with_special(mut self, special: bool) -> Self {
        self.special = special;
        self
    }

    /// Check if the crumb links anywhere.
    pub fn is_navigable(&self) -> bool {
        self.href.is_some()
    }
}

/// Child crumbs keyed by slug, in sibling sort order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubcategoryLinks(Vec<(String, Breadcrumb)>);

impl SubcategoryLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child crumb, replacing an earlier one with the same slug.
    pub fn insert(&mut self, slug: impl Into<String>, crumb: Breadcrumb) {
        let slug = slug.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == slug) {
            Some(entry) => entry.1 = crumb,
            None => self.0.push((slug, crumb)),
        }
    }

    pub fn get(&self, slug: &str) -> Option<&Breadcrumb> {
        self.0
            .iter()
            .find(|(existing, _)| existing == slug)
            .map(|(_, crumb)| crumb)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Breadcrumb)> {
        self.0.iter().map(|(slug, crumb)| (slug.as_str(), crumb))
    }

    /// Children that default quick-link rows show (special ones skipped).
    pub fn regular(&self) -> impl Iterator<Item = (&str, &Breadcrumb)> {
        self.iter().filter(|(_, crumb)| !crumb.special)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SubcategoryLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
