//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A node of the category forest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug, unique among siblings.
    pub slug: String,
    /// Parent category ID (None for root categories).
    pub parent_id: Option<CategoryId>,
    /// Slash-joined slug chain from the root (e.g., "zhenskaya-obuv/botinki").
    pub path: String,
    /// Depth in the hierarchy (0 = root).
    pub level: u32,
    /// Sort order position within parent.
    pub sort_order: i32,
    /// Promotional pseudo-category, left out of default navigation lists.
    #[serde(default)]
    pub is_special: bool,
}

impl Category {
    /// Create a root category.
    pub fn new_root(id: impl Into<CategoryId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: id.into(),
            name: name.into(),
            path: slug.clone(),
            slug,
            parent_id: None,
            level: 0,
            sort_order: 0,
            is_special: false,
        }
    }

    /// Create a child category with its path and level derived from the parent.
    pub fn new_child(
        parent: &Category,
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: id.into(),
            name: name.into(),
            path: format!("{}/{}", parent.path, slug),
            slug,
            parent_id: Some(parent.id.clone()),
            level: parent.level + 1,
            sort_order: 0,
            is_special: false,
        }
    }

    /// Set the sibling sort position.
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Mark as a special (promotional) category.
    pub fn special(mut self) -> Self {
        self.is_special = true;
        self
    }

    /// Check if this is a root category.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this category is a strict ancestor of another.
    pub fn is_ancestor_of(&self, other: &Category) -> bool {
        other
            .path
            .strip_prefix(self.path.as_str())
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
    }

    /// Check if this category is a strict descendant of another.
    pub fn is_descendant_of(&self, other: &Category) -> bool {
        other.is_ancestor_of(self)
    }

    /// Path of the parent category, if any.
    pub fn parent_path(&self) -> Option<&str> {
        self.path.rsplit_once('/').map(|(parent, _)| parent)
    }

    /// Slugs along the path, root first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }
}
