//! Product types.

use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier, the join key to categories.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Canonical detail path (e.g., "/category/zhenskaya-obuv/botinki_zhenskie_prod101/").
    pub url: String,
    /// Image URL.
    pub image: String,
    /// Alt text for the image.
    pub alt: String,
    /// Display price.
    pub price: Price,
    /// Brand name as free text.
    pub brand: String,
    /// Merchandising badges.
    pub badges: Badges,
    /// Available colors.
    pub color: ColorSet,
    /// Available sizes.
    pub sizes: Vec<u32>,
    /// Discount marker.
    pub is_discount: Discount,
}

impl Product {
    /// Create a product with no badges, colors, sizes or discount.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, url: impl Into<String>, price: Price) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            alt: title.clone(),
            title,
            url: url.into(),
            image: String::new(),
            price,
            brand: String::new(),
            badges: Badges::default(),
            color: ColorSet::default(),
            sizes: Vec::new(),
            is_discount: Discount::default(),
        }
    }

    /// Numeric current price.
    pub fn current_price(&self) -> u64 {
        self.price.current_amount()
    }

    /// Check whether the "new" badge is active.
    pub fn is_new(&self) -> bool {
        self.badges.is_new.state
    }

    /// Check whether the "hit" badge is active.
    pub fn is_hit(&self) -> bool {
        self.badges.hit.state
    }

    /// Check whether the product is discounted.
    pub fn on_sale(&self) -> bool {
        self.is_discount.active
    }

    /// Check if the product comes in the given size.
    pub fn has_size(&self, size: u32) -> bool {
        self.sizes.contains(&size)
    }

    /// Labels of every active badge, discount last (e.g., `["NEW", "-20%"]`).
    pub fn active_badges(&self) -> Vec<String> {
        let mut badges = Vec::new();
        if self.badges.is_new.state {
            badges.push(self.badges.is_new.label.clone());
        }
        if self.badges.hit.state {
            badges.push(self.badges.hit.label.clone());
        }
        if self.is_discount.active {
            badges.push(format!("-{}%", self.is_discount.percent));
        }
        badges
    }
}

/// The pair of merchandising badges a product can carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Badges {
    /// "New arrival" badge.
    pub is_new: Badge,
    /// "Best seller" badge.
    pub hit: Badge,
}

/// A single badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Badge {
    /// Whether the badge is shown.
    pub state: bool,
    /// Badge text.
    pub label: String,
}

impl Badge {
    pub fn new(state: bool, label: impl Into<String>) -> Self {
        Self {
            state,
            label: label.into(),
        }
    }
}

/// Color availability of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ColorSet {
    /// Single-color product; only the first entry counts.
    pub is_one: bool,
    /// Color ids in display order.
    pub value: Vec<String>,
}

impl ColorSet {
    /// A single-color set.
    pub fn one(color: impl Into<String>) -> Self {
        Self {
            is_one: true,
            value: vec![color.into()],
        }
    }

    /// A multi-color set.
    pub fn many<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_one: false,
            value: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Colors that count for filtering.
    pub fn effective(&self) -> &[String] {
        if self.is_one {
            &self.value[..self.value.len().min(1)]
        } else {
            &self.value
        }
    }

    /// Check if the color id is part of the effective set.
    pub fn contains(&self, color: &str) -> bool {
        self.effective().iter().any(|c| c == color)
    }
}

/// Discount marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Discount {
    /// Whether the discount applies.
    pub active: bool,
    /// Discount percentage for display.
    pub percent: u32,
}
