//! Formatted product prices.
//!
//! Prices arrive preformatted for display (e.g. `"14 392 руб."`). Numeric
//! comparisons work on the whole-ruble amount recovered by keeping only the
//! digits of the formatted string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product price as shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Current selling price, always present.
    pub current: String,
    /// Price before markdown, if the product is discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
}

impl Price {
    /// Create a price without a markdown.
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            old: None,
        }
    }

    /// Attach the pre-markdown price.
    pub fn with_old(mut self, old: impl Into<String>) -> Self {
        self.old = Some(old.into());
        self
    }

    /// Numeric current price.
    pub fn current_amount(&self) -> u64 {
        parse_amount(&self.current)
    }

    /// Numeric old price, if any.
    pub fn old_amount(&self) -> Option<u64> {
        self.old.as_deref().map(parse_amount)
    }

    /// Whether the old price exceeds the current one.
    ///
    /// A product without an old price trivially satisfies the markdown
    /// invariant; [`Price::is_consistent`] covers both cases.
    pub fn has_markdown(&self) -> bool {
        self.old_amount()
            .map(|old| old > self.current_amount())
            .unwrap_or(false)
    }

    /// True when there is no old price or the old price is higher.
    pub fn is_consistent(&self) -> bool {
        self.old.is_none() || self.has_markdown()
    }

    /// Amount saved against the old price.
    pub fn savings(&self) -> Option<u64> {
        let current = self.current_amount();
        self.old_amount()
            .filter(|old| *old > current)
            .map(|old| old - current)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.old {
            Some(old) => write!(f, "{} (was {})", self.current, old),
            None => write!(f, "{}", self.current),
        }
    }
}

/// Parse a formatted price by keeping only its ASCII digits.
///
/// Strings without digits, or whose digits overflow `u64`, parse as 0.
pub fn parse_amount(formatted: &str) -> u64 {
    let digits: String = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Format a whole-ruble amount the way the dataset does (`"9 990 руб."`).
pub fn format_rubles(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{} руб.", grouped)
}
