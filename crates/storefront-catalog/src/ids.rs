//! Newtype IDs for catalog entities.
//!
//! Categories, products and brands all use string identifiers in the
//! dataset; the newtypes keep a `ProductId` from being passed where a
//! `CategoryId` is expected.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A catalog identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        // Lets index maps keyed by the ID be queried with a plain `&str`.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CategoryId);
define_id!(ProductId);
define_id!(BrandId);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod101");
        assert_eq!(id.as_str(), "prod101");
    }

    #[test]
    fn test_id_from_str() {
        let id: CategoryId = "cat1".into();
        assert_eq!(id.to_string(), "cat1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = BrandId::new("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
        let back: BrandId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(CategoryId::new("cat106"), 3usize);
        assert_eq!(map.get("cat106"), Some(&3));
        assert_eq!(map.get("cat999"), None);
    }
}
