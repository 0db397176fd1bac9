//! Navigation module.
//!
//! Path resolution, breadcrumb chains, route classification and the
//! category menu, all computed from a [`Catalog`](crate::catalog::Catalog).

mod breadcrumb;
mod menu;
mod resolver;
mod route;

pub use breadcrumb::{Breadcrumb, SubcategoryLinks};
pub use menu::{MenuItem, SubMenuItem};
pub use resolver::{Navigator, Resolution};
pub use route::{RouteKind, RoutePath};
