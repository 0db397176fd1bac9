//! Search, filtering and pagination module.

mod facets;
mod filter;
mod params;
mod results;

pub use facets::{filter_sections, FilterOption, FilterSection, OptionKind, PriceRange, SectionId};
pub use filter::{filter_products, parse_size};
pub use params::{normalize_flag, FilterParams, SearchParams, SortOrder};
pub use results::{paginate, Page, Pagination};
