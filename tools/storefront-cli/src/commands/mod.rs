//! CLI command implementations.

pub mod brands;
pub mod facets;
pub mod menu;
pub mod open;
pub mod search;
pub mod suggest;

use clap::Args;

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Catalog URL (e.g. "/category/zhenskaya-obuv/botinki/?isNew=true").
    pub url: String,

    /// Also print the filter panel of listing pages.
    #[arg(short, long)]
    pub facets: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in product titles.
    pub query: String,

    /// Page to show.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Sort order (price_asc, price_desc, title).
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Extra filters as a query string (e.g. "brands=ARA&onSale=true").
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Partial search text.
    pub query: String,
}

/// Arguments for the facets command.
#[derive(Args)]
pub struct FacetsArgs {
    /// Category path (e.g. "zhenskaya-obuv/botinki").
    pub path: String,

    /// Active filters as a query string.
    #[arg(short, long)]
    pub filter: Option<String>,
}
