//! Site-wide product search.

use anyhow::Result;
use storefront_catalog::search::{SearchParams, SortOrder};

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut params = SearchParams::from_query_string(args.filter.as_deref().unwrap_or_default());
    params.filters.query = Some(args.query);
    params.page = args.page.max(1);
    if let Some(sort) = args.sort.as_deref() {
        params.sort = SortOrder::parse(sort);
    }

    let page = ctx.storefront.search_page(&params);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.breadcrumbs(&page.listing.breadcrumbs);
    ctx.output.header(&format!("Search: {}", page.query));
    if params.sort != SortOrder::Default {
        ctx.output.kv("sort", params.sort.display_name());
    }
    super::open::print_listing(ctx, &page.listing);
    Ok(())
}
