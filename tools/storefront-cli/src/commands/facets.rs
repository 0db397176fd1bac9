//! Filter panel of a category.

use anyhow::{bail, Result};
use console::style;
use storefront_catalog::price::format_rubles;
use storefront_catalog::search::{FilterSection, SearchParams};

use super::FacetsArgs;
use crate::context::Context;

/// Run the facets command.
pub fn run(args: FacetsArgs, ctx: &Context) -> Result<()> {
    let store = &ctx.storefront;
    let params = SearchParams::from_query_string(args.filter.as_deref().unwrap_or_default());

    let Some(page) = store.category_page(&args.path, &params) else {
        bail!("Category not found: {}", args.path);
    };
    let sections = store.filter_sections(&page.listing, &params);

    if ctx.output.is_json() {
        ctx.output.json(&sections);
        return Ok(());
    }

    ctx.output.breadcrumbs(&page.listing.breadcrumbs);
    print_sections(ctx, &sections);
    Ok(())
}

pub(crate) fn print_sections(ctx: &Context, sections: &[FilterSection]) {
    for section in sections {
        ctx.output.header(&section.title);
        if let Some(range) = section.price_range {
            ctx.output.kv("range", &format!("{} - {}", format_rubles(range.min), format_rubles(range.max)));
        }
        for option in &section.options {
            let mark = if option.selected { "[x]" } else { "[ ]" };
            let line = format!("{} {} ({})", mark, option.label, option.count);
            if option.count == 0 {
                ctx.output.list_item(&style(line).dim().to_string());
            } else {
                ctx.output.list_item(&line);
            }
        }
    }
}
