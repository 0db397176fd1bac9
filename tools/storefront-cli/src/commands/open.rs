//! Render the page behind a catalog URL.

use anyhow::Result;
use storefront_catalog::navigation::RoutePath;
use storefront_catalog::price::format_rubles;
use storefront_catalog::search::SearchParams;
use storefront_catalog::storefront::{Listing, PageView};

use super::OpenArgs;
use crate::context::Context;

/// Run the open command.
pub fn run(args: OpenArgs, ctx: &Context) -> Result<()> {
    let store = &ctx.storefront;
    let route = RoutePath::parse(&args.url, &store.config().routes);
    let params = SearchParams::from_query_string(route.query.as_deref().unwrap_or_default());
    let page = store.handle(&route.segments, &params);

    if ctx.output.is_json() {
        if args.facets {
            let facets = store.page_sections(&page, &params);
            ctx.output.json(&serde_json::json!({ "view": page, "facets": facets }));
        } else {
            ctx.output.json(&page);
        }
        return Ok(());
    }

    ctx.output.breadcrumbs(page.breadcrumbs());

    match &page {
        PageView::CatalogIndex { categories, .. } => {
            ctx.output.header("Categories");
            for category in categories {
                ctx.output.list_item(&format!("{} ({})", category.name, category.path));
            }
        }
        PageView::Category(page) => {
            ctx.output.header(&page.category.name);
            print_listing(ctx, &page.listing);
        }
        PageView::BrandsIndex(index) => {
            ctx.output.header("Brands");
            for brand in index.brands {
                ctx.output.list_item(&format!("{} ({})", brand.name, brand.url));
            }
        }
        PageView::Brand(page) => {
            ctx.output.header(&page.name);
            print_listing(ctx, &page.listing);
        }
        PageView::Product(page) => {
            let product = page.product;
            ctx.output.header(&product.title);
            ctx.output.kv("id", product.id.as_str());
            ctx.output.kv("brand", &product.brand);
            ctx.output.kv("price", &product.price.to_string());
            if let Some(savings) = product.price.savings() {
                ctx.output.kv("savings", &format_rubles(savings));
            }
            if !page.badges.is_empty() {
                ctx.output.kv("badges", &page.badges.join(" "));
            }
            if !product.sizes.is_empty() {
                let sizes: Vec<String> = product.sizes.iter().map(u32::to_string).collect();
                ctx.output.kv("sizes", &sizes.join(", "));
            }
            ctx.output.kv("colors", &product.color.effective().join(", "));
            ctx.output.kv("url", &product.url);
        }
        PageView::NotFound { kind, name, .. } => {
            ctx.output.warn(&format!("{} not found: {}", kind, name));
        }
    }

    if args.facets {
        if let Some(sections) = store.page_sections(&page, &params) {
            super::facets::print_sections(ctx, &sections);
        }
    }

    Ok(())
}

pub(crate) fn print_listing(ctx: &Context, listing: &Listing<'_>) {
    ctx.output.products(&listing.products);
    ctx.output.pagination(&listing.pagination);
}
