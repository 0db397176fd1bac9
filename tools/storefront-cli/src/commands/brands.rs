//! Brand directory listing.

use anyhow::Result;

use crate::context::Context;

/// Run the brands command.
pub fn run(ctx: &Context) -> Result<()> {
    let index = ctx.storefront.brands_index();

    if ctx.output.is_json() {
        ctx.output.json(&index);
        return Ok(());
    }

    ctx.output.breadcrumbs(&index.breadcrumbs);
    ctx.output.header(&format!("Brands ({})", index.brands.len()));

    let catalog = ctx.storefront.catalog();
    for brand in index.brands {
        let count = catalog.products().iter().filter(|p| brand.matches(p)).count();
        let count = count.to_string();
        ctx.output.table_row(&[&brand.slug, &brand.name, &count], &[16, 20, 4]);
    }
    Ok(())
}
