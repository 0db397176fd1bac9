//! Search-as-you-type suggestions.

use anyhow::Result;

use super::SuggestArgs;
use crate::context::Context;

/// Run the suggest command.
pub fn run(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let suggestions = ctx.storefront.suggest(&args.query);

    if ctx.output.is_json() {
        ctx.output.json(&suggestions);
        return Ok(());
    }

    if suggestions.is_empty() {
        ctx.output.info("No suggestions.");
        return Ok(());
    }
    for product in suggestions {
        ctx.output.list_item(&format!("{}  {}", product.title, product.url));
    }
    Ok(())
}
