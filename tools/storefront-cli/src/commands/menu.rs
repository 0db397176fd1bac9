//! Header category menu.

use anyhow::Result;

use crate::context::Context;

/// Run the menu command.
pub fn run(ctx: &Context) -> Result<()> {
    let menu = ctx.storefront.category_menu();

    if ctx.output.is_json() {
        ctx.output.json(&menu);
        return Ok(());
    }

    for item in &menu {
        ctx.output.header(&item.title);
        if let Some(url) = &item.url {
            ctx.output.kv("url", url);
        }
        for sub in &item.submenu {
            ctx.output.list_item(&format!("{}  {}", sub.title, sub.url));
        }
    }
    Ok(())
}
