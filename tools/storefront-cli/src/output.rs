//! Output formatting for the CLI.

use console::style;
use storefront_catalog::catalog::Product;
use storefront_catalog::navigation::Breadcrumb;
use storefront_catalog::search::Pagination;

/// Page numbers shown around the current page.
const PAGER_WIDTH: usize = 5;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a breadcrumb trail on one line.
    pub fn breadcrumbs(&self, crumbs: &[Breadcrumb]) {
        if self.json || crumbs.is_empty() {
            return;
        }
        let trail: Vec<String> = crumbs
            .iter()
            .map(|crumb| {
                if crumb.is_current {
                    style(&crumb.label).bold().to_string()
                } else {
                    crumb.label.clone()
                }
            })
            .collect();
        println!("{}", trail.join(&style(" › ").dim().to_string()));

        if let Some(links) = crumbs.last().and_then(|crumb| crumb.subcategories.as_ref()) {
            let names: Vec<&str> = links.regular().map(|(_, crumb)| crumb.label.as_str()).collect();
            if !names.is_empty() {
                println!("  {} {}", style("↳").dim(), names.join(", "));
            }
        }
    }

    /// Print a page of products as a table.
    pub fn products(&self, products: &[&Product]) {
        if self.json {
            return;
        }
        if products.is_empty() {
            self.info("No products found.");
            return;
        }
        for product in products {
            let badges = product.active_badges().join(" ");
            self.table_row(
                &[
                    product.id.as_str(),
                    &product.price.current,
                    &product.title,
                    &badge_text(&badges),
                ],
                &[8, 14, 40, 0],
            );
        }
    }

    /// Print the page position of a listing.
    pub fn pagination(&self, pagination: &Pagination) {
        if self.json || pagination.total_pages == 0 {
            return;
        }
        println!(
            "\n  {}",
            style(format!(
                "Page {}/{} · items {}-{} of {}",
                pagination.current_page,
                pagination.total_pages,
                pagination.start_item(),
                pagination.end_item(),
                pagination.total
            ))
            .dim()
        );

        if pagination.total_pages > 1 {
            let mut pager: Vec<String> = pagination
                .page_numbers(PAGER_WIDTH)
                .into_iter()
                .map(|n| {
                    if n == pagination.current_page {
                        style(format!("[{}]", n)).bold().to_string()
                    } else {
                        n.to_string()
                    }
                })
                .collect();
            if !pagination.is_first() {
                pager.insert(0, "‹".to_string());
            }
            if !pagination.is_last() {
                pager.push("›".to_string());
            }
            println!("  {}", pager.join(" "));
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Badge labels styled for the product table.
fn badge_text(badges: &str) -> String {
    if badges.is_empty() {
        String::new()
    } else {
        style(badges).yellow().to_string()
    }
}
