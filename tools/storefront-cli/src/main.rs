//! Storefront CLI - Command line tool for browsing the storefront catalog.
//!
//! Commands:
//! - `storefront open` - Render the page behind a catalog URL
//! - `storefront search` - Search products by title
//! - `storefront suggest` - Search-as-you-type suggestions
//! - `storefront brands` - List brands
//! - `storefront menu` - Show the header category menu
//! - `storefront facets` - Show the filter panel of a category

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{FacetsArgs, OpenArgs, SearchArgs, SuggestArgs};

/// Storefront CLI - Browse the catalog from a shell
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog dataset (JSON) to use instead of the embedded one
    #[arg(long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page for a catalog URL
    Open(OpenArgs),

    /// Search products by title
    Search(SearchArgs),

    /// Show search-as-you-type suggestions
    Suggest(SuggestArgs),

    /// List all brands
    Brands,

    /// Show the header category menu
    Menu,

    /// Show the filter panel of a category
    Facets(FacetsArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), cli.data.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Open(args) => commands::open::run(args, &ctx),
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Brands => commands::brands::run(&ctx),
        Commands::Menu => commands::menu::run(&ctx),
        Commands::Facets(args) => commands::facets::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
