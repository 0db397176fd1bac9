//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_catalog::catalog::{Catalog, CatalogData};
use storefront_catalog::{Storefront, StorefrontConfig};
use tracing::debug;

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded catalog and settings.
    pub storefront: Storefront,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load the catalog and the config file.
    pub fn load(config_path: Option<&str>, data_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => StorefrontConfig::load(path)
                .with_context(|| format!("Failed to load config file: {}", path))?,
            // Try to find config in current directory or parent directories
            None => Self::find_config(&cwd).unwrap_or_default(),
        };

        let data = match data_path {
            Some(path) => CatalogData::load(path)
                .with_context(|| format!("Failed to load catalog data: {}", path))?,
            None => CatalogData::embedded().context("Failed to parse embedded catalog")?,
        };
        let catalog = Catalog::new(data).context("Catalog failed validation")?;

        Ok(Self {
            storefront: Storefront::new(catalog, config),
            output,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<StorefrontConfig> {
        let config_names = ["storefront.toml", ".storefront.toml", "storefront.json"];

        let mut current = PathBuf::from(start);
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    match StorefrontConfig::load(&config_path) {
                        Ok(config) => {
                            debug!(path = %config_path.display(), "using config file");
                            return Some(config);
                        }
                        Err(e) => debug!(path = %config_path.display(), error = %e, "skipping config file"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}
