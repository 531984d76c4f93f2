//! CLI command implementations

mod browse;
mod list;
mod options;
mod show;
mod theme;
mod validate;

pub use browse::browse;
pub use list::list;
pub use options::{options, OptionKind};
pub use show::show;
pub use theme::{resolve_theme, theme};
pub use validate::validate;

use anyhow::{Context, Result};
use bookshelf_core::Catalog;
use std::fs::File;
use std::io::BufReader;

/// Environment variable naming a catalog file
pub const CATALOG_ENV: &str = "BOOKSHELF_CATALOG";

const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.json");

/// Load the catalog from `path`, then `BOOKSHELF_CATALOG`, then the bundled sample
pub fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    let path = path
        .map(str::to_string)
        .or_else(|| std::env::var(CATALOG_ENV).ok().filter(|p| !p.is_empty()));

    let catalog = match &path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open catalog file: {}", path))?;
            Catalog::from_json(BufReader::new(file))
                .with_context(|| format!("Failed to load catalog {}", path))?
        }
        None => Catalog::from_json_str(SAMPLE_CATALOG).context("Bundled catalog is invalid")?,
    };

    tracing::info!(
        "Loaded {} books from {}",
        catalog.len(),
        path.as_deref().unwrap_or("bundled sample")
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_consistent() {
        let catalog = Catalog::from_json_str(SAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.validate().is_empty());
    }
}
