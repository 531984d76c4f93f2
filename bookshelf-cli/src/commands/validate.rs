//! Validate command implementation

use anyhow::{bail, Result};
use bookshelf_core::Catalog;

/// Check every author and genre reference in the catalog
pub fn validate(catalog: &Catalog) -> Result<()> {
    let issues = catalog.validate();

    if issues.is_empty() {
        println!("Valid catalog");
        println!("  Books:   {}", catalog.len());
        println!("  Authors: {}", catalog.authors().len());
        println!("  Genres:  {}", catalog.genres().len());
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {}", issue);
    }
    bail!("Catalog has {} issues", issues.len());
}
