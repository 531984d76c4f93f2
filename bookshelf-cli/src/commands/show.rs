//! Show command implementation

use crate::screen::draw_detail;
use anyhow::Result;
use bookshelf_core::Catalog;
use std::io::{self, Write};

/// Display the detail view of one book
pub fn show(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let detail = catalog.detail(catalog.get(id)?);
    let mut out = io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&detail)?)?;
    } else {
        draw_detail(&mut out, &detail)?;
    }

    Ok(())
}
