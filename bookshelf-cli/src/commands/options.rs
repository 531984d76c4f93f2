//! Options command implementation

use anyhow::Result;
use bookshelf_core::Catalog;
use clap::ValueEnum;
use std::io::{self, Write};

/// Which filter drop-down to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionKind {
    Authors,
    Genres,
}

/// Print the entries of a filter drop-down, "any" first
pub fn options(catalog: &Catalog, kind: OptionKind) -> Result<()> {
    let options = match kind {
        OptionKind::Authors => catalog.authors().options("All Authors"),
        OptionKind::Genres => catalog.genres().options("All Genres"),
    };

    let mut out = io::stdout().lock();
    for option in options {
        writeln!(out, "{}\t{}", option.value, option.label)?;
    }

    Ok(())
}
