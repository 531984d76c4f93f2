//! List command implementation

use crate::screen::{draw_page, Screen};
use anyhow::Result;
use bookshelf_core::{BookPreview, BrowseConfig, Browser, Catalog, Query};
use serde::Serialize;
use std::io::{self, Write};

/// List output
#[derive(Serialize)]
struct Listing<'a> {
    matches: usize,
    page: usize,
    showing: usize,
    /// Every result of the active set is shown
    exhausted: bool,
    books: &'a [BookPreview],
}

/// Search the catalog, press "load more" `more` times and print what is visible
pub fn list(
    catalog: &Catalog,
    config: &BrowseConfig,
    query: &Query,
    more: usize,
    json: bool,
) -> Result<()> {
    let mut browser = Browser::new(catalog, config, Screen::new(catalog));
    let matches = browser.search(query);
    for _ in 0..more {
        browser.load_more();
    }

    let page = browser.cursor().page();
    let exhausted = browser.cursor().is_exhausted();
    let screen = browser.sink();
    let mut out = io::stdout().lock();

    if json {
        let listing = Listing {
            matches,
            page,
            showing: screen.previews.len(),
            exhausted,
            books: &screen.previews,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
    } else {
        draw_page(&mut out, &browser)?;
        if matches > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "Showing {} books ({} matches, page {})",
                screen.previews.len(),
                matches,
                page
            )?;
        }
    }

    Ok(())
}
