//! Interactive browse command implementation

use crate::screen::{draw_detail, draw_page, draw_palette, Screen};
use anyhow::Result;
use bookshelf_core::{BrowseConfig, Browser, Catalog, LoadMore, Query, Selector, Theme};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

const PROMPT: &str = "bookshelf> ";

/// One line typed at the prompt
#[derive(Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Search by title words, author id and genre id
    Search {
        /// Title words (matched as one substring)
        title: Vec<String>,

        /// Author id or "any"
        #[arg(short, long, default_value = "any")]
        author: Selector,

        /// Genre id or "any"
        #[arg(short, long, default_value = "any")]
        genre: Selector,
    },

    /// Load more books similar to the last one shown
    More,

    /// Show details of a book
    Show {
        /// Book id
        id: String,
    },

    /// Switch the colour theme (day, night)
    Theme { theme: Theme },

    /// Leave the browser
    #[command(alias = "exit")]
    Quit,
}

/// Run an interactive browsing session reading commands from `input`
pub fn browse<R: BufRead, W: Write>(
    catalog: &Catalog,
    config: &BrowseConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut browser = Browser::new(catalog, config, Screen::new(catalog));
    draw_session_theme(out, &browser)?;
    draw_page(out, &browser)?;

    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
            continue;
        }

        match Line::try_parse_from(words) {
            Ok(Line { action }) => match action {
                Action::Search {
                    title,
                    author,
                    genre,
                } => {
                    let query = Query {
                        title: title.join(" "),
                        author,
                        genre,
                    };
                    browser.search(&query);
                    draw_page(out, &browser)?;
                }
                Action::More => {
                    if let LoadMore::Extended { anchor, added } = browser.load_more() {
                        tracing::info!("Added {} books similar to '{}'", added, anchor.title);
                    }
                    draw_page(out, &browser)?;
                }
                Action::Show { id } => match browser.select(&id) {
                    Some(detail) => draw_detail(out, &detail)?,
                    None => writeln!(out, "Book not found: {}", id)?,
                },
                Action::Theme { theme } => {
                    browser.set_theme(theme);
                    draw_session_theme(out, &browser)?;
                }
                Action::Quit => return Ok(()),
            },
            Err(e) => write!(out, "{}", e)?,
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

/// Write the session's theme and the palette last applied to the screen
fn draw_session_theme<W: Write>(out: &mut W, browser: &Browser<'_, Screen<'_>>) -> Result<()> {
    writeln!(out, "Theme: {}", browser.theme())?;
    if let Some(palette) = &browser.sink().palette {
        draw_palette(out, palette)?;
    }
    Ok(())
}
