//! Terminal presentation of a browsing session

use bookshelf_core::{Book, BookDetail, BookPreview, Browser, Catalog, Palette, RenderSink, Theme};
use std::io::{self, Write};

pub const NO_RESULTS_MESSAGE: &str = "No results found. Your filters might be too narrow.";
pub const END_OF_RESULTS_MESSAGE: &str = "End of results.";

/// Render sink holding the latest frame until it is drawn
pub struct Screen<'a> {
    catalog: &'a Catalog,
    pub previews: Vec<BookPreview>,
    pub no_results: bool,
    pub palette: Option<Palette>,
}

impl<'a> Screen<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            previews: Vec::new(),
            no_results: false,
            palette: None,
        }
    }

    /// Write the current list
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.no_results {
            writeln!(out, "{}", NO_RESULTS_MESSAGE)?;
        }

        for (i, preview) in self.previews.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {} by {} [{}]",
                i + 1,
                preview.title,
                preview.author.as_deref().unwrap_or("Unknown author"),
                preview.id
            )?;
        }

        Ok(())
    }
}

impl RenderSink for Screen<'_> {
    fn render(&mut self, books: &[&Book]) {
        self.previews = books.iter().map(|book| self.catalog.preview(book)).collect();
    }

    fn set_no_results(&mut self, empty: bool) {
        self.no_results = empty;
    }

    fn apply_theme(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }
}

/// Write the session's current list, marking the end once every result is on screen
pub fn draw_page<W: Write>(out: &mut W, browser: &Browser<'_, Screen<'_>>) -> io::Result<()> {
    let screen = browser.sink();
    screen.draw(out)?;
    if !screen.previews.is_empty() && browser.cursor().is_exhausted() {
        writeln!(out, "{}", END_OF_RESULTS_MESSAGE)?;
    }
    Ok(())
}

/// Write the detail view of a book
pub fn draw_detail<W: Write>(out: &mut W, detail: &BookDetail) -> io::Result<()> {
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "{}", detail.subtitle)?;
    writeln!(out, "Genres:  {}", detail.genres.join(", "))?;
    if !detail.image.is_empty() {
        writeln!(out, "Cover:   {}", detail.image)?;
    }
    if !detail.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", detail.description)?;
    }

    Ok(())
}

/// Write a palette as CSS custom properties
pub fn draw_palette<W: Write>(out: &mut W, palette: &Palette) -> io::Result<()> {
    for (name, value) in palette.css_variables() {
        writeln!(out, "{}: {};", name, value)?;
    }
    Ok(())
}

pub fn draw_theme<W: Write>(out: &mut W, theme: Theme) -> io::Result<()> {
    writeln!(out, "Theme: {}", theme)?;
    draw_palette(out, &theme.palette())
}
