//! Browsing session controller
//!
//! A [`Browser`] owns the pagination state for one session and pushes every
//! change to a [`RenderSink`]. Each method handles one user action and runs
//! to completion.

use crate::catalog::Catalog;
use crate::config::BrowseConfig;
use crate::filter::filter;
use crate::pagination::{LoadMore, PageCursor};
use crate::types::{Book, BookDetail, Palette, Query, Theme};

/// Presentation layer driven by a [`Browser`]
pub trait RenderSink {
    /// Draw `books`, replacing whatever list was drawn before
    fn render(&mut self, books: &[&Book]);

    /// Show or hide the "no results" indicator
    fn set_no_results(&mut self, empty: bool);

    /// Apply a colour palette
    fn apply_theme(&mut self, _palette: Palette) {}
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn render(&mut self, books: &[&Book]) {
        (**self).render(books)
    }

    fn set_no_results(&mut self, empty: bool) {
        (**self).set_no_results(empty)
    }

    fn apply_theme(&mut self, palette: Palette) {
        (**self).apply_theme(palette)
    }
}

/// One browsing session over a catalog
pub struct Browser<'a, S> {
    catalog: &'a Catalog,
    cursor: PageCursor<'a>,
    sink: S,
    theme: Theme,
}

impl<'a, S: RenderSink> Browser<'a, S> {
    /// Start a session showing the first page of the whole catalog
    pub fn new(catalog: &'a Catalog, config: &BrowseConfig, sink: S) -> Self {
        let mut browser = Self {
            catalog,
            cursor: PageCursor::new(config.page_size),
            sink,
            theme: config.theme,
        };

        browser.cursor.new_search(catalog.books().iter().collect());
        browser.sink.apply_theme(browser.theme.palette());
        browser.sink.render(browser.cursor.visible());
        browser
    }

    /// Run a fresh search and draw its first page
    ///
    /// Returns the size of the match set.
    pub fn search(&mut self, query: &Query) -> usize {
        let matches = filter(self.catalog, query);
        let total = matches.len();
        tracing::debug!(?query, total, "search");

        self.sink.set_no_results(total == 0);
        let first_page = self.cursor.new_search(matches);
        self.sink.render(first_page);
        total
    }

    /// Extend the result set with similar books and draw the wider window
    pub fn load_more(&mut self) -> LoadMore<'a> {
        let outcome = self.cursor.load_more(self.catalog);
        match outcome {
            LoadMore::Extended { anchor, added } => tracing::debug!(
                anchor = %anchor.id,
                added,
                page = self.cursor.page(),
                "load more"
            ),
            LoadMore::Empty => tracing::debug!(page = self.cursor.page(), "load more on empty results"),
        }

        self.sink.render(self.cursor.visible());
        outcome
    }

    /// Detail view for `id`, or `None` when the catalog has no such book
    pub fn select(&self, id: &str) -> Option<BookDetail> {
        self.catalog.find(id).map(|book| self.catalog.detail(book))
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.sink.apply_theme(theme.palette());
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn cursor(&self) -> &PageCursor<'a> {
        &self.cursor
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
