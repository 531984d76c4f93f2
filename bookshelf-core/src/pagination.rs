//! Paginated view over the active result set
//!
//! The cursor owns the active result set: the match set of the last search,
//! extended by every "load more". The visible window is always the first
//! `page * page_size` entries of that set.

use crate::catalog::Catalog;
use crate::filter::similar_to;
use crate::types::Book;

/// Counter units consumed by one "load more"
///
/// A load more both moves past the page that was on screen and reveals the
/// one after it, so the page counter grows by two per call.
pub const LOAD_MORE_STEP: usize = 2;

/// Outcome of [`PageCursor::load_more`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadMore<'a> {
    /// Books similar to `anchor` were appended
    Extended { anchor: &'a Book, added: usize },

    /// The active set was empty, nothing to extend from
    Empty,
}

/// Page counter plus the active result set
#[derive(Debug, Clone)]
pub struct PageCursor<'a> {
    page: usize,
    page_size: usize,
    active: Vec<&'a Book>,
}

impl<'a> PageCursor<'a> {
    /// A cursor on page 1 with an empty active set
    ///
    /// A zero `page_size` is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            active: Vec::new(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The whole active result set, including entries not yet visible
    pub fn active(&self) -> &[&'a Book] {
        &self.active
    }

    /// The entries currently on screen
    pub fn visible(&self) -> &[&'a Book] {
        let end = self.window().min(self.active.len());
        &self.active[..end]
    }

    /// True when every entry of the active set is visible
    pub fn is_exhausted(&self) -> bool {
        self.window() >= self.active.len()
    }

    /// Start over with a fresh match set and return the first page
    pub fn new_search(&mut self, matches: Vec<&'a Book>) -> &[&'a Book] {
        self.page = 1;
        self.active = matches;
        self.visible()
    }

    /// Extend the active set with books similar to the last visible one and
    /// widen the window
    ///
    /// Supplemental books come from the whole catalog and are not
    /// deduplicated against the active set. When the window already runs
    /// past the end of the set, the last entry of the set is used as the
    /// anchor instead.
    pub fn load_more(&mut self, catalog: &'a Catalog) -> LoadMore<'a> {
        let anchor = self.anchor();
        self.advance();

        match anchor {
            Some(anchor) => {
                let additional = similar_to(catalog, anchor);
                let added = additional.len();
                self.active.extend(additional);
                LoadMore::Extended { anchor, added }
            }
            None => LoadMore::Empty,
        }
    }

    fn window(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// Last visible entry, clamped to the end of the active set
    fn anchor(&self) -> Option<&'a Book> {
        let last_index = self.window() - 1;
        self.active
            .get(last_index)
            .or_else(|| self.active.last())
            .copied()
    }

    fn advance(&mut self) {
        self.page += LOAD_MORE_STEP;
    }
}
