use crate::types::Theme;
use serde::{Deserialize, Serialize};

/// Number of books per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Settings for a browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Books per page, at least 1
    pub page_size: usize,

    /// Theme applied when the session starts
    pub theme: Theme,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme: Theme::default(),
        }
    }
}

impl BrowseConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
