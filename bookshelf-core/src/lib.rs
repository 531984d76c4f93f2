//! Bookshelf Core Library
//!
//! This crate provides the catalog model and browsing logic for Bookshelf: an
//! immutable in-memory catalog, query filtering, and a paginated result
//! cursor whose "load more" pulls in books similar to the last one shown.
//! Presentation is left to a [`RenderSink`] implementation.

pub mod browser;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod types;

pub use browser::{Browser, RenderSink};
pub use catalog::{Catalog, CatalogIssue};
pub use config::{BrowseConfig, DEFAULT_PAGE_SIZE};
pub use directory::{Directory, FilterOption};
pub use error::{CatalogError, Result};
pub use filter::filter;
pub use pagination::{LoadMore, PageCursor};
pub use types::{
    Book, BookDetail, BookPreview, Palette, ParseThemeError, Query, Rgb, Selector, Theme, ANY,
};
