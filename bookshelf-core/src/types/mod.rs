//! Core types for the Bookshelf catalog

mod book;
mod query;
mod theme;

pub use book::{Book, BookDetail, BookPreview};
pub use query::{Query, Selector, ANY};
pub use theme::{Palette, ParseThemeError, Rgb, Theme};
