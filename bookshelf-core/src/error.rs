//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading a catalog or resolving references inside it
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Book '{book}' references unknown author '{author}'")]
    UnknownAuthor { book: String, author: String },

    #[error("Book '{book}' references unknown genre '{genre}'")]
    UnknownGenre { book: String, genre: String },

    #[error("Duplicate book id: {0}")]
    DuplicateBook(String),

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
