//! The in-memory catalog: books plus author and genre directories

use crate::directory::Directory;
use crate::error::{CatalogError, Result};
use crate::types::{Book, BookDetail, BookPreview};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::Read;

/// A broken reference found by [`Catalog::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    UnknownAuthor { book: String, author: String },
    UnknownGenre { book: String, genre: String },
    NoGenres { book: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::UnknownAuthor { book, author } => {
                write!(f, "book '{}' references unknown author '{}'", book, author)
            }
            CatalogIssue::UnknownGenre { book, genre } => {
                write!(f, "book '{}' references unknown genre '{}'", book, genre)
            }
            CatalogIssue::NoGenres { book } => write!(f, "book '{}' has no genres", book),
        }
    }
}

/// On-disk catalog layout
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    authors: Directory,
    #[serde(default)]
    genres: Directory,
    books: Vec<Book>,
}

/// The immutable source of truth for browsing
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
    authors: Directory,
    genres: Directory,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate book ids
    pub fn new(books: Vec<Book>, authors: Directory, genres: Directory) -> Result<Self> {
        let mut index = HashMap::with_capacity(books.len());
        for (pos, book) in books.iter().enumerate() {
            if index.insert(book.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
        }

        Ok(Self {
            books,
            index,
            authors,
            genres,
        })
    }

    /// Load a catalog from a JSON reader
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(file.books, file.authors, file.genres)
    }

    /// Load a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.books, file.authors, file.genres)
    }

    /// All books in catalog order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &Directory {
        &self.authors
    }

    pub fn genres(&self) -> &Directory {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by id
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.index.get(id).map(|&pos| &self.books[pos])
    }

    /// Look up a book by id, failing with `BookNotFound`
    pub fn get(&self, id: &str) -> Result<&Book> {
        self.find(id)
            .ok_or_else(|| CatalogError::BookNotFound(id.to_string()))
    }

    /// Display name of the book's author
    pub fn author_name(&self, book: &Book) -> Result<&str> {
        self.authors
            .name(&book.author)
            .ok_or_else(|| CatalogError::UnknownAuthor {
                book: book.id.clone(),
                author: book.author.clone(),
            })
    }

    /// Display names of the book's genres, in the book's order
    pub fn genre_names(&self, book: &Book) -> Result<Vec<&str>> {
        book.genres
            .iter()
            .map(|genre| {
                self.genres
                    .name(genre)
                    .ok_or_else(|| CatalogError::UnknownGenre {
                        book: book.id.clone(),
                        genre: genre.clone(),
                    })
            })
            .collect()
    }

    /// List entry for a book
    pub fn preview(&self, book: &Book) -> BookPreview {
        BookPreview {
            id: book.id.clone(),
            title: book.title.clone(),
            image: book.image.clone(),
            author: self.author_name(book).ok().map(str::to_string),
        }
    }

    /// Detail view for a book
    ///
    /// Dangling author and genre ids are shown as-is.
    pub fn detail(&self, book: &Book) -> BookDetail {
        let author = self.author_name(book).unwrap_or(book.author.as_str());
        let genres = match self.genre_names(book) {
            Ok(names) => names.into_iter().map(str::to_string).collect(),
            Err(e) => {
                tracing::warn!("{}", e);
                book.genres.clone()
            }
        };
        BookDetail {
            id: book.id.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author, book.published_year()),
            genres,
            description: book.description.clone(),
            image: book.image.clone(),
        }
    }

    /// Report every dangling author/genre reference and every book without genres
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for book in &self.books {
            if !self.authors.contains(&book.author) {
                issues.push(CatalogIssue::UnknownAuthor {
                    book: book.id.clone(),
                    author: book.author.clone(),
                });
            }

            if book.genres.is_empty() {
                issues.push(CatalogIssue::NoGenres {
                    book: book.id.clone(),
                });
            }

            let mut seen = HashSet::new();
            for genre in &book.genres {
                if !self.genres.contains(genre) && seen.insert(genre.as_str()) {
                    issues.push(CatalogIssue::UnknownGenre {
                        book: book.id.clone(),
                        genre: genre.clone(),
                    });
                }
            }
        }

        issues
    }
}
