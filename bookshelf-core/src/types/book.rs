//! The Book record and the views derived from it

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog entry
///
/// Books are immutable once the catalog is loaded. `author` and `genres`
/// hold directory ids, not display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique identifier
    pub id: String,

    /// Book title
    pub title: String,

    /// Author id (key into the author directory)
    pub author: String,

    /// Genre ids (keys into the genre directory)
    pub genres: Vec<String>,

    /// Cover image URI
    #[serde(default)]
    pub image: String,

    /// Book description/summary
    #[serde(default)]
    pub description: String,

    /// Publication date
    pub published: DateTime<Utc>,
}

impl Book {
    /// Create a book with the required identity fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genres: Vec::new(),
            image: String::new(),
            description: String::new(),
            published: DateTime::<Utc>::default(),
        }
    }

    /// Add a genre id
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    /// Set cover image URI
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set publication date
    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = published;
        self
    }

    /// Whether this book carries the given genre id
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Whether this book shares an author or at least one genre with `other`
    pub fn is_similar_to(&self, other: &Book) -> bool {
        self.author == other.author || self.genres.iter().any(|g| other.has_genre(g))
    }

    /// Year of publication
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// What one entry of the result list shows
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookPreview {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Author display name, `None` when the author id is not in the directory
    pub author: Option<String>,
}

/// The detail view for a selected book
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    /// `"<author> (<year>)"`
    pub subtitle: String,
    /// Genre display names, raw ids where the directory has no entry
    pub genres: Vec<String>,
    pub description: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_book_creation() {
        let book = Book::new("b1", "The Great Escape", "a1")
            .with_genre("fantasy")
            .with_genre("scifi")
            .with_description("A daring breakout.");

        assert_eq!(book.title, "The Great Escape");
        assert_eq!(book.genres, vec!["fantasy", "scifi"]);
        assert!(book.has_genre("scifi"));
        assert!(!book.has_genre("horror"));
    }

    #[test]
    fn test_similarity_by_author_or_genre() {
        let anchor = Book::new("1", "One", "a").with_genre("fantasy");
        let same_author = Book::new("2", "Two", "a").with_genre("horror");
        let same_genre = Book::new("3", "Three", "b").with_genre("fantasy");
        let unrelated = Book::new("4", "Four", "c").with_genre("romance");

        assert!(same_author.is_similar_to(&anchor));
        assert!(same_genre.is_similar_to(&anchor));
        assert!(!unrelated.is_similar_to(&anchor));
        assert!(anchor.is_similar_to(&anchor));
    }

    #[test]
    fn test_book_deserialization() {
        let json = r#"{
            "id": "760b3450",
            "genres": ["8e1a5e0a"],
            "title": "ACRONYMS",
            "image": "https://example.com/cover.jpg",
            "description": "An intriguing read.",
            "published": "2011-03-14T00:00:00.000Z",
            "author": "a9b5a9f0"
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "760b3450");
        assert_eq!(book.author, "a9b5a9f0");
        assert_eq!(book.published_year(), 2011);
        assert_eq!(
            book.published,
            Utc.with_ymd_and_hms(2011, 3, 14, 0, 0, 0).unwrap()
        );
    }
}
