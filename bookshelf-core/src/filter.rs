//! Query evaluation over the catalog
//!
//! Filters never reorder: results come back in catalog order.

use crate::catalog::Catalog;
use crate::types::{Book, Query};

/// Whether `book` satisfies every field of `query`
pub fn matches(book: &Book, query: &Query) -> bool {
    title_matches(&book.title, &query.title)
        && query.author.admits(&book.author)
        && query.genre.admits_any(&book.genres)
}

/// Case-insensitive substring test; a blank needle matches everything
fn title_matches(title: &str, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    title.to_lowercase().contains(&needle.to_lowercase())
}

/// Every book matching `query`, in catalog order
pub fn filter<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Book> {
    if query.is_unconstrained() {
        return catalog.books().iter().collect();
    }

    catalog
        .books()
        .iter()
        .filter(|book| matches(book, query))
        .collect()
}

/// Every book sharing an author or a genre with `anchor`, in catalog order
///
/// Draws from the whole catalog, `anchor` itself included.
pub fn similar_to<'a>(catalog: &'a Catalog, anchor: &Book) -> Vec<&'a Book> {
    catalog
        .books()
        .iter()
        .filter(|book| book.is_similar_to(anchor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;

    fn catalog() -> Catalog {
        let authors = Directory::new()
            .with("abc123", "Jane Doe")
            .with("def456", "Jane Doe")
            .with("B", "Bob");
        let genres = Directory::new().with("fantasy", "Fantasy").with("scifi", "Sci-Fi");
        Catalog::new(
            vec![
                Book::new("1", "The Great Escape", "abc123").with_genre("fantasy"),
                Book::new("2", "Greatness", "def456").with_genre("scifi"),
                Book::new("3", "Small Things", "B")
                    .with_genre("scifi")
                    .with_genre("fantasy"),
            ],
            authors,
            genres,
        )
        .unwrap()
    }

    fn ids(books: &[&Book]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_unconstrained_query_returns_catalog() {
        let catalog = catalog();
        assert_eq!(ids(&filter(&catalog, &Query::new())), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let catalog = catalog();
        let query = Query::new().with_title("great");
        assert_eq!(ids(&filter(&catalog, &query)), vec!["1", "2"]);

        let query = Query::new().with_title("ESCAPE");
        assert_eq!(ids(&filter(&catalog, &query)), vec!["1"]);
    }

    #[test]
    fn test_blank_title_matches_all() {
        let catalog = catalog();
        let query = Query::new().with_title("   ");
        assert_eq!(filter(&catalog, &query).len(), 3);
    }

    #[test]
    fn test_author_is_exact_id_not_name() {
        let catalog = catalog();
        // def456 has the same display name but a different id
        let query = Query::new().with_author("abc123");
        assert_eq!(ids(&filter(&catalog, &query)), vec!["1"]);

        let query = Query::new().with_author("Jane Doe");
        assert!(filter(&catalog, &query).is_empty());
    }

    #[test]
    fn test_genre_membership() {
        let catalog = catalog();
        let query = Query::new().with_genre("fantasy");
        assert_eq!(ids(&filter(&catalog, &query)), vec!["1", "3"]);
    }

    #[test]
    fn test_all_fields_must_match() {
        let catalog = catalog();
        let query = Query::new()
            .with_title("great")
            .with_author("def456")
            .with_genre("fantasy");
        assert!(filter(&catalog, &query).is_empty());

        let query = Query::new().with_title("great").with_genre("scifi");
        assert_eq!(ids(&filter(&catalog, &query)), vec!["2"]);
    }

    #[test]
    fn test_similar_includes_anchor_and_shared_genres() {
        let catalog = catalog();
        let anchor = catalog.find("1").unwrap();
        assert_eq!(ids(&similar_to(&catalog, anchor)), vec!["1", "3"]);
    }
}
