//! Snapshot tests for bookshelf-core using insta
//!
//! These tests capture the previews and detail views produced for a small
//! catalog to detect unintended changes in what the front end is given.

use bookshelf_core::{Book, BookPreview, BrowseConfig, Browser, Catalog, Directory, RenderSink};
use chrono::{TimeZone, Utc};

/// Helper to create a sample catalog for testing
fn sample_catalog() -> Catalog {
    let authors = Directory::new()
        .with("a-ann", "Ann Leckie")
        .with("a-ted", "Ted Chiang");
    let genres = Directory::new()
        .with("g-sf", "Science Fiction")
        .with("g-short", "Short Stories");

    let books = vec![
        Book::new("b1", "Ancillary Justice", "a-ann")
            .with_genre("g-sf")
            .with_image("https://example.com/aj.jpg")
            .with_description("A ship's AI in a single body.")
            .with_published(Utc.with_ymd_and_hms(2013, 10, 1, 0, 0, 0).unwrap()),
        Book::new("b2", "Exhalation", "a-ted")
            .with_genre("g-short")
            .with_genre("g-sf")
            .with_published(Utc.with_ymd_and_hms(2019, 5, 7, 0, 0, 0).unwrap()),
        Book::new("b3", "Orphaned Title", "a-gone")
            .with_genre("g-sf")
            .with_published(Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap()),
    ];

    Catalog::new(books, authors, genres).unwrap()
}

/// Sink that renders previews as text lines
struct TextSink<'a> {
    catalog: &'a Catalog,
    lines: Vec<String>,
}

impl RenderSink for TextSink<'_> {
    fn render(&mut self, books: &[&Book]) {
        self.lines = books
            .iter()
            .map(|book| {
                let BookPreview { id, title, author, .. } = self.catalog.preview(book);
                format!("{} | {} | {}", id, title, author.as_deref().unwrap_or("<unknown>"))
            })
            .collect();
    }

    fn set_no_results(&mut self, _empty: bool) {}
}

#[test]
fn test_first_page_listing() {
    let catalog = sample_catalog();
    let sink = TextSink {
        catalog: &catalog,
        lines: Vec::new(),
    };
    let browser = Browser::new(&catalog, &BrowseConfig::default(), sink);
    let listing = browser.into_sink().lines.join("\n");

    insta::assert_snapshot!(listing, @r"
    b1 | Ancillary Justice | Ann Leckie
    b2 | Exhalation | Ted Chiang
    b3 | Orphaned Title | <unknown>
    ");
}

#[test]
fn test_detail_view() {
    let catalog = sample_catalog();
    let detail = catalog.detail(catalog.find("b1").unwrap());

    insta::assert_snapshot!(detail.subtitle, @"Ann Leckie (2013)");
    insta::assert_snapshot!(detail.description, @"A ship's AI in a single body.");
}

#[test]
fn test_genre_options() {
    let catalog = sample_catalog();
    let options: Vec<String> = catalog
        .genres()
        .options("All Genres")
        .into_iter()
        .map(|o| format!("{}={}", o.value, o.label))
        .collect();

    insta::assert_snapshot!(options.join("\n"), @r"
    any=All Genres
    g-sf=Science Fiction
    g-short=Short Stories
    ");
}
