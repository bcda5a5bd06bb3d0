//! # Domain Types
//!
//! The book record as the book service returns it, and the list orderings
//! the service understands.
//!
//! ## Ownership
//! Book records belong to the book service. The client only holds transient
//! copies for display; nothing here is authoritative or persisted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Book Id
// =============================================================================

/// Primary key assigned by the book service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BookId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(BookId)
    }
}

// =============================================================================
// Book
// =============================================================================

/// A registered book.
///
/// Unknown fields in the service response are ignored so the service can
/// grow its payload without breaking older clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Service-assigned identifier.
    pub id: BookId,

    /// Resolved title.
    pub title: String,

    /// Cover image URL, when the service found one.
    #[serde(default)]
    pub cover_image_url: Option<String>,

    /// When the book was registered. Any offset is accepted and normalised to UTC.
    pub created_at: DateTime<Utc>,

    /// ISBN the book was registered under. Not every response echoes it.
    #[serde(default)]
    pub isbn: Option<String>,
}

impl Book {
    /// Cover URL, treating an empty string the same as no cover.
    pub fn cover(&self) -> Option<&str> {
        self.cover_image_url.as_deref().filter(|url| !url.is_empty())
    }
}

// =============================================================================
// Book Ordering
// =============================================================================

/// Sort key for the book list.
///
/// ```text
/// NewestFirst     ──► ?ordering=-created_at   (default)
/// TitleAscending  ──► ?ordering=title
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookOrdering {
    /// Most recently registered first.
    #[default]
    NewestFirst,

    /// Alphabetical by title.
    TitleAscending,
}

impl BookOrdering {
    /// Value of the `ordering` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            BookOrdering::NewestFirst => "-created_at",
            BookOrdering::TitleAscending => "title",
        }
    }

    /// The other ordering.
    pub fn toggled(&self) -> Self {
        match self {
            BookOrdering::NewestFirst => BookOrdering::TitleAscending,
            BookOrdering::TitleAscending => BookOrdering::NewestFirst,
        }
    }
}

impl fmt::Display for BookOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookOrdering::NewestFirst => write!(f, "newest"),
            BookOrdering::TitleAscending => write!(f, "title"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserializes_service_payload() {
        let json = r#"{
            "id": 7,
            "isbn": "9784003101010",
            "title": "坊っちゃん",
            "cover_image_url": null,
            "created_at": "2024-05-01T10:00:00.123456+09:00",
            "publisher": "ignored"
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();

        assert_eq!(book.id, BookId(7));
        assert_eq!(book.title, "坊っちゃん");
        assert_eq!(book.cover(), None);
        assert_eq!(book.created_at.to_rfc3339(), "2024-05-01T01:00:00.123456+00:00");
    }

    #[test]
    fn test_book_without_isbn_or_cover() {
        let json = r#"{"id": 1, "title": "x", "created_at": "2024-01-01T00:00:00Z"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.isbn, None);
        assert_eq!(book.cover_image_url, None);
    }

    #[test]
    fn test_empty_cover_is_no_cover() {
        let json = r#"{"id": 1, "title": "x", "cover_image_url": "", "created_at": "2024-01-01T00:00:00Z"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.cover(), None);
    }

    #[test]
    fn test_ordering_query_values() {
        assert_eq!(BookOrdering::default().as_query(), "-created_at");
        assert_eq!(BookOrdering::TitleAscending.as_query(), "title");
        assert_eq!(BookOrdering::NewestFirst.toggled(), BookOrdering::TitleAscending);
        assert_eq!(BookOrdering::TitleAscending.toggled(), BookOrdering::NewestFirst);
    }

    #[test]
    fn test_book_id_parsing() {
        assert_eq!(" 42 ".parse::<BookId>().unwrap(), BookId(42));
        assert!("abc".parse::<BookId>().is_err());
    }
}
