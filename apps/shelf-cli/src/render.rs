//! # Rendering
//!
//! Plain-text formatting for screens. Pure functions so the layout can be
//! tested without a terminal.

use shelf_core::notice::messages;
use shelf_core::{Book, BookOrdering, Notice, NoticeKind};

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// One notice line. Only error notices are styled as errors.
pub fn notice(notice: &Notice, color: bool) -> String {
    match notice.kind {
        NoticeKind::Success => format!("✔ {}", notice.text),
        NoticeKind::Info => format!("ℹ {}", notice.text),
        NoticeKind::Error if color => format!("{}✖ {}{}", RED, notice.text, RESET),
        NoticeKind::Error => format!("✖ {}", notice.text),
    }
}

/// A book as a two-line card: id and title, then cover or placeholder.
pub fn book_card(book: &Book) -> String {
    format!(
        "[{}] {}\n     {}",
        book.id,
        book.title,
        book.cover().unwrap_or(messages::NO_IMAGE)
    )
}

/// Registered or existing book shown after a registration.
pub fn registered_book(book: &Book) -> String {
    format!(
        "📖 {}\n   {}",
        book.title,
        book.cover().unwrap_or(messages::NO_IMAGE)
    )
}

pub fn book_list(books: &[Book]) -> String {
    books.iter().map(book_card).collect::<Vec<_>>().join("\n")
}

/// The digit counter under the manual entry field.
pub fn digit_counter(count: usize) -> String {
    format!("{} けた", count)
}

pub fn ordering_label(ordering: BookOrdering) -> &'static str {
    match ordering {
        BookOrdering::NewestFirst => "あたらしいじゅん",
        BookOrdering::TitleAscending => "あいうえおじゅん",
    }
}

pub fn delete_prompt(book: &Book) -> String {
    format!("「{}」をさくじょしますか？ [y/N]", book.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shelf_core::BookId;

    fn book(cover: Option<&str>) -> Book {
        Book {
            id: BookId(7),
            title: "ぐりとぐら".to_string(),
            cover_image_url: cover.map(str::to_string),
            created_at: Utc::now(),
            isbn: None,
        }
    }

    #[test]
    fn test_card_uses_placeholder_without_cover() {
        assert_eq!(book_card(&book(None)), "[7] ぐりとぐら\n     No Image");
        assert_eq!(book_card(&book(Some(""))), "[7] ぐりとぐら\n     No Image");
        assert_eq!(
            book_card(&book(Some("https://covers.example/7.jpg"))),
            "[7] ぐりとぐら\n     https://covers.example/7.jpg"
        );
    }

    #[test]
    fn test_registered_book_falls_back_to_placeholder() {
        assert_eq!(registered_book(&book(None)), "📖 ぐりとぐら\n   No Image");
        assert_eq!(
            registered_book(&book(Some("https://covers.example/7.jpg"))),
            "📖 ぐりとぐら\n   https://covers.example/7.jpg"
        );
    }

    #[test]
    fn test_only_errors_are_styled() {
        let info = Notice::info(messages::ALREADY_REGISTERED);
        let error = Notice::error(messages::CONNECTION_FAILED);

        assert!(!notice(&info, true).contains(RED));
        assert!(notice(&error, true).starts_with(RED));
        assert_eq!(notice(&error, false), format!("✖ {}", messages::CONNECTION_FAILED));
        assert_eq!(
            notice(&Notice::success(messages::REGISTERED), true),
            format!("✔ {}", messages::REGISTERED)
        );
    }

    #[test]
    fn test_digit_counter() {
        assert_eq!(digit_counter(13), "13 けた");
    }
}
