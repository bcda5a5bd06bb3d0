//! # Registration Outcome
//!
//! The result of asking the book service to register an ISBN.
//!
//! ```text
//! POST /books/ { isbn }
//!      │
//!      ├── 2xx + book ──────────────► Success(book)     "とうろくできました！"
//!      │
//!      ├── 409 + { error, book } ───► Conflict(book)    info, not an error
//!      │
//!      └── anything else ───────────► Failure(message)  error
//! ```
//!
//! A 409 is business data: the shelf already holds that book, and the
//! existing record is shown instead of an error.

use crate::notice::{messages, Notice};
use crate::types::Book;

/// Tagged result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The book was created.
    Success(Book),

    /// The ISBN was already registered; carries the existing record.
    Conflict(Book),

    /// Registration failed; carries the text to display.
    Failure(String),
}

impl RegistrationOutcome {
    /// The book to display, if any. Failures never show a book.
    pub fn book(&self) -> Option<&Book> {
        match self {
            RegistrationOutcome::Success(book) | RegistrationOutcome::Conflict(book) => Some(book),
            RegistrationOutcome::Failure(_) => None,
        }
    }

    /// The notice to display for this outcome.
    pub fn notice(&self) -> Notice {
        match self {
            RegistrationOutcome::Success(_) => Notice::success(messages::REGISTERED),
            RegistrationOutcome::Conflict(_) => Notice::info(messages::ALREADY_REGISTERED),
            RegistrationOutcome::Failure(message) => Notice::error(message.clone()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationOutcome::Success(_))
    }
}
