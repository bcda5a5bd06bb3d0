//! # Validation Module
//!
//! ISBN filtering and the few input rules the client enforces itself.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client (THIS MODULE)                                         │
//! │  ├── Strip everything that is not an ASCII digit                       │
//! │  └── Accept iff 10 or 13 digits remain                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Book service                                                 │
//! │  ├── Same digit/length check (400 on failure)                          │
//! │  └── Unique ISBN (409 with the existing book)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No check-digit arithmetic is done: scanners occasionally deliver
//! JAN price codes alongside the ISBN, and the length rule alone is what
//! separates the two.

use std::fmt;

use crate::error::ValidationError;
use crate::{ISBN_LENGTHS, MAX_ISBN_DIGITS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Digit Filtering
// =============================================================================

/// Keeps only the ASCII digits of `raw`.
///
/// ```rust
/// use shelf_core::validation::digits_only;
///
/// assert_eq!(digits_only("978-4-00-310101-0"), "9784003101010");
/// assert_eq!(digits_only("abc123"), "123");
/// ```
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True iff the digit-filtered input is 10 or 13 digits long.
pub fn is_valid_isbn(raw: &str) -> bool {
    ISBN_LENGTHS.contains(&digits_only(raw).len())
}

// =============================================================================
// Isbn
// =============================================================================

/// A digit string of length 10 or 13.
///
/// The only way to build one is [`Isbn::parse`], so holding an `Isbn`
/// means the length rule has already been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    /// Filters `raw` to digits and checks the length.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let digits = digits_only(raw);
        if ISBN_LENGTHS.contains(&digits.len()) {
            Ok(Isbn(digits))
        } else {
            Err(ValidationError::IsbnLength {
                digits: digits.len(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Manual Entry Field
// =============================================================================

/// The digits typed into the manual entry field.
///
/// Edits are digit-filtered; an edit that would push the field past
/// [`MAX_ISBN_DIGITS`] is refused and the previous value kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsbnInput {
    digits: String,
}

impl IsbnInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the field with the digits of `raw`.
    ///
    /// Returns `false` (and keeps the old value) when `raw` has more than
    /// 13 digits.
    pub fn set(&mut self, raw: &str) -> bool {
        let digits = digits_only(raw);
        if digits.len() > MAX_ISBN_DIGITS {
            return false;
        }
        self.digits = digits;
        true
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of digits currently held ("n けた" counter).
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Validates the current value as an ISBN.
    pub fn to_isbn(&self) -> ValidationResult<Isbn> {
        Isbn::parse(&self.digits)
    }
}

// =============================================================================
// Search Query
// =============================================================================

/// Trims a search query; empty queries are rejected.
pub fn validate_search_query(query: &str) -> ValidationResult<&str> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }
    Ok(query)
}
