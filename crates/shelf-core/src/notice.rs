//! # Notices
//!
//! What the user sees after an operation: a fixed or server-supplied text
//! and a kind that decides how it is styled.
//!
//! Display strings are fixed constants; there is no localization layer.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Fixed Display Strings
// =============================================================================

pub mod messages {
    //! Every fixed string the client shows.

    /// Registration succeeded.
    pub const REGISTERED: &str = "とうろくできました！";
    /// The ISBN is already on the shelf (409).
    pub const ALREADY_REGISTERED: &str = "このほんはもうとうろくされています";
    /// A scanned code did not filter to 10 or 13 digits.
    pub const SCAN_AGAIN: &str = "もういちどためしてください";
    /// Manual entry was not 10 or 13 digits.
    pub const ENTER_10_OR_13: &str = "ISBNは10けたか13けたでいれてね";
    /// The capture device could not be opened.
    pub const CAMERA_UNAVAILABLE: &str = "カメラをつかえませんでした";
    /// Timeout or no response from the book service.
    pub const CONNECTION_FAILED: &str = "つながりませんでした";
    /// Anything else.
    pub const GENERIC_ERROR: &str = "エラーがおきました";
    /// Registration request in flight.
    pub const SEARCHING: &str = "さがしてるよ...";
    /// List request in flight.
    pub const LOADING: &str = "よみこみちゅう...";
    /// The list loaded and is empty.
    pub const NO_BOOKS_YET: &str = "本がまだありません";
    /// A search ran and matched nothing.
    pub const NOT_FOUND: &str = "みつかりませんでした";
    /// Placeholder when a book has no cover.
    pub const NO_IMAGE: &str = "No Image";
}

// =============================================================================
// Notice
// =============================================================================

/// How a notice is presented.
///
/// Only [`NoticeKind::Error`] gets error styling. A conflict is
/// [`NoticeKind::Info`]: the user scanned a book they already own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
