//! # Manual Entry
//!
//! Typing an ISBN by hand when the barcode will not scan.

use shelf_api::BookApi;
use shelf_core::notice::{messages, Notice};
use shelf_core::validation::IsbnInput;
use tracing::debug;

use crate::registration::{self, RegistrationReport};

/// Result of pressing "register" on the manual entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualSubmit {
    /// Wrong number of digits; nothing was sent.
    Rejected(Notice),
    Submitted(RegistrationReport),
}

impl ManualSubmit {
    pub fn notice(&self) -> &Notice {
        match self {
            ManualSubmit::Rejected(notice) => notice,
            ManualSubmit::Submitted(report) => &report.notice,
        }
    }
}

/// The manual entry field and its submit action.
pub struct ManualEntry<'a, A: ?Sized> {
    api: &'a A,
    input: IsbnInput,
}

impl<'a, A: BookApi + ?Sized> ManualEntry<'a, A> {
    pub fn new(api: &'a A) -> Self {
        ManualEntry {
            api,
            input: IsbnInput::new(),
        }
    }

    /// Replaces the field with the digits of `raw`. Returns `false` and
    /// keeps the previous value when `raw` holds more than 13 digits.
    pub fn input(&mut self, raw: &str) -> bool {
        self.input.set(raw)
    }

    pub fn value(&self) -> &str {
        self.input.as_str()
    }

    pub fn digit_count(&self) -> usize {
        self.input.digit_count()
    }

    /// Validates and registers the current value.
    ///
    /// The field is cleared after a successful registration only; on a
    /// conflict or failure the digits stay for correction.
    pub async fn submit(&mut self) -> ManualSubmit {
        let isbn = match self.input.to_isbn() {
            Ok(isbn) => isbn,
            Err(e) => {
                debug!(error = %e, "Manual entry rejected");
                return ManualSubmit::Rejected(Notice::error(messages::ENTER_10_OR_13));
            }
        };

        let report = registration::register(self.api, &isbn).await;
        if report.outcome.is_success() {
            self.input.clear();
        }
        ManualSubmit::Submitted(report)
    }
}
