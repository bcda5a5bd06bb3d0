//! # Registration Operation
//!
//! The one step shared by barcode capture and manual entry: send a
//! validated ISBN to the book service and decide what to show.
//!
//! ```text
//! Isbn ──► BookApi::register ──► RegistrationOutcome ──► RegistrationReport
//!                                                        { outcome, notice }
//! ```
//!
//! Holds no state, so calling it again after any outcome is always safe.

use shelf_api::BookApi;
use shelf_core::{Book, Isbn, Notice, RegistrationOutcome};
use tracing::debug;

/// What a registration screen displays after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReport {
    pub outcome: RegistrationOutcome,
    pub notice: Notice,
}

impl RegistrationReport {
    pub fn new(outcome: RegistrationOutcome) -> Self {
        let notice = outcome.notice();
        RegistrationReport { outcome, notice }
    }

    /// The registered or pre-existing book; `None` on failure.
    pub fn book(&self) -> Option<&Book> {
        self.outcome.book()
    }
}

/// Registers `isbn` and pairs the outcome with its notice.
///
/// The caller has already validated the length.
pub async fn register<A>(api: &A, isbn: &Isbn) -> RegistrationReport
where
    A: BookApi + ?Sized,
{
    debug!(isbn = %isbn, "Submitting registration");
    RegistrationReport::new(api.register(isbn).await)
}
