//! # Book List State
//!
//! ## Delete Flow
//! ```text
//! select_for_delete(id) ──► pending ──┬── confirm_delete() ──► DELETE ──► removed locally
//!                                     │
//!                                     └── cancel_delete()  ──► nothing sent
//! ```

use shelf_api::BookApi;
use shelf_core::notice::messages;
use shelf_core::{Book, BookId, BookOrdering, Notice};
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct BookListState {
    books: Vec<Book>,
    ordering: BookOrdering,
    loaded: bool,
    pending_delete: Option<Book>,
    notice: Option<Notice>,
}

impl BookListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(ordering: BookOrdering) -> Self {
        BookListState {
            ordering,
            ..Self::default()
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn ordering(&self) -> BookOrdering {
        self.ordering
    }

    /// True once a fetch has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn pending_delete(&self) -> Option<&Book> {
        self.pending_delete.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Fixed "no books yet" text for a loaded, empty list.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.loaded && self.books.is_empty()).then_some(messages::NO_BOOKS_YET)
    }

    /// Fetches the list in the current ordering.
    ///
    /// On failure the previous books stay and an error notice is set.
    pub async fn refresh<A: BookApi + ?Sized>(&mut self, api: &A) {
        match api.list(self.ordering).await {
            Ok(books) => {
                self.books = books;
                self.loaded = true;
            }
            Err(e) => {
                warn!(error = %e, ordering = %self.ordering, "Failed to load books");
                self.notice = Some(e.notice());
            }
        }
    }

    /// Switches ordering. Re-fetches only when the key actually changes.
    ///
    /// Returns `true` when a fetch was made.
    pub async fn set_ordering<A: BookApi + ?Sized>(&mut self, api: &A, ordering: BookOrdering) -> bool {
        if ordering == self.ordering {
            return false;
        }
        self.ordering = ordering;
        self.refresh(api).await;
        true
    }

    /// Marks a listed book for deletion. `None` when `id` is not listed.
    pub fn select_for_delete(&mut self, id: BookId) -> Option<&Book> {
        let book = self.books.iter().find(|b| b.id == id)?.clone();
        self.pending_delete = Some(book);
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the pending target.
    ///
    /// On success only that book is removed from the list; there is no
    /// re-fetch. The target is cleared either way.
    pub async fn confirm_delete<A: BookApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(target) = self.pending_delete.take() else {
            return false;
        };

        match api.delete(target.id).await {
            Ok(()) => {
                info!(id = %target.id, title = %target.title, "Book deleted");
                self.books.retain(|b| b.id != target.id);
                self.notice = None;
                true
            }
            Err(e) => {
                warn!(id = %target.id, error = %e, "Failed to delete book");
                self.notice = Some(e.notice());
                false
            }
        }
    }
}
