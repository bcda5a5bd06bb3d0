//! # BookApi Seam
//!
//! Everything the screens and controllers need from the book service.
//! [`BookClient`](crate::BookClient) is the HTTP implementation; tests
//! substitute in-memory fakes.

use std::sync::Arc;

use async_trait::async_trait;
use shelf_core::{Book, BookId, BookOrdering, Isbn, RegistrationOutcome};

use crate::error::ApiResult;

/// Operations offered by the book service.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// Registers `isbn`. Never fails outright: transport and server failures
    /// come back as [`RegistrationOutcome::Failure`].
    async fn register(&self, isbn: &Isbn) -> RegistrationOutcome;

    /// Lists every book in `ordering`.
    async fn list(&self, ordering: BookOrdering) -> ApiResult<Vec<Book>>;

    /// Deletes one book.
    async fn delete(&self, id: BookId) -> ApiResult<()>;

    /// Title search. `query` is sent as given; callers trim it.
    async fn search(&self, query: &str) -> ApiResult<Vec<Book>>;
}

#[async_trait]
impl<T: BookApi + ?Sized> BookApi for Arc<T> {
    async fn register(&self, isbn: &Isbn) -> RegistrationOutcome {
        (**self).register(isbn).await
    }

    async fn list(&self, ordering: BookOrdering) -> ApiResult<Vec<Book>> {
        (**self).list(ordering).await
    }

    async fn delete(&self, id: BookId) -> ApiResult<()> {
        (**self).delete(id).await
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<Book>> {
        (**self).search(query).await
    }
}
