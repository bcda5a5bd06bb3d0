//! # Book Service HTTP Client
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    BookClient::register                                 │
//! │                                                                         │
//! │  POST {base}/books/  { "isbn": "9784003101010" }                       │
//! │       │                                                                 │
//! │       ├── no response / timeout ──► ApiError::{Network, Timeout}        │
//! │       │                                   │                             │
//! │       ├── 2xx ──► decode Book ──► Success │                             │
//! │       │                                   │                             │
//! │       ├── 409 + book ──► Conflict         │                             │
//! │       │                                   ▼                             │
//! │       └── other ──► ApiError::Server ──► Failure(user_message())       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One `BookClient` is built at startup and borrowed by every screen.
//! Cloning is cheap (the reqwest pool is reference counted).

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use shelf_core::{Book, BookId, BookOrdering, Isbn, RegistrationOutcome};

use crate::config::ApiSettings;
use crate::error::{ApiError, ApiResult};
use crate::service::BookApi;

// =============================================================================
// Wire Shapes
// =============================================================================

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    isbn: &'a str,
}

/// Body of a non-success response: `{ "error": "...", "book": {...}? }`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    book: Option<Book>,
}

// =============================================================================
// Book Client
// =============================================================================

/// reqwest-backed [`BookApi`].
#[derive(Debug, Clone)]
pub struct BookClient {
    http: Client,
    base: Url,
}

impl BookClient {
    /// Builds the process-wide client.
    pub fn new(settings: &ApiSettings) -> ApiResult<Self> {
        settings.validate()?;

        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        let base = settings.base()?;
        debug!(base = %base, timeout_ms = settings.timeout_ms, "Book client ready");

        Ok(BookClient { http, base })
    }

    /// Base URL every endpoint is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(self.base.join(path)?)
    }

    async fn try_register(&self, isbn: &Isbn) -> ApiResult<RegistrationOutcome> {
        let url = self.endpoint("books/")?;
        let response = self
            .http
            .post(url)
            .json(&RegisterRequest {
                isbn: isbn.as_str(),
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let book: Book = response.json().await?;
            return Ok(RegistrationOutcome::Success(book));
        }

        let body = read_error_body(response).await?;
        if status == StatusCode::CONFLICT {
            if let Some(book) = body.book {
                return Ok(RegistrationOutcome::Conflict(book));
            }
        }

        Err(ApiError::Server {
            status,
            message: body.error,
        })
    }
}

#[async_trait]
impl BookApi for BookClient {
    async fn register(&self, isbn: &Isbn) -> RegistrationOutcome {
        debug!(isbn = %isbn, "register");

        match self.try_register(isbn).await {
            Ok(outcome) => {
                match &outcome {
                    RegistrationOutcome::Success(book) => {
                        info!(isbn = %isbn, id = %book.id, title = %book.title, "Book registered")
                    }
                    RegistrationOutcome::Conflict(book) => {
                        info!(isbn = %isbn, id = %book.id, "Book already registered")
                    }
                    RegistrationOutcome::Failure(_) => {}
                }
                outcome
            }
            Err(err) => {
                warn!(isbn = %isbn, error = %err, "Registration failed");
                RegistrationOutcome::Failure(err.user_message())
            }
        }
    }

    async fn list(&self, ordering: BookOrdering) -> ApiResult<Vec<Book>> {
        let url = self.endpoint("books/")?;
        let response = self
            .http
            .get(url)
            .query(&[("ordering", ordering.as_query())])
            .send()
            .await?;

        let books: Vec<Book> = check(response).await?.json().await?;
        debug!(ordering = %ordering, count = books.len(), "list");
        Ok(books)
    }

    async fn delete(&self, id: BookId) -> ApiResult<()> {
        let url = self.endpoint(&format!("books/{}/", id))?;
        let response = self.http.delete(url).send().await?;
        check(response).await?;
        info!(id = %id, "Book deleted");
        Ok(())
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<Book>> {
        let url = self.endpoint("books/search/")?;
        let response = self.http.get(url).query(&[("q", query)]).send().await?;

        let books: Vec<Book> = check(response).await?.json().await?;
        debug!(query = %query, count = books.len(), "search");
        Ok(books)
    }
}

// =============================================================================
// Response Helpers
// =============================================================================

/// Passes success responses through; turns anything else into `ApiError::Server`.
async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = read_error_body(response).await?;
    Err(ApiError::Server {
        status,
        message: body.error,
    })
}

/// Reads an error body. A body that is not the expected JSON (an HTML error
/// page from a proxy, say) yields an empty `ErrorBody`.
async fn read_error_body(response: Response) -> ApiResult<ErrorBody> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes).unwrap_or_default())
}
