//! In-memory book service for screen and state tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shelf_api::{ApiError, ApiResult, BookApi};
use shelf_core::{Book, BookId, BookOrdering, Isbn, RegistrationOutcome};

pub fn book(id: i64, title: &str) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        cover_image_url: None,
        // Higher ids are newer.
        created_at: Utc.timestamp_opt(1_700_000_000 + id, 0).unwrap(),
        isbn: None,
    }
}

#[derive(Default)]
pub struct FakeShelf {
    books: Mutex<Vec<Book>>,
    failing: AtomicBool,
    list_calls: AtomicUsize,
    search_calls: AtomicUsize,
    register_calls: AtomicUsize,
    last_ordering: Mutex<Option<BookOrdering>>,
    last_query: Mutex<Option<String>>,
    deleted: Mutex<Vec<BookId>>,
}

impl FakeShelf {
    pub fn with_books(books: &[(i64, &str)]) -> Self {
        FakeShelf {
            books: Mutex::new(books.iter().map(|(id, title)| book(*id, title)).collect()),
            ..Self::default()
        }
    }

    /// Every call fails as if the service were unreachable.
    pub fn failing(self) -> Self {
        self.failing.store(true, Ordering::SeqCst);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn last_ordering(&self) -> Option<BookOrdering> {
        *self.last_ordering.lock().unwrap()
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<BookId> {
        self.deleted.lock().unwrap().clone()
    }

    fn check(&self) -> ApiResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BookApi for FakeShelf {
    async fn register(&self, isbn: &Isbn) -> RegistrationOutcome {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if let Err(e) = self.check() {
            return RegistrationOutcome::Failure(e.user_message());
        }
        let mut books = self.books.lock().unwrap();
        let id = books.iter().map(|b| b.id.0).max().unwrap_or(0) + 1;
        let mut new = book(id, &format!("ISBN {}", isbn));
        new.isbn = Some(isbn.to_string());
        books.push(new.clone());
        RegistrationOutcome::Success(new)
    }

    async fn list(&self, ordering: BookOrdering) -> ApiResult<Vec<Book>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_ordering.lock().unwrap() = Some(ordering);
        self.check()?;

        let mut books = self.books.lock().unwrap().clone();
        match ordering {
            BookOrdering::NewestFirst => books.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            BookOrdering::TitleAscending => books.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        Ok(books)
    }

    async fn delete(&self, id: BookId) -> ApiResult<()> {
        self.check()?;
        self.books.lock().unwrap().retain(|b| b.id != id);
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<Book>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());
        self.check()?;

        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.title.contains(query))
            .cloned()
            .collect())
    }
}
