//! In-memory fakes shared by this crate's unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use shelf_api::{ApiResult, BookApi};
use shelf_core::{Book, BookId, BookOrdering, Isbn, RegistrationOutcome};

use crate::camera::{CameraDevice, CameraError, CaptureRequest, CaptureStream};

pub fn book(id: i64, title: &str, isbn: &str) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        cover_image_url: None,
        created_at: Utc::now(),
        isbn: Some(isbn.to_string()),
    }
}

// =============================================================================
// Fake Book Service
// =============================================================================

#[derive(Default)]
pub struct FakeApi {
    existing: HashMap<String, String>,
    failure: Option<String>,
    register_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(mut self, isbn: &str, title: &str) -> Self {
        self.existing.insert(isbn.to_string(), title.to_string());
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookApi for FakeApi {
    async fn register(&self, isbn: &Isbn) -> RegistrationOutcome {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.failure {
            return RegistrationOutcome::Failure(message.clone());
        }
        match self.existing.get(isbn.as_str()) {
            Some(title) => RegistrationOutcome::Conflict(book(1, title, isbn.as_str())),
            None => RegistrationOutcome::Success(book(
                2,
                &format!("new {}", isbn),
                isbn.as_str(),
            )),
        }
    }

    async fn list(&self, _ordering: BookOrdering) -> ApiResult<Vec<Book>> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: BookId) -> ApiResult<()> {
        Ok(())
    }

    async fn search(&self, _query: &str) -> ApiResult<Vec<Book>> {
        Ok(Vec::new())
    }
}

// =============================================================================
// Fake Camera
// =============================================================================

/// What a fake stream does once its scripted codes run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterScript {
    /// Waits forever, like a camera pointed at nothing.
    #[default]
    Hang,
    Close,
    Fail,
}

/// How a fake stream answers `stop()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopBehavior {
    #[default]
    Succeed,
    Fail,
    Hang,
}

#[derive(Default, Clone)]
pub struct Counters {
    pub opens: Arc<AtomicUsize>,
    pub stops: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
}

impl Counters {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct FakeCamera {
    pub codes: Vec<String>,
    pub after: AfterScript,
    pub stop: StopBehavior,
    pub unavailable: bool,
    pub counters: Counters,
}

impl FakeCamera {
    pub fn scripted(codes: &[&str]) -> Self {
        FakeCamera {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CameraDevice for FakeCamera {
    fn describe(&self) -> String {
        "fake".to_string()
    }

    async fn open(&self, _request: &CaptureRequest) -> Result<Box<dyn CaptureStream>, CameraError> {
        if self.unavailable {
            return Err(CameraError::Unavailable("permission denied".into()));
        }
        self.counters.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeStream {
            codes: self.codes.iter().cloned().collect(),
            after: self.after,
            stop: self.stop,
            counters: self.counters.clone(),
        }))
    }
}

struct FakeStream {
    codes: VecDeque<String>,
    after: AfterScript,
    stop: StopBehavior,
    counters: Counters,
}

#[async_trait]
impl CaptureStream for FakeStream {
    async fn next_decoded(&mut self) -> Option<Result<String, CameraError>> {
        if let Some(code) = self.codes.pop_front() {
            return Some(Ok(code));
        }
        match self.after {
            AfterScript::Hang => std::future::pending().await,
            AfterScript::Close => None,
            AfterScript::Fail => Some(Err(CameraError::Read("device unplugged".into()))),
        }
    }

    async fn stop(&mut self) -> Result<(), CameraError> {
        self.counters.stops.fetch_add(1, Ordering::SeqCst);
        match self.stop {
            StopBehavior::Succeed => Ok(()),
            StopBehavior::Fail => Err(CameraError::Stop("not running".into())),
            StopBehavior::Hang => std::future::pending().await,
        }
    }

    fn release(&mut self) {
        self.counters.releases.fetch_add(1, Ordering::SeqCst);
    }
}
