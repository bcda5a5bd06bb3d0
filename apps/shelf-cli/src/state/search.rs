//! # Search State
//!
//! Tracks whether a search has completed so "nothing found" is only shown
//! after one has.

use shelf_api::BookApi;
use shelf_core::notice::messages;
use shelf_core::validation::validate_search_query;
use shelf_core::{Book, Notice};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    results: Vec<Book>,
    searched: bool,
    notice: Option<Notice>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last query sent, trimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Book] {
        &self.results
    }

    /// True after a search completed, even with no hits.
    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Fixed "not found" text after a search that returned nothing.
    pub fn empty_message(&self) -> Option<&'static str> {
        (self.searched && self.results.is_empty()).then_some(messages::NOT_FOUND)
    }

    /// Searches by title.
    ///
    /// A query that is empty after trimming sends nothing and returns
    /// `false`. On failure the previous results stay and the searched flag
    /// is left cleared.
    pub async fn search<A: BookApi + ?Sized>(&mut self, api: &A, query: &str) -> bool {
        let query = match validate_search_query(query) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, "Search skipped");
                return false;
            }
        };

        self.query = query.to_string();
        self.notice = None;
        self.searched = false;

        match api.search(query).await {
            Ok(results) => {
                debug!(query, hits = results.len(), "Search finished");
                self.results = results;
                self.searched = true;
            }
            Err(e) => {
                warn!(query, error = %e, "Search failed");
                self.notice = Some(e.notice());
            }
        }
        true
    }
}
