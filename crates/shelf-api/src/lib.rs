//! # shelf-api: Book Service Client
//!
//! HTTP adapter for the book service REST API (base path `/api`).
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST   /books/                  { isbn }  → 201 book                   │
//! │                                            → 409 { error, book }        │
//! │                                            → 4xx/5xx { error }          │
//! │  GET    /books/?ordering=...               → [book]                     │
//! │  DELETE /books/{id}/                       → 204                        │
//! │  GET    /books/search/?q=...               → [book]                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`service`] - The `BookApi` trait (the seam tests mock)
//! - [`client`] - reqwest implementation
//! - [`config`] - Base URL and timeout
//! - [`error`] - `ApiError` and its user-facing message mapping

pub mod client;
pub mod config;
pub mod error;
pub mod service;

pub use client::BookClient;
pub use config::ApiSettings;
pub use error::{ApiError, ApiResult};
pub use service::BookApi;
