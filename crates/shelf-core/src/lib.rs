//! # shelf-core: Pure Domain Logic for Shelf
//!
//! Everything the registration flow decides without touching the network or
//! a camera lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shelf Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/shelf-cli (screens)                       │   │
//! │  │    Menu ──► Scan ──► Manual ──► List ──► Search                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        shelf-register (capture + registration flow)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                shelf-api (HTTP client adapter)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shelf-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │validation │  │  outcome  │  │  session  │  │   │
//! │  │   │   Book    │  │   Isbn    │  │ Success   │  │  Idle     │  │   │
//! │  │   │ Ordering  │  │  digits   │  │ Conflict  │  │  Scanning │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO DEVICES • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Book record and list ordering
//! - [`validation`] - ISBN digit filtering and length rules
//! - [`outcome`] - Tagged registration result
//! - [`session`] - Capture session state machine
//! - [`notice`] - Display messages and their kinds
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::validation::Isbn;
//!
//! let isbn = Isbn::parse("978-4-00-310101-0").unwrap();
//! assert_eq!(isbn.as_str(), "9784003101010");
//!
//! assert!(Isbn::parse("abc123").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod notice;
pub mod outcome;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CaptureError, CoreResult, ValidationError};
pub use notice::{Notice, NoticeKind};
pub use outcome::RegistrationOutcome;
pub use session::{CaptureSession, CaptureState};
pub use types::*;
pub use validation::Isbn;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Digit counts accepted as an ISBN (ISBN-10 and ISBN-13).
pub const ISBN_LENGTHS: [usize; 2] = [10, 13];

/// Longest digit string the manual entry field will hold.
pub const MAX_ISBN_DIGITS: usize = 13;
