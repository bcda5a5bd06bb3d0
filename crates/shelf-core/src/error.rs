//! # Error Types
//!
//! Domain-specific error types for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelf-core errors (this file)                                         │
//! │  ├── ValidationError  - Input rejected before any request is made      │
//! │  └── CaptureError     - Illegal capture session transition             │
//! │                                                                         │
//! │  shelf-api errors (separate crate)                                     │
//! │  └── ApiError         - Transport / server failures                    │
//! │                                                                         │
//! │  shelf-register errors (separate crate)                                │
//! │  └── CameraError      - Device could not be opened or read             │
//! │                                                                         │
//! │  Flow: every error ──► Notice at the screen boundary ──► terminal      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A 409 from the book service is not in this list: it is the
//! [`RegistrationOutcome::Conflict`](crate::RegistrationOutcome::Conflict)
//! variant, not a failure.

use thiserror::Error;

use crate::session::CaptureState;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These are always recoverable and never cost a network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The digit-filtered input is neither 10 nor 13 digits long.
    #[error("ISBN must have 10 or 13 digits, got {digits}")]
    IsbnLength { digits: usize },

    /// A search query was empty after trimming.
    #[error("search query is empty")]
    EmptyQuery,
}

// =============================================================================
// Capture Error
// =============================================================================

/// Capture session transition errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// A stream is already starting or scanning.
    #[error("capture already active ({state})")]
    AlreadyActive { state: CaptureState },

    /// The requested transition is not legal from the current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: CaptureState,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CaptureError.
pub type CoreResult<T> = Result<T, CaptureError>;
