//! # CLI Error Type
//!
//! Failures that end a screen rather than becoming a notice.
//!
//! Book service and device failures are shown to the user and the screen
//! carries on; only terminal I/O, configuration, and client construction
//! surface here and reach `main`.

use shelf_api::ApiError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built (bad base URL).
    #[error("Book service client error: {0}")]
    Client(#[from] ApiError),
}

pub type CliResult<T> = Result<T, CliError>;
