//! # shelf-register: Registration Flow for Shelf
//!
//! The two ways a book gets onto the shelf, and the device plumbing behind
//! the first one.
//!
//! ```text
//! ┌──────────────────────────┐      ┌──────────────────────────┐
//! │    CaptureController     │      │       ManualEntry        │
//! │  camera ─► decode ─► stop│      │  digits ─► 10/13 check   │
//! └────────────┬─────────────┘      └────────────┬─────────────┘
//!              └───────────────┬─────────────────┘
//!                              ▼
//!                 registration::register(api, isbn)
//!                              │
//!                              ▼
//!               RegistrationReport { outcome, notice }
//! ```
//!
//! ## Modules
//!
//! - [`camera`] - Device traits and capture parameters
//! - [`lease`] - RAII release of an open stream
//! - [`input`] - Line reader shared by the terminal and the stdin scanner
//! - [`line`] - Line-oriented scanner backend (HID wedge, serial, stdin)
//! - [`controller`] - Capture session driver
//! - [`manual`] - Manual ISBN entry
//! - [`registration`] - The shared register operation

pub mod camera;
pub mod controller;
pub mod input;
pub mod lease;
pub mod line;
pub mod manual;
pub mod registration;

#[cfg(test)]
mod testing;

pub use camera::{CameraDevice, CameraError, CaptureRequest, CaptureStream, FacingMode, ScanRegion};
pub use controller::{CaptureController, ScanEvent};
pub use input::SharedInput;
pub use lease::StreamLease;
pub use line::{LineScanner, ScannerSettings, STDIN_DEVICE};
pub use manual::{ManualEntry, ManualSubmit};
pub use registration::{register, RegistrationReport};
