//! # Capture Devices
//!
//! The seam between the capture controller and whatever produces decoded
//! barcodes.
//!
//! ## Device Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CameraDevice::open(request) ──► Box<dyn CaptureStream>                 │
//! │                                        │                                │
//! │                       next_decoded() ◄─┤  one call per barcode          │
//! │                                        │                                │
//! │                             stop() ◄───┤  async, best-effort            │
//! │                                        │                                │
//! │                          release() ◄───┘  sync, idempotent, always runs │
//! │                                           (StreamLease calls it on Drop) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `stop` may fail (the device can already be gone); `release` cannot, which
//! is what lets it run from a destructor.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shelf_core::notice::{messages, Notice};
use thiserror::Error;

// =============================================================================
// Capture Request
// =============================================================================

/// Which camera to prefer when a device has several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Rear ("environment") camera: the one pointed at the book.
    #[default]
    Rear,
    Front,
}

impl fmt::Display for FacingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacingMode::Rear => write!(f, "rear"),
            FacingMode::Front => write!(f, "front"),
        }
    }
}

/// Area of the frame searched for a barcode, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRegion {
    pub width: u32,
    pub height: u32,
}

/// Parameters for opening a capture stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    /// Preferred camera; devices without a choice ignore it.
    pub facing: FacingMode,

    /// Decode attempts per second.
    pub frames_per_second: u32,

    /// Scan box; a wide, short box suits 1D barcodes.
    pub region: ScanRegion,
}

impl Default for CaptureRequest {
    fn default() -> Self {
        CaptureRequest {
            facing: FacingMode::Rear,
            frames_per_second: 10,
            region: ScanRegion {
                width: 250,
                height: 150,
            },
        }
    }
}

// =============================================================================
// Camera Error
// =============================================================================

/// Capture device failure. Terminal for the session: the user reopens
/// capture by hand.
#[derive(Debug, Error)]
pub enum CameraError {
    /// The device could not be opened (missing, permission denied, busy).
    #[error("camera unavailable: {0}")]
    Unavailable(String),

    /// Reading from an open device failed.
    #[error("camera read failed: {0}")]
    Read(String),

    /// Stopping the device failed. Only ever logged.
    #[error("camera stop failed: {0}")]
    Stop(String),
}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Read(err.to_string())
    }
}

impl CameraError {
    /// Every camera failure shows the same fixed text.
    pub fn notice(&self) -> Notice {
        Notice::error(messages::CAMERA_UNAVAILABLE)
    }
}

// =============================================================================
// Device Traits
// =============================================================================

/// Something that can be opened to produce decoded barcodes.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Human-readable name for logs.
    fn describe(&self) -> String;

    /// Acquires the device and starts decoding.
    async fn open(&self, request: &CaptureRequest) -> Result<Box<dyn CaptureStream>, CameraError>;
}

/// An open, decoding device.
#[async_trait]
pub trait CaptureStream: Send {
    /// Waits for the next decoded barcode text. `None` when the device has
    /// no more input.
    async fn next_decoded(&mut self) -> Option<Result<String, CameraError>>;

    /// Asks the device to stop decoding.
    async fn stop(&mut self) -> Result<(), CameraError>;

    /// Releases the device handle. Must be idempotent and must not block.
    fn release(&mut self);
}
