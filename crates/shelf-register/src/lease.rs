//! # Stream Lease
//!
//! RAII ownership of an open capture stream.
//!
//! ```text
//! open() ──► StreamLease ──┬── stop().await (errors swallowed by caller)
//!                          │
//!                          └── Drop ──► release()   exactly once
//! ```
//!
//! Whatever path ends a capture (normal stop, failing stop, a cancelled
//! stop future, the controller being dropped), the device is released
//! by the lease and only once.

use tracing::debug;

use crate::camera::{CameraError, CaptureStream};

/// Owns an open stream and releases it when dropped.
pub struct StreamLease {
    stream: Box<dyn CaptureStream>,
    released: bool,
}

impl StreamLease {
    pub fn new(stream: Box<dyn CaptureStream>) -> Self {
        StreamLease {
            stream,
            released: false,
        }
    }

    /// Next decoded barcode; `None` once released or exhausted.
    pub async fn next_decoded(&mut self) -> Option<Result<String, CameraError>> {
        if self.released {
            return None;
        }
        self.stream.next_decoded().await
    }

    /// Stops the device. A no-op after release.
    pub async fn stop(&mut self) -> Result<(), CameraError> {
        if self.released {
            return Ok(());
        }
        self.stream.stop().await
    }

    /// Releases the device handle. Idempotent.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.stream.release();
            debug!("Capture device released");
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for StreamLease {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for StreamLease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamLease")
            .field("released", &self.released)
            .finish()
    }
}
