//! # Line Scanner Backend
//!
//! Reads decoded barcodes one per line.
//!
//! Hand-held barcode scanners do their own decoding and present the result
//! as text: USB HID "keyboard wedge" scanners type it followed by Enter,
//! serial scanners write it to a tty (`/dev/ttyACM0`). Either way the
//! client sees a line per barcode, which is all this backend needs.
//!
//! ```toml
//! [scanner]
//! device = "/dev/ttyACM0"   # or "-" for stdin (keyboard wedge)
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::BufReader;
use tracing::debug;

use crate::camera::{CameraDevice, CameraError, CaptureRequest, CaptureStream, FacingMode};
use crate::input::SharedInput;

/// Device name meaning "read from standard input".
pub const STDIN_DEVICE: &str = "-";

// =============================================================================
// Scanner Settings
// =============================================================================

/// Capture device configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerSettings {
    /// Path of a line-oriented scanner, or `-` for stdin.
    #[serde(default = "default_device")]
    pub device: String,

    /// Camera preference passed along in the capture request.
    #[serde(default)]
    pub facing: FacingMode,
}

fn default_device() -> String {
    STDIN_DEVICE.to_string()
}

impl Default for ScannerSettings {
    fn default() -> Self {
        ScannerSettings {
            device: default_device(),
            facing: FacingMode::default(),
        }
    }
}

// =============================================================================
// Line Scanner
// =============================================================================

/// [`CameraDevice`] over a line-oriented source.
///
/// For `-` the scanner reads through a [`SharedInput`] so the terminal can
/// keep prompting on the same stream. Without one it opens its own stdin
/// reader.
#[derive(Debug, Clone)]
pub struct LineScanner {
    device: String,
    stdin: Option<SharedInput>,
}

impl LineScanner {
    pub fn new(device: impl Into<String>) -> Self {
        LineScanner {
            device: device.into(),
            stdin: None,
        }
    }

    pub fn from_settings(settings: &ScannerSettings) -> Self {
        Self::new(settings.device.clone())
    }

    /// Reader used when the device is `-`.
    pub fn with_stdin(mut self, stdin: SharedInput) -> Self {
        self.stdin = Some(stdin);
        self
    }

    pub fn is_stdin(&self) -> bool {
        self.device == STDIN_DEVICE
    }
}

#[async_trait]
impl CameraDevice for LineScanner {
    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.device.clone()
        }
    }

    async fn open(&self, request: &CaptureRequest) -> Result<Box<dyn CaptureStream>, CameraError> {
        let input = if self.is_stdin() {
            self.stdin.clone().unwrap_or_else(SharedInput::stdin)
        } else {
            let file = tokio::fs::File::open(&self.device)
                .await
                .map_err(|e| CameraError::Unavailable(format!("{}: {}", self.device, e)))?;
            SharedInput::new(BufReader::new(file))
        };

        // Facing and scan region describe a camera; a line scanner has neither.
        debug!(
            device = %self.describe(),
            facing = %request.facing,
            fps = request.frames_per_second,
            "Line scanner opened"
        );

        Ok(Box::new(LineStream { input: Some(input) }))
    }
}

struct LineStream {
    input: Option<SharedInput>,
}

#[async_trait]
impl CaptureStream for LineStream {
    /// Next non-blank line. Bytes that are not UTF-8 come through as
    /// replacement characters and fail ISBN validation like any misread.
    async fn next_decoded(&mut self) -> Option<Result<String, CameraError>> {
        let input = self.input.as_ref()?;
        loop {
            match input.read_line().await {
                Ok(Some(bytes)) => {
                    let line = String::from_utf8_lossy(&bytes);
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(Ok(line.to_string()));
                }
                Ok(None) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }

    async fn stop(&mut self) -> Result<(), CameraError> {
        self.input = None;
        Ok(())
    }

    fn release(&mut self) {
        self.input = None;
    }
}
