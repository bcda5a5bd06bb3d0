//! # Capture Session
//!
//! State of one capture device while a registration screen is open.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Capture Session States                              │
//! │                                                                         │
//! │  ┌────────┐  begin_start()  ┌──────────┐  mark_scanning()  ┌──────────┐ │
//! │  │  Idle  │ ──────────────► │ Starting │ ────────────────► │ Scanning │ │
//! │  └────────┘                 └────┬─────┘                   └────┬─────┘ │
//! │      ▲                           │ open failed                  │       │
//! │      │         mark_idle()       │                              │       │
//! │      ├───────────────────────────┘                  begin_stop()│       │
//! │      │                                                          ▼       │
//! │      │            finish_stop()                          ┌──────────┐  │
//! │      └────────────────────────────────────────────────── │ Stopping │  │
//! │                                                          └──────────┘  │
//! │                                                                         │
//! │  At most one stream: begin_start() refuses Starting / Scanning.        │
//! │  Decodes are only acted on while Scanning.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CaptureError, CoreResult};

/// Where the capture device is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureState {
    #[default]
    Idle,
    Starting,
    Scanning,
    Stopping,
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "idle"),
            CaptureState::Starting => write!(f, "starting"),
            CaptureState::Scanning => write!(f, "scanning"),
            CaptureState::Stopping => write!(f, "stopping"),
        }
    }
}

/// Transition rules for a capture session.
///
/// Holds no device handle; the controller pairs it with the stream it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSession {
    state: CaptureState,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_scanning(&self) -> bool {
        self.state == CaptureState::Scanning
    }

    /// `Idle → Starting`. A stop that never finished (`Stopping`) counts as idle.
    pub fn begin_start(&mut self) -> CoreResult<()> {
        match self.state {
            CaptureState::Idle | CaptureState::Stopping => {
                self.state = CaptureState::Starting;
                Ok(())
            }
            state => Err(CaptureError::AlreadyActive { state }),
        }
    }

    /// `Starting → Scanning`.
    pub fn mark_scanning(&mut self) -> CoreResult<()> {
        match self.state {
            CaptureState::Starting => {
                self.state = CaptureState::Scanning;
                Ok(())
            }
            state => Err(CaptureError::InvalidTransition {
                action: "mark scanning",
                state,
            }),
        }
    }

    /// `Starting | Scanning → Stopping`.
    ///
    /// Returns `false` when there was nothing to stop; stopping is idempotent.
    pub fn begin_stop(&mut self) -> bool {
        match self.state {
            CaptureState::Starting | CaptureState::Scanning => {
                self.state = CaptureState::Stopping;
                true
            }
            CaptureState::Idle | CaptureState::Stopping => false,
        }
    }

    /// Any state `→ Idle`. Used after a stop and after a failed open.
    pub fn mark_idle(&mut self) {
        self.state = CaptureState::Idle;
    }

    /// `Stopping → Idle`; a no-op from any other state but `Idle`.
    pub fn finish_stop(&mut self) {
        if self.state == CaptureState::Stopping {
            self.state = CaptureState::Idle;
        }
    }
}
