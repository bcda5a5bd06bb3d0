//! # Capture Controller
//!
//! Drives one barcode capture session: open the device, wait for a
//! decodable ISBN, stop, register.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   start() ──► Idle ──► Starting ──► Scanning ◄──────────┐               │
//! │                  │                     │                │               │
//! │        open fails│          on_decoded(raw)             │ not 10/13     │
//! │                  ▼                     │                │ digits        │
//! │          CameraError ◄─ Idle           ├──► TryAgain ───┘               │
//! │                                        │                                │
//! │                                        ▼ 10/13 digits                   │
//! │                           stop() ──► Stopping ──► Idle                  │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                         registration::register ──► Registered(report)   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Teardown
//!
//! The open stream lives in a [`StreamLease`]. `stop()` takes the lease out
//! of the controller before awaiting the device, so a cancelled stop, a
//! failing stop, and a dropped controller all release the device through
//! the lease exactly once.
//!
//! Every method that changes the session takes `&mut self`; a second
//! registration cannot start while one is in flight.

use shelf_api::BookApi;
use shelf_core::notice::{messages, Notice};
use shelf_core::validation::digits_only;
use shelf_core::{CaptureSession, CaptureState, Isbn};
use tracing::{debug, info, warn};

use crate::camera::{CameraDevice, CameraError, CaptureRequest};
use crate::lease::StreamLease;
use crate::registration::{self, RegistrationReport};

// =============================================================================
// Scan Events
// =============================================================================

/// What the capture screen should show next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A barcode was read but is not an ISBN. Scanning continues.
    TryAgain(Notice),

    /// An ISBN was read, capture stopped, and registration ran.
    Registered(RegistrationReport),

    /// The device failed mid-scan. Capture is stopped.
    CameraLost(Notice),

    /// The device ran out of input. Capture is stopped.
    Closed,
}

// =============================================================================
// Capture Controller
// =============================================================================

pub struct CaptureController<'a, C, A: ?Sized> {
    camera: C,
    api: &'a A,
    request: CaptureRequest,
    session: CaptureSession,
    lease: Option<StreamLease>,
}

impl<'a, C, A> CaptureController<'a, C, A>
where
    C: CameraDevice,
    A: BookApi + ?Sized,
{
    pub fn new(camera: C, api: &'a A) -> Self {
        CaptureController {
            camera,
            api,
            request: CaptureRequest::default(),
            session: CaptureSession::new(),
            lease: None,
        }
    }

    pub fn with_request(mut self, request: CaptureRequest) -> Self {
        self.request = request;
        self
    }

    pub fn state(&self) -> CaptureState {
        self.session.state()
    }

    pub fn is_scanning(&self) -> bool {
        self.session.is_scanning()
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Opens the device and begins scanning.
    ///
    /// An active session (or one whose stop was interrupted) is stopped
    /// first, so at most one stream is ever open. There is no retry: on
    /// failure the session is idle and the user starts again by hand.
    pub async fn start(&mut self) -> Result<(), CameraError> {
        if self.session.state() != CaptureState::Idle || self.lease.is_some() {
            debug!(state = %self.session.state(), "Restarting capture");
            self.stop().await;
        }

        if let Err(e) = self.session.begin_start() {
            self.session.mark_idle();
            return Err(CameraError::Unavailable(e.to_string()));
        }

        match self.camera.open(&self.request).await {
            Ok(stream) => {
                self.lease = Some(StreamLease::new(stream));
                if let Err(e) = self.session.mark_scanning() {
                    self.stop().await;
                    return Err(CameraError::Unavailable(e.to_string()));
                }
                info!(device = %self.camera.describe(), "Capture started");
                Ok(())
            }
            Err(e) => {
                warn!(device = %self.camera.describe(), error = %e, "Failed to open capture device");
                self.session.mark_idle();
                Err(e)
            }
        }
    }

    /// Handles one decoded barcode.
    ///
    /// Returns `None` when not scanning (late decodes after a stop are
    /// dropped).
    pub async fn on_decoded(&mut self, raw: &str) -> Option<ScanEvent> {
        if !self.session.is_scanning() {
            debug!(raw, "Ignoring decode outside a scan");
            return None;
        }

        let isbn = match Isbn::parse(raw) {
            Ok(isbn) => isbn,
            Err(e) => {
                debug!(digits = digits_only(raw).len(), error = %e, "Decoded text is not an ISBN");
                return Some(ScanEvent::TryAgain(Notice::error(messages::SCAN_AGAIN)));
            }
        };

        self.stop().await;
        let report = registration::register(self.api, &isbn).await;
        Some(ScanEvent::Registered(report))
    }

    /// Waits for the next decode and handles it.
    ///
    /// `None` when there is no scan in progress. Cancel-safe as long as the
    /// device's `next_decoded` is.
    pub async fn next_event(&mut self) -> Option<ScanEvent> {
        if !self.session.is_scanning() {
            return None;
        }
        let lease = self.lease.as_mut()?;

        match lease.next_decoded().await {
            Some(Ok(raw)) => self.on_decoded(&raw).await,
            Some(Err(e)) => {
                warn!(error = %e, "Capture device failed mid-scan");
                self.stop().await;
                Some(ScanEvent::CameraLost(e.notice()))
            }
            None => {
                info!("Capture device closed");
                self.stop().await;
                Some(ScanEvent::Closed)
            }
        }
    }

    /// Stops scanning and releases the device. Idempotent.
    pub async fn stop(&mut self) {
        let lease = self.lease.take();

        if !self.session.begin_stop() {
            self.session.mark_idle();
            return;
        }

        if let Some(mut lease) = lease {
            if let Err(e) = lease.stop().await {
                debug!(error = %e, "Capture stop failed");
            }
            lease.release();
        }

        self.session.finish_stop();
        debug!("Capture stopped");
    }

    /// Stops and consumes the controller.
    pub async fn close(mut self) {
        self.stop().await;
    }
}

/// Teardown without an executor: `release` is the synchronous stop, so an
/// open stream is stopped and freed exactly once.
impl<C, A: ?Sized> Drop for CaptureController<'_, C, A> {
    fn drop(&mut self) {
        if let Some(lease) = self.lease.as_mut() {
            debug!("Capture controller dropped with an open stream");
            lease.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{AfterScript, FakeApi, FakeCamera, StopBehavior};
    use shelf_core::{NoticeKind, RegistrationOutcome};
    use std::time::Duration;

    #[tokio::test]
    async fn test_start_twice_keeps_one_stream() {
        let api = FakeApi::new();
        let camera = FakeCamera::default();
        let counters = camera.counters.clone();
        let mut controller = CaptureController::new(camera, &api);

        controller.start().await.unwrap();
        controller.start().await.unwrap();

        assert_eq!(controller.state(), CaptureState::Scanning);
        assert_eq!(counters.opens(), 2);
        assert_eq!(counters.releases(), 1);

        controller.close().await;
        assert_eq!(counters.releases(), 2);
    }

    #[tokio::test]
    async fn test_open_failure_is_terminal() {
        let api = FakeApi::new();
        let camera = FakeCamera {
            unavailable: true,
            ..FakeCamera::default()
        };
        let mut controller = CaptureController::new(camera, &api);

        let err = controller.start().await.unwrap_err();

        assert_eq!(err.notice().text, messages::CAMERA_UNAVAILABLE);
        assert_eq!(controller.state(), CaptureState::Idle);
        assert!(controller.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_valid_decode_stops_then_registers() {
        let api = FakeApi::new();
        let camera = FakeCamera::scripted(&["978-4-00-310101-0"]);
        let counters = camera.counters.clone();
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        let event = controller.next_event().await.unwrap();

        match event {
            ScanEvent::Registered(report) => {
                assert!(matches!(report.outcome, RegistrationOutcome::Success(_)));
                assert_eq!(report.notice.kind, NoticeKind::Success);
            }
            other => panic!("expected registration, got {:?}", other),
        }
        assert_eq!(controller.state(), CaptureState::Idle);
        assert_eq!(counters.stops(), 1);
        assert_eq!(counters.releases(), 1);
        assert_eq!(api.register_calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_decode_keeps_scanning() {
        let api = FakeApi::new();
        let camera = FakeCamera::scripted(&["12345", "9784003101010"]);
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        let first = controller.next_event().await.unwrap();
        assert_eq!(first, ScanEvent::TryAgain(Notice::error(messages::SCAN_AGAIN)));
        assert!(controller.is_scanning());
        assert_eq!(api.register_calls(), 0);

        let second = controller.next_event().await.unwrap();
        assert!(matches!(second, ScanEvent::Registered(_)));
    }

    #[tokio::test]
    async fn test_decode_after_stop_is_ignored() {
        let api = FakeApi::new();
        let mut controller = CaptureController::new(FakeCamera::default(), &api);
        controller.start().await.unwrap();
        controller.stop().await;

        assert!(controller.on_decoded("9784003101010").await.is_none());
        assert_eq!(api.register_calls(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_scan_reports_info() {
        let api = FakeApi::new().with_existing("9784834000825", "ぐりとぐら");
        let mut controller = CaptureController::new(FakeCamera::default(), &api);
        controller.start().await.unwrap();

        let event = controller.on_decoded("9784834000825").await.unwrap();

        match event {
            ScanEvent::Registered(report) => {
                assert!(!report.notice.is_error());
                assert_eq!(report.book().map(|b| b.title.as_str()), Some("ぐりとぐら"));
            }
            other => panic!("expected registration, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failing_stop_still_releases() {
        let api = FakeApi::new();
        let camera = FakeCamera {
            stop: StopBehavior::Fail,
            ..FakeCamera::default()
        };
        let counters = camera.counters.clone();
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        controller.stop().await;
        controller.stop().await;

        assert_eq!(controller.state(), CaptureState::Idle);
        assert_eq!(counters.stops(), 1);
        assert_eq!(counters.releases(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_stop_releases_once() {
        let api = FakeApi::new();
        let camera = FakeCamera {
            stop: StopBehavior::Hang,
            ..FakeCamera::default()
        };
        let counters = camera.counters.clone();
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        let cancelled = tokio::time::timeout(Duration::from_millis(20), controller.stop()).await;
        assert!(cancelled.is_err());
        assert_eq!(counters.releases(), 1);

        // An interrupted stop does not block the next start.
        controller.start().await.unwrap();
        assert_eq!(controller.state(), CaptureState::Scanning);

        drop(controller);
        assert_eq!(counters.releases(), 2);
    }

    #[tokio::test]
    async fn test_drop_mid_scan_releases_once() {
        let api = FakeApi::new();
        let camera = FakeCamera::default();
        let counters = camera.counters.clone();
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        drop(controller);

        assert_eq!(counters.stops(), 0);
        assert_eq!(counters.releases(), 1);
    }

    #[tokio::test]
    async fn test_device_error_stops_capture() {
        let api = FakeApi::new();
        let camera = FakeCamera {
            after: AfterScript::Fail,
            ..FakeCamera::default()
        };
        let counters = camera.counters.clone();
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        let event = controller.next_event().await.unwrap();

        assert_eq!(
            event,
            ScanEvent::CameraLost(Notice::error(messages::CAMERA_UNAVAILABLE))
        );
        assert_eq!(controller.state(), CaptureState::Idle);
        assert_eq!(counters.releases(), 1);
    }

    #[tokio::test]
    async fn test_end_of_input_closes_capture() {
        let api = FakeApi::new();
        let camera = FakeCamera {
            after: AfterScript::Close,
            ..FakeCamera::default()
        };
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        assert_eq!(controller.next_event().await, Some(ScanEvent::Closed));
        assert!(controller.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_garbled_device_line_asks_to_try_again() {
        use std::io::Write;

        let mut device = tempfile::NamedTempFile::new().unwrap();
        device.write_all(b"\xff\xfe garbage\n9784003101010\n").unwrap();
        device.flush().unwrap();

        let api = FakeApi::new();
        let camera = crate::LineScanner::new(device.path().to_string_lossy());
        let mut controller = CaptureController::new(camera, &api);
        controller.start().await.unwrap();

        let first = controller.next_event().await.unwrap();
        assert_eq!(first, ScanEvent::TryAgain(Notice::error(messages::SCAN_AGAIN)));
        assert!(controller.is_scanning());

        let second = controller.next_event().await.unwrap();
        assert!(matches!(second, ScanEvent::Registered(_)));
        assert_eq!(api.register_calls(), 1);
    }
}
