//! # Scan Screen
//!
//! Barcode registration. Capture runs until an ISBN is registered, the
//! device fails or closes, or the user presses Ctrl-C. Leaving the screen
//! always closes the controller.

use shelf_api::BookApi;
use shelf_register::{CameraDevice, CaptureController, CaptureRequest, ScanEvent};
use tokio::io::AsyncWrite;
use tracing::warn;

use crate::console::Console;
use crate::error::CliResult;
use crate::screens::show_report;

pub async fn run<C, A, W>(
    console: &mut Console<W>,
    camera: C,
    request: CaptureRequest,
    api: &A,
) -> CliResult<()>
where
    C: CameraDevice,
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    console.line("バーコードでとうろく").await?;

    let mut controller = CaptureController::new(camera, api).with_request(request);
    let result = scan_loop(console, &mut controller).await;
    controller.close().await;
    result
}

async fn scan_loop<C, A, W>(
    console: &mut Console<W>,
    controller: &mut CaptureController<'_, C, A>,
) -> CliResult<()>
where
    C: CameraDevice,
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    loop {
        if let Err(e) = controller.start().await {
            console.notice(&e.notice()).await?;
            return Ok(());
        }
        console
            .line(&format!(
                "カメラをひらきました ({}) Ctrl-C でとじる",
                controller.camera().describe()
            ))
            .await?;

        let registered = loop {
            let event = tokio::select! {
                event = controller.next_event() => event,
                _ = interrupted() => None,
            };

            match event {
                Some(ScanEvent::TryAgain(notice)) => console.notice(&notice).await?,
                Some(ScanEvent::Registered(report)) => {
                    show_report(console, &report).await?;
                    break true;
                }
                Some(ScanEvent::CameraLost(notice)) => {
                    console.notice(&notice).await?;
                    break false;
                }
                Some(ScanEvent::Closed) | None => break false,
            }
        };

        controller.stop().await;
        console.line("カメラをとじました").await?;

        if !registered || !console.confirm("もういちどスキャンする？ [y/N]").await? {
            return Ok(());
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
}
