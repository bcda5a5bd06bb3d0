//! # Menu Screen

use shelf_api::BookApi;
use shelf_core::BookOrdering;
use shelf_register::{CameraDevice, CaptureRequest};
use tokio::io::AsyncWrite;
use tracing::debug;

use crate::console::Console;
use crate::error::CliResult;
use crate::screens::{list, manual, scan, search};

const TITLE: &str = "ぼくの読書きろく";
const ENTRIES: &str = "  1) バーコードでとうろく\n  2) 手で入力\n  3) 本のいちらん\n  4) けんさく\n  q) おわる";

/// Menu loop. `camera` is called each time the scan screen opens.
pub async fn run<C, A, W>(
    console: &mut Console<W>,
    api: &A,
    camera: impl Fn() -> C,
    request: &CaptureRequest,
) -> CliResult<()>
where
    C: CameraDevice,
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    loop {
        console.line(TITLE).await?;
        console.line(ENTRIES).await?;

        let Some(choice) = console.prompt("えらんでね").await? else {
            return Ok(());
        };
        debug!(choice = %choice, "Menu selection");

        match choice.trim() {
            "1" => scan::run(console, camera(), request.clone(), api).await?,
            "2" => manual::run(console, api).await?,
            "3" => list::run(console, api, BookOrdering::default()).await?,
            "4" => search::run(console, api).await?,
            "q" | "quit" => return Ok(()),
            _ => console.line("1〜4 か q をえらんでね").await?,
        }
    }
}
