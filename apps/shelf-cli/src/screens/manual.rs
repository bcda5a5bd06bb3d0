//! # Manual Entry Screen

use shelf_api::BookApi;
use shelf_core::notice::messages;
use shelf_core::{Notice, ISBN_LENGTHS};
use shelf_register::{ManualEntry, ManualSubmit};
use tokio::io::AsyncWrite;

use crate::console::Console;
use crate::error::CliResult;
use crate::render;
use crate::screens::show_report;

/// Prompts for ISBNs until an empty line or end of input.
pub async fn run<A, W>(console: &mut Console<W>, api: &A) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    console.line("手で入力").await?;
    let mut entry = ManualEntry::new(api);

    loop {
        let Some(raw) = console.prompt("ISBNをいれてね (Enter でもどる)").await? else {
            return Ok(());
        };
        if raw.trim().is_empty() {
            return Ok(());
        }
        submit(console, &mut entry, &raw).await?;
    }
}

/// Registers a single ISBN given on the command line.
pub async fn add<A, W>(console: &mut Console<W>, api: &A, raw: &str) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    let mut entry = ManualEntry::new(api);
    submit(console, &mut entry, raw).await
}

async fn submit<A, W>(console: &mut Console<W>, entry: &mut ManualEntry<'_, A>, raw: &str) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    if !entry.input(raw) {
        console.notice(&Notice::error(messages::ENTER_10_OR_13)).await?;
        return Ok(());
    }
    console.line(&render::digit_counter(entry.digit_count())).await?;

    if ISBN_LENGTHS.contains(&entry.digit_count()) {
        console.line(messages::SEARCHING).await?;
    }

    match entry.submit().await {
        ManualSubmit::Rejected(notice) => console.notice(&notice).await?,
        ManualSubmit::Submitted(report) => show_report(console, &report).await?,
    }
    Ok(())
}
