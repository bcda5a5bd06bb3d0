//! # Screens
//!
//! One module per destination on the menu. Each screen borrows the
//! console and the book service, runs until the user leaves, and turns
//! every service or device failure into a notice.
//!
//! ```text
//! menu ──┬── 1 ──► scan     (barcode capture)
//!        ├── 2 ──► manual   (typed ISBN)
//!        ├── 3 ──► list     (ordering, delete)
//!        ├── 4 ──► search
//!        └── q ──► exit
//! ```

pub mod list;
pub mod manual;
pub mod menu;
pub mod scan;
pub mod search;

use shelf_register::RegistrationReport;
use tokio::io::AsyncWrite;

use crate::console::Console;
use crate::error::CliResult;
use crate::render;

/// Shows the outcome of a registration: notice, then the book if any.
pub(crate) async fn show_report<W>(console: &mut Console<W>, report: &RegistrationReport) -> CliResult<()>
where
    W: AsyncWrite + Unpin,
{
    console.notice(&report.notice).await?;
    if let Some(book) = report.book() {
        console.line(&render::registered_book(book)).await?;
    }
    Ok(())
}
