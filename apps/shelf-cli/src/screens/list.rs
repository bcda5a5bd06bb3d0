//! # List Screen
//!
//! Shows every book, switches ordering, and deletes with confirmation.

use shelf_api::BookApi;
use shelf_core::notice::messages;
use shelf_core::{BookId, BookOrdering, Notice};
use tokio::io::AsyncWrite;

use crate::console::Console;
use crate::error::CliResult;
use crate::render;
use crate::state::BookListState;

const HELP: &str = "o: ならびかえ / d <ID>: さくじょ / Enter: もどる";

/// Interactive list.
pub async fn run<A, W>(console: &mut Console<W>, api: &A, ordering: BookOrdering) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    let mut state = BookListState::with_ordering(ordering);
    console.line(messages::LOADING).await?;
    state.refresh(api).await;

    loop {
        show(console, &mut state).await?;

        let Some(command) = console.prompt(HELP).await? else {
            return Ok(());
        };
        let command = command.trim();

        match command {
            "" | "q" => return Ok(()),
            "o" => {
                console.line(messages::LOADING).await?;
                let next = state.ordering().toggled();
                state.set_ordering(api, next).await;
            }
            _ => match command.strip_prefix('d').map(|id| id.parse::<BookId>()) {
                Some(Ok(id)) => delete_flow(console, &mut state, api, id, false).await?,
                _ => console.line(HELP).await?,
            },
        }
    }
}

/// Prints the list once.
pub async fn print<A, W>(console: &mut Console<W>, api: &A, ordering: BookOrdering) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    let mut state = BookListState::with_ordering(ordering);
    state.refresh(api).await;
    show(console, &mut state).await
}

/// Deletes one book by id, asking first unless `assume_yes`.
pub async fn delete<A, W>(console: &mut Console<W>, api: &A, id: BookId, assume_yes: bool) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    let mut state = BookListState::new();
    state.refresh(api).await;
    if !state.is_loaded() {
        if let Some(notice) = state.take_notice() {
            console.notice(&notice).await?;
        }
        return Ok(());
    }
    delete_flow(console, &mut state, api, id, assume_yes).await
}

async fn show<W>(console: &mut Console<W>, state: &mut BookListState) -> CliResult<()>
where
    W: AsyncWrite + Unpin,
{
    console
        .line(&format!("本のいちらん ({})", render::ordering_label(state.ordering())))
        .await?;
    if let Some(notice) = state.take_notice() {
        console.notice(&notice).await?;
    }
    if let Some(message) = state.empty_message() {
        console.line(message).await?;
    }
    if !state.books().is_empty() {
        console.line(&render::book_list(state.books())).await?;
    }
    Ok(())
}

async fn delete_flow<A, W>(
    console: &mut Console<W>,
    state: &mut BookListState,
    api: &A,
    id: BookId,
    assume_yes: bool,
) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    let Some(book) = state.select_for_delete(id).cloned() else {
        console.notice(&Notice::error(messages::NOT_FOUND)).await?;
        return Ok(());
    };

    if !assume_yes && !console.confirm(&render::delete_prompt(&book)).await? {
        state.cancel_delete();
        console.line("やめました").await?;
        return Ok(());
    }

    if state.confirm_delete(api).await {
        console
            .notice(&Notice::success(format!("「{}」をさくじょしました", book.title)))
            .await?;
    } else if let Some(notice) = state.take_notice() {
        console.notice(&notice).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeShelf;

    #[tokio::test]
    async fn test_delete_asks_then_removes() {
        let api = FakeShelf::with_books(&[(1, "ぐりとぐら"), (2, "いやいやえん")]);
        let input: &[u8] = b"y\n";
        let mut console = Console::new(input, Vec::new());

        delete(&mut console, &api, BookId(2), false).await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("「いやいやえん」をさくじょしますか？"));
        assert_eq!(api.deleted(), vec![BookId(2)]);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let api = FakeShelf::with_books(&[(1, "ぐりとぐら")]);
        let input: &[u8] = b"n\n";
        let mut console = Console::new(input, Vec::new());

        delete(&mut console, &api, BookId(1), false).await.unwrap();

        assert!(api.deleted().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let api = FakeShelf::with_books(&[(1, "ぐりとぐら")]);
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());

        delete(&mut console, &api, BookId(9), true).await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(messages::NOT_FOUND));
        assert!(api.deleted().is_empty());
    }

    #[tokio::test]
    async fn test_delete_needs_a_loaded_list() {
        let api = FakeShelf::with_books(&[(1, "ぐりとぐら")]).failing();
        let input: &[u8] = b"y\n";
        let mut console = Console::new(input, Vec::new());

        delete(&mut console, &api, BookId(1), false).await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(messages::CONNECTION_FAILED));
        assert!(!output.contains(messages::NOT_FOUND));
        assert!(api.deleted().is_empty());
    }

    #[tokio::test]
    async fn test_interactive_reorder_and_delete() {
        let api = FakeShelf::with_books(&[(1, "ぐりとぐら"), (2, "いやいやえん")]);
        let input: &[u8] = b"o\no\nd 1\ny\n\n";
        let mut console = Console::new(input, Vec::new());

        run(&mut console, &api, BookOrdering::NewestFirst).await.unwrap();

        assert_eq!(api.list_calls(), 3);
        assert_eq!(api.deleted(), vec![BookId(1)]);
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("本のいちらん (あいうえおじゅん)"));
    }

    #[tokio::test]
    async fn test_empty_shelf() {
        let api = FakeShelf::with_books(&[]);
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());

        print(&mut console, &api, BookOrdering::NewestFirst).await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(messages::NO_BOOKS_YET));
    }
}
