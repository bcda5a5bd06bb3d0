//! # Search Screen

use shelf_api::BookApi;
use shelf_core::notice::messages;
use shelf_core::validation::validate_search_query;
use tokio::io::AsyncWrite;

use crate::console::Console;
use crate::error::CliResult;
use crate::render;
use crate::state::SearchState;

/// Prompts for titles until an empty line or end of input.
pub async fn run<A, W>(console: &mut Console<W>, api: &A) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    console.line("けんさく").await?;
    let mut state = SearchState::new();

    loop {
        let Some(query) = console.prompt("本のなまえをいれてね (Enter でもどる)").await? else {
            return Ok(());
        };
        if query.trim().is_empty() {
            return Ok(());
        }
        search_and_show(console, &mut state, api, &query).await?;
    }
}

/// Runs a single search given on the command line.
pub async fn once<A, W>(console: &mut Console<W>, api: &A, query: &str) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    let mut state = SearchState::new();
    search_and_show(console, &mut state, api, query).await
}

async fn search_and_show<A, W>(
    console: &mut Console<W>,
    state: &mut SearchState,
    api: &A,
    query: &str,
) -> CliResult<()>
where
    A: BookApi + ?Sized,
    W: AsyncWrite + Unpin,
{
    if validate_search_query(query).is_err() {
        return Ok(());
    }

    console.line(messages::SEARCHING).await?;
    state.search(api, query).await;

    if let Some(notice) = state.notice() {
        console.notice(notice).await?;
    }
    if let Some(message) = state.empty_message() {
        console.line(message).await?;
    }
    if state.has_searched() && !state.results().is_empty() {
        console
            .line(&format!("「{}」 {}さつ", state.query(), state.results().len()))
            .await?;
        console.line(&render::book_list(state.results())).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeShelf;

    #[tokio::test]
    async fn test_search_shows_hits_then_not_found() {
        let api = FakeShelf::with_books(&[(1, "ぐりとぐら"), (2, "いやいやえん")]);
        let input: &[u8] = "ぐら\nゾロリ\n\n".as_bytes();
        let mut console = Console::new(input, Vec::new());

        run(&mut console, &api).await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("「ぐら」 1さつ"));
        assert!(output.contains("[1] ぐりとぐら"));
        assert!(output.contains(messages::NOT_FOUND));
        assert_eq!(api.search_calls(), 2);
    }

    #[tokio::test]
    async fn test_blank_query_is_not_sent() {
        let api = FakeShelf::with_books(&[(1, "ぐりとぐら")]);
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());

        once(&mut console, &api, "   ").await.unwrap();

        assert_eq!(api.search_calls(), 0);
        assert!(console.into_output().is_empty());
    }

    #[tokio::test]
    async fn test_failure_shows_error() {
        let api = FakeShelf::with_books(&[]).failing();
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());

        once(&mut console, &api, "ぐら").await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains(messages::CONNECTION_FAILED));
        assert!(!output.contains(messages::NOT_FOUND));
    }
}
