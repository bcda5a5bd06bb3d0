//! # Shared Line Input
//!
//! One buffered reader handed out to several consumers.
//!
//! With the stdin scanner the terminal prompts and the scanned codes come
//! from the same stream. Each consumer holding its own `BufReader` would
//! swallow lines meant for the other, so both read through a clone of the
//! same [`SharedInput`] instead.
//!
//! ```text
//!   stdin ──► BufReader ──► SharedInput ──┬──► console prompts
//!                                         └──► LineScanner ("-")
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

type Reader = Box<dyn AsyncBufRead + Send + Unpin>;

struct Inner {
    reader: Reader,
    /// Bytes of a line whose read was cancelled before its newline arrived.
    pending: Vec<u8>,
}

/// Cloneable handle to a line-oriented reader.
#[derive(Clone)]
pub struct SharedInput {
    inner: Arc<Mutex<Inner>>,
}

impl SharedInput {
    pub fn new(reader: impl AsyncBufRead + Send + Unpin + 'static) -> Self {
        SharedInput {
            inner: Arc::new(Mutex::new(Inner {
                reader: Box::new(reader),
                pending: Vec::new(),
            })),
        }
    }

    /// Buffered standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }

    /// Reads the next line as raw bytes, without its `\n` / `\r\n`.
    /// `None` at end of input.
    ///
    /// Cancel safe: a partly read line is kept for the next call.
    pub async fn read_line(&self) -> io::Result<Option<Vec<u8>>> {
        let mut inner = self.inner.lock().await;
        let Inner { reader, pending } = &mut *inner;

        let read = reader.read_until(b'\n', pending).await?;
        if read == 0 && pending.is_empty() {
            return Ok(None);
        }

        let mut line = std::mem::take(pending);
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl fmt::Debug for SharedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedInput").finish_non_exhaustive()
    }
}
