//! # Console
//!
//! Line-based terminal I/O for the screens. Input goes through a
//! [`SharedInput`] so a stdin scanner reads the same buffer; output is
//! generic so screens run against in-memory buffers in tests.

use std::io;

use shelf_core::Notice;
use shelf_register::SharedInput;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, BufReader, Stdout};

use crate::render;

pub struct Console<W> {
    input: SharedInput,
    output: W,
    color: bool,
}

/// Console over the process's stdin and stdout.
pub type StdConsole = Console<Stdout>;

pub fn stdio() -> StdConsole {
    Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).with_color(true)
}

impl<W> Console<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(input: impl AsyncBufRead + Send + Unpin + 'static, output: W) -> Self {
        Console {
            input: SharedInput::new(input),
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Handle onto the console's input, for a stdin scanner.
    pub fn input(&self) -> SharedInput {
        self.input.clone()
    }

    pub async fn line(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    pub async fn notice(&mut self, notice: &Notice) -> io::Result<()> {
        let text = render::notice(notice, self.color);
        self.line(&text).await
    }

    /// Prints `label` and reads one line. `None` at end of input.
    pub async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.output.write_all(label.as_bytes()).await?;
        self.output.write_all(b" > ").await?;
        self.output.flush().await?;

        let line = self.input.read_line().await?;
        Ok(line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Yes/no question; anything but `y`/`yes` is no.
    pub async fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(question).await?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "YES" | "はい")
        ))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
