//! # Shelf Terminal Application
//!
//! Screens, view state, and configuration for the `shelf` binary.
//!
//! ## Module Organization
//! ```text
//! shelf_cli/
//! ├── lib.rs          ◄─── You are here (App setup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── ShelfConfig (file, environment, flags)
//! ├── console.rs      ◄─── Line-based terminal I/O
//! ├── render.rs       ◄─── Text layout for books and notices
//! ├── state/
//! │   ├── list.rs     ◄─── Ordering and two-phase delete
//! │   └── search.rs   ◄─── Query and searched flag
//! ├── screens/
//! │   ├── menu.rs     ◄─── Four destinations + quit
//! │   ├── scan.rs     ◄─── Barcode capture (Ctrl-C closes)
//! │   ├── manual.rs   ◄─── Typed ISBN
//! │   ├── list.rs     ◄─── Book list
//! │   └── search.rs   ◄─── Title search
//! └── error.rs        ◄─── CliError
//! ```

pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod render;
pub mod screens;
pub mod state;

#[cfg(test)]
mod testing;

use std::path::Path;

use shelf_api::BookClient;
use shelf_register::{CaptureRequest, LineScanner, SharedInput};
use tokio::io::AsyncWrite;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Command, ConfigCommand};
use config::{ConfigError, ShelfConfig};
use console::Console;
use error::CliResult;

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never interleave with screen output.
///
/// ## Log Levels
/// - Default: `warn,shelf=info`
/// - `RUST_LOG=shelf=debug` - capture state transitions and requests
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,shelf=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// App
// =============================================================================

/// Validated configuration plus the book service client.
pub struct App {
    config: ShelfConfig,
    client: BookClient,
}

impl App {
    pub fn new(config: ShelfConfig) -> CliResult<Self> {
        config.validate()?;
        let client = BookClient::new(&config.api)?;
        info!(base_url = %client.base_url(), scanner = %config.scanner.device, "Shelf ready");
        Ok(App { config, client })
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// The configured scanner. A `-` device reads the console's own input.
    fn camera(&self, stdin: &SharedInput) -> LineScanner {
        LineScanner::from_settings(&self.config.scanner).with_stdin(stdin.clone())
    }

    fn capture_request(&self) -> CaptureRequest {
        CaptureRequest {
            facing: self.config.scanner.facing,
            ..CaptureRequest::default()
        }
    }

    /// Runs one command. `Config` commands are handled by [`run_config`].
    pub async fn run<W>(&self, command: Command, console: &mut Console<W>) -> CliResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        let api = &self.client;
        let stdin = console.input();
        match command {
            Command::Menu => {
                let request = self.capture_request();
                screens::menu::run(console, api, || self.camera(&stdin), &request).await
            }
            Command::Scan => screens::scan::run(console, self.camera(&stdin), self.capture_request(), api).await,
            Command::Add { isbn } => screens::manual::add(console, api, &isbn).await,
            Command::List { order } => screens::list::print(console, api, order.into()).await,
            Command::Delete { id, yes } => screens::list::delete(console, api, id, yes).await,
            Command::Search { query } => screens::search::once(console, api, &query.join(" ")).await,
            Command::Config { action } => run_config(action, &self.config, None, console).await,
        }
    }
}

/// `config show` / `config init`. Needs no client, so an invalid config
/// can still be inspected.
pub async fn run_config<W>(
    action: ConfigCommand,
    config: &ShelfConfig,
    path: Option<&Path>,
    console: &mut Console<W>,
) -> CliResult<()>
where
    W: AsyncWrite + Unpin,
{
    match action {
        ConfigCommand::Show => {
            console.line(&config.to_toml()?).await?;
            if let Err(e) = config.validate() {
                console.line(&format!("# {}", e)).await?;
            }
        }
        ConfigCommand::Init { force } => {
            let target = path
                .map(Path::to_path_buf)
                .or_else(ShelfConfig::default_config_path)
                .ok_or(ConfigError::NoConfigPath)?;
            if target.exists() && !force {
                console
                    .line(&format!("{} already exists (use --force to overwrite)", target.display()))
                    .await?;
                return Ok(());
            }
            let written = ShelfConfig::default().save(Some(&target))?;
            console.line(&format!("wrote {}", written.display())).await?;
        }
    }
    Ok(())
}
