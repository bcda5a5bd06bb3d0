//! # Shelf Entry Point
//!
//! ## Startup Sequence
//! 1. Parse the command line
//! 2. Initialize tracing (stderr)
//! 3. Load configuration (file → environment → flags)
//! 4. Build the book service client
//! 5. Run the requested screen, or the menu

use anyhow::Context;
use clap::Parser;
use shelf_cli::cli::{Cli, Command};
use shelf_cli::config::ShelfConfig;
use shelf_cli::{console, App};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    shelf_cli::init_tracing();

    let mut config = ShelfConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_flag_overrides(cli.api_url, cli.scanner);

    let mut console = console::stdio();
    let command = cli.command.unwrap_or(Command::Menu);

    if let Command::Config { action } = command {
        shelf_cli::run_config(action, &config, cli.config.as_deref(), &mut console).await?;
        return Ok(());
    }

    let app = App::new(config).context("invalid configuration")?;
    app.run(command, &mut console).await?;
    Ok(())
}
