//! # Command Line
//!
//! ```text
//! shelf [--config PATH] [--api-url URL] [--scanner PATH] [COMMAND]
//!
//!   (none) | menu          interactive menu
//!   scan                   barcode registration
//!   add <ISBN>             register one ISBN
//!   list [--order ORDER]   print the shelf (newest | title)
//!   delete <ID> [--yes]    delete one book
//!   search <QUERY>         title search
//!   config show | init     effective config / write defaults
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use shelf_core::{BookId, BookOrdering};

#[derive(Debug, Parser)]
#[command(name = "shelf", version, about = "Register and browse the books on your shelf")]
pub struct Cli {
    /// Config file (default: platform config dir, shelf/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Book service base URL, including the /api prefix
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Barcode scanner device; "-" reads from stdin
    #[arg(long, global = true, value_name = "PATH")]
    pub scanner: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open the interactive menu
    Menu,

    /// Register books by scanning their barcodes
    Scan,

    /// Register one book by ISBN (hyphens allowed)
    Add { isbn: String },

    /// List registered books
    List {
        #[arg(long, value_enum, default_value_t = OrderArg::Newest)]
        order: OrderArg,
    },

    /// Delete a book by id
    Delete {
        id: BookId,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Search books by title
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Most recently registered first
    Newest,
    /// By title
    Title,
}

impl From<OrderArg> for BookOrdering {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Newest => BookOrdering::NewestFirst,
            OrderArg::Title => BookOrdering::TitleAscending,
        }
    }
}
