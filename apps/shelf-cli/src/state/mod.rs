//! # View State
//!
//! What the list and search screens remember between keystrokes.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         View State                                      │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │       BookListState          │   │         SearchState          │   │
//! │  │                              │   │                              │   │
//! │  │  • books (server order)      │   │  • last query                │   │
//! │  │  • ordering                  │   │  • results                   │   │
//! │  │  • pending delete target     │   │  • searched flag             │   │
//! │  │  • notice                    │   │  • notice                    │   │
//! │  └──────────────┬───────────────┘   └──────────────┬───────────────┘   │
//! │                 └──────────────┬───────────────────┘                   │
//! │                                ▼                                        │
//! │                         &dyn BookApi                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither type owns the client; each operation borrows it, so the states
//! can be driven by a fake in tests.

mod list;
mod search;

pub use list::BookListState;
pub use search::SearchState;
