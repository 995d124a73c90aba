//! TUI Solitaire (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! only the binary needs: command-line configuration, the log sink, and the
//! session that ties keyboard actions to the board.

pub mod config;
pub mod logging;
pub mod session;

pub use tui_solitaire_core as core;
pub use tui_solitaire_input as input;
pub use tui_solitaire_term as term;
pub use tui_solitaire_types as types;
