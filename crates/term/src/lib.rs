//! Terminal rendering for the solitaire board.
//!
//! This is a small, game-oriented rendering layer. It avoids widget
//! toolkits and renders into a plain framebuffer that is diffed and flushed
//! to a crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map board cells 1:1 onto terminal cells so mouse input needs no scaling
//! - Only emit cells that changed between frames

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_solitaire_core as core;
pub use tui_solitaire_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
