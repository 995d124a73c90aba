//! Terminal input (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and folds mouse events into the
//! per-tick [`crate::types::PointerInput`] the board consumes.

pub mod map;
pub mod pointer;

pub use tui_solitaire_types as types;

pub use map::{handle_key_event, should_quit};
pub use pointer::PointerTracker;
