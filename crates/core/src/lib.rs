//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the solitaire rules, the pile state machine and the
//! motion controller. It has **no dependencies** on terminals or I/O:
//! the host feeds it one [`PointerInput`](types::PointerInput) per tick and
//! reads the board back through [`CardRenderer`](render::CardRenderer).
//!
//! # Module Structure
//!
//! - [`card`]: a single card and the standard 52-card deck
//! - [`stack`]: ordered piles with derived card positions, split and merge
//! - [`motion`]: fixed-step and unit-step interpolation with exactly-once completion
//! - [`board`]: deal, pick-up, drop, recycle and animated transfers
//! - [`render`]: the draw contract a host implements
//! - [`rng`]: seeded shuffling for reproducible deals
//!
//! # Rules
//!
//! - Runs of face-up cards may be picked up from a working stack
//! - Working stacks build down in alternating colors; only a King starts an empty one
//! - Foundations build up by suit from the Ace, one card at a time
//! - Pressing the empty draw pile turns the waste pile back over
//!
//! # Example
//!
//! ```
//! use tui_solitaire_core::{Board, ModeKind, PressOutcome};
//! use tui_solitaire_core::types::{working_stack_pos, MotionPolicy, PointerInput};
//!
//! let mut board = Board::new(12345).with_motion(MotionPolicy::Instant);
//!
//! // Press on the single face-up card of the first working stack.
//! let on_card = working_stack_pos(0).translate(1, 1);
//! let report = board.update(PointerInput::press(on_card));
//! assert!(matches!(report.press, Some(PressOutcome::PickedUp { cards: 1, .. })));
//! assert_eq!(board.mode(), ModeKind::Holding);
//!
//! // Releasing where nothing accepts it sends it home.
//! board.update(PointerInput::release(on_card));
//! assert_eq!(board.mode(), ModeKind::Idle);
//! assert_eq!(board.working_stacks()[0].len(), 1);
//! ```
//!
//! # Timing
//!
//! The host calls [`Board::update`](board::Board::update) every
//! [`TICK_MS`](types::TICK_MS) milliseconds. Motions count ticks, not time.

pub mod board;
pub mod card;
pub mod motion;
pub mod render;
pub mod rng;
pub mod stack;

pub use tui_solitaire_types as types;

// Re-export commonly used types for convenience
pub use board::{
    Board, Commit, ModeKind, PileContents, PileId, PressOutcome, Refusal, ReleaseOutcome,
    TickReport,
};
pub use card::{standard_deck, Card};
pub use motion::{Animation, Interpolation, Motion, Movable, Progress};
pub use render::{render_floating, render_stack, CardRenderer};
pub use rng::DealRng;
pub use stack::CardStack;
