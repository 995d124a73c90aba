//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! Board coordinates are terminal cells: `x` grows to the right, `y` grows
//! downward, and the board's logical resolution equals its terminal footprint,
//! so a pointer event at column/row `(c, r)` is the board point `(c, r)`.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CARD_DIMS` | 7x5 | Footprint of a single card |
//! | `SPREAD_SPACING` | 1 | Vertical offset between cards of a spread stack |
//! | `PILE_GAP` | 2 | Horizontal gap between neighbouring piles |
//! | `BOARD_DIMS` | 63x31 | Fixed logical board resolution |
//!
//! # Timing
//!
//! - `TICK_MS`: 16ms fixed timestep (~60 FPS)
//! - `DEFAULT_STEP_PERCENT`: fixed-step motion advances 5% of its vector per tick
//!
//! # Examples
//!
//! ```
//! use tui_solitaire_types::{Pos, Rank, Suit};
//!
//! assert!(Rank::Two.is_one_more_than(Rank::Ace));
//! assert!(!Rank::Ace.is_one_more_than(Rank::King));
//! assert!(Suit::Heart.is_opposite_color(Suit::Spade));
//!
//! let p = Pos::new(3, 4).translate(1, -1);
//! assert_eq!(p, Pos::new(4, 3));
//! ```

use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of working (tableau) stacks.
pub const WORKING_STACKS: usize = 7;

/// Number of foundation piles.
pub const FOUNDATIONS: usize = 4;

/// Total number of piles on the board (draw + waste + working + foundations).
pub const PILE_COUNT: usize = 2 + WORKING_STACKS + FOUNDATIONS;

/// Footprint of a single card in terminal cells.
pub const CARD_DIMS: Dims = Dims::new(7, 5);

/// Vertical distance between consecutive cards of a spread stack.
pub const SPREAD_SPACING: i32 = 1;

/// Horizontal gap between neighbouring piles.
pub const PILE_GAP: i32 = 2;

/// Margin between the board edge and the outermost piles.
pub const BOARD_MARGIN: i32 = 1;

/// Horizontal distance from one pile column to the next.
pub const PILE_STRIDE: i32 = CARD_DIMS.width + PILE_GAP;

/// Row on which the working stacks start.
pub const WORKING_ROW_Y: i32 = BOARD_MARGIN + CARD_DIMS.height + 1;

/// Fixed logical board resolution.
///
/// Tall enough for a working stack holding six face-down cards plus a full
/// King-to-Ace run.
pub const BOARD_DIMS: Dims = Dims::new(
    2 * BOARD_MARGIN + WORKING_STACKS as i32 * PILE_STRIDE - PILE_GAP,
    WORKING_ROW_Y + 18 * SPREAD_SPACING + CARD_DIMS.height + BOARD_MARGIN,
);

/// Base position of the draw pile (top-left corner of the board).
pub const DRAW_PILE_POS: Pos<i32> = Pos::new(BOARD_MARGIN, BOARD_MARGIN);

/// Base position of the overturned (waste) pile, right of the draw pile.
pub const WASTE_PILE_POS: Pos<i32> = Pos::new(BOARD_MARGIN + PILE_STRIDE, BOARD_MARGIN);

/// Base position of working stack `index`.
pub const fn working_stack_pos(index: usize) -> Pos<i32> {
    Pos::new(BOARD_MARGIN + index as i32 * PILE_STRIDE, WORKING_ROW_Y)
}

/// Base position of foundation `index`; foundations sit above working stacks 3..=6.
pub const fn foundation_pos(index: usize) -> Pos<i32> {
    Pos::new(BOARD_MARGIN + (3 + index as i32) * PILE_STRIDE, BOARD_MARGIN)
}

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default per-tick advance of the fixed-step motion policy, in percent.
pub const DEFAULT_STEP_PERCENT: u8 = 5;

// ============================================================================
// Geometry
// ============================================================================

/// Numeric coordinate usable in a [`Pos`].
pub trait Coord:
    Copy + Debug + Default + PartialEq + PartialOrd + Add<Output = Self> + Sub<Output = Self>
{
    fn to_f64(self) -> f64;
}

impl Coord for i32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Coord for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// 2D position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<N = i32> {
    pub x: N,
    pub y: N,
}

impl<N> Pos<N> {
    pub const fn new(x: N, y: N) -> Self {
        Self { x, y }
    }
}

impl<N: Coord> Pos<N> {
    /// Offset by `(dx, dy)`.
    pub fn translate(self, dx: N, dy: N) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Offset by another position treated as a vector.
    pub fn translate_pos(self, offset: Self) -> Self {
        self.translate(offset.x, offset.y)
    }

    /// Component-wise difference `self - other`.
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// True when both axes differ by strictly less than `epsilon`.
    pub fn almost_eq(self, other: Self, epsilon: N) -> bool {
        let eps = epsilon.to_f64();
        (self.x.to_f64() - other.x.to_f64()).abs() < eps
            && (self.y.to_f64() - other.y.to_f64()).abs() < eps
    }

    pub fn to_f64(self) -> Pos<f64> {
        Pos::new(self.x.to_f64(), self.y.to_f64())
    }
}

impl Pos<f64> {
    /// Round each axis to the nearest integer cell.
    pub fn round_to_i32(self) -> Pos<i32> {
        Pos::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl<N: Coord> Add for Pos<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.translate_pos(rhs)
    }
}

impl<N: Coord> Sub for Pos<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Pos::sub(self, rhs)
    }
}

/// Width and height of a rectangular footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub width: i32,
    pub height: i32,
}

impl Dims {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `point` lies inside the rectangle of these dimensions anchored
    /// at `origin`. The rectangle is half-open: the far edges are excluded.
    pub fn contains_at(self, origin: Pos<i32>, point: Pos<i32>) -> bool {
        point.x >= origin.x
            && point.x < origin.x + self.width
            && point.y >= origin.y
            && point.y < origin.y + self.height
    }
}

// ============================================================================
// Cards
// ============================================================================

/// Card rank, Ace (1) through King (13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value (Ace = 1, King = 13).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`].
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get((value as usize).checked_sub(1)?).copied()
    }

    /// `self == other + 1`. There is no wraparound: Ace is not above King.
    pub fn is_one_more_than(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }

    /// `self + 1 == other`.
    pub fn is_one_less_than(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Suit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

    pub fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }

    pub fn is_opposite_color(self, other: Suit) -> bool {
        self.color() != other.color()
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// How a stack positions its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Fanned downward, every card visible.
    Spread,
    /// Every card at the base position, only the top one visible.
    Collapsed,
}

/// How a released stack travels to its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionPolicy {
    /// No animation: the transfer commits on release.
    Instant,
    /// Advance `percent` of the original start-to-target vector per tick.
    FixedStep { percent: u8 },
    /// Move one cell per axis per tick toward the target.
    UnitStep,
}

impl MotionPolicy {
    /// Next policy in the `m` key cycle.
    pub fn cycle(self) -> Self {
        match self {
            MotionPolicy::Instant => MotionPolicy::FixedStep {
                percent: DEFAULT_STEP_PERCENT,
            },
            MotionPolicy::FixedStep { .. } => MotionPolicy::UnitStep,
            MotionPolicy::UnitStep => MotionPolicy::Instant,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionPolicy::Instant => "instant",
            MotionPolicy::FixedStep { .. } => "fixed-step",
            MotionPolicy::UnitStep => "unit-step",
        }
    }
}

impl Default for MotionPolicy {
    fn default() -> Self {
        MotionPolicy::FixedStep {
            percent: DEFAULT_STEP_PERCENT,
        }
    }
}

// ============================================================================
// Host contract
// ============================================================================

/// Pointer state delivered by the host once per tick.
///
/// `pressed`/`released` are edges of the primary button observed since the
/// previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerInput {
    pub pos: Pos<i32>,
    pub pressed: bool,
    pub released: bool,
}

impl PointerInput {
    pub fn at(pos: Pos<i32>) -> Self {
        Self {
            pos,
            pressed: false,
            released: false,
        }
    }

    pub fn press(pos: Pos<i32>) -> Self {
        Self {
            pressed: true,
            ..Self::at(pos)
        }
    }

    pub fn release(pos: Pos<i32>) -> Self {
        Self {
            released: true,
            ..Self::at(pos)
        }
    }
}

/// Keyboard-driven game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    NewGame,
    Redeal,
    CycleMotion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_adjacency_has_no_wraparound() {
        assert!(Rank::King.is_one_more_than(Rank::Queen));
        assert!(Rank::Queen.is_one_less_than(Rank::King));
        assert!(!Rank::Ace.is_one_more_than(Rank::King));
        assert!(!Rank::King.is_one_less_than(Rank::Ace));
        assert!(!Rank::Five.is_one_more_than(Rank::Five));
    }

    #[test]
    fn rank_values_round_trip_through_from_value() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn suit_colors_partition_the_suits() {
        assert!(Suit::Heart.is_opposite_color(Suit::Club));
        assert!(Suit::Diamond.is_opposite_color(Suit::Spade));
        assert!(!Suit::Heart.is_opposite_color(Suit::Diamond));
        assert!(!Suit::Club.is_opposite_color(Suit::Spade));
    }

    #[test]
    fn almost_eq_is_strict() {
        let a = Pos::new(0.0, 0.0);
        assert!(a.almost_eq(Pos::new(0.4, -0.4), 0.5));
        assert!(!a.almost_eq(Pos::new(0.5, 0.0), 0.5));
        assert!(Pos::new(3, 3).almost_eq(Pos::new(3, 3), 1));
        assert!(!Pos::new(3, 3).almost_eq(Pos::new(4, 3), 1));
    }

    #[test]
    fn dims_containment_is_half_open() {
        let origin = Pos::new(10, 10);
        assert!(CARD_DIMS.contains_at(origin, Pos::new(10, 10)));
        assert!(CARD_DIMS.contains_at(origin, Pos::new(16, 14)));
        assert!(!CARD_DIMS.contains_at(origin, Pos::new(17, 10)));
        assert!(!CARD_DIMS.contains_at(origin, Pos::new(10, 15)));
        assert!(!CARD_DIMS.contains_at(origin, Pos::new(9, 12)));
    }

    #[test]
    fn piles_fit_inside_the_board() {
        let last = working_stack_pos(WORKING_STACKS - 1);
        assert!(last.x + CARD_DIMS.width <= BOARD_DIMS.width);
        assert_eq!(foundation_pos(FOUNDATIONS - 1).x, last.x);
        assert!(WASTE_PILE_POS.x + CARD_DIMS.width < foundation_pos(0).x);
    }

    #[test]
    fn motion_policy_cycles_through_all_variants() {
        let start = MotionPolicy::Instant;
        let a = start.cycle();
        let b = a.cycle();
        assert_eq!(a.as_str(), "fixed-step");
        assert_eq!(b, MotionPolicy::UnitStep);
        assert_eq!(b.cycle(), start);
    }
}
