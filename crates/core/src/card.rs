//! Card module - a single playing card and the standard deck
//!
//! A card knows its identity (rank, suit), whether its face is shown, and the
//! board position it currently occupies. Positions are written by the owning
//! [`CardStack`](crate::stack::CardStack); nothing else moves a card.

use arrayvec::ArrayVec;

use crate::types::{Pos, Rank, Suit, CARD_DIMS, DECK_SIZE};

/// A playing card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
    pos: Pos<i32>,
}

impl Card {
    /// Create a face-up card at the origin.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: true,
            pos: Pos::default(),
        }
    }

    /// Builder-style variant of [`Card::new`] that starts face-down.
    pub fn face_down(rank: Rank, suit: Suit) -> Self {
        Self {
            face_up: false,
            ..Self::new(rank, suit)
        }
    }

    /// Top-left corner of the card's footprint.
    pub fn pos(&self) -> Pos<i32> {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: Pos<i32>) {
        self.pos = pos;
    }

    /// Whether `point` lies on this card's footprint.
    pub fn contains(&self, point: Pos<i32>) -> bool {
        CARD_DIMS.contains_at(self.pos, point)
    }

    /// Rank and suit identity, ignoring face and position.
    pub fn identity(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    /// Dense index in `0..52`, suit-major.
    pub fn index(&self) -> u8 {
        let suit = Suit::ALL
            .iter()
            .position(|s| *s == self.suit)
            .unwrap_or_default() as u8;
        suit * 13 + (self.rank.value() - 1)
    }

    /// Short label such as `10♥`.
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// All 52 cards in suit-major, rank-minor order, face-up.
pub fn standard_deck() -> ArrayVec<Card, DECK_SIZE> {
    let mut deck = ArrayVec::new();
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}
