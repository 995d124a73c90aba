//! CardStack module - an ordered pile of cards anchored at a base position
//!
//! Cards are stored bottom-to-top (the last card is the top). Every card's
//! position is derived from the stack's base position, the card's index, and
//! the stack's [`Layout`]:
//!
//! - `Spread`: card `i` sits at `base + (0, i * SPREAD_SPACING)`
//! - `Collapsed`: every card sits at `base`
//!
//! Every public mutator ends with [`CardStack::normalize`], so the derived
//! positions can never go stale.

use crate::card::Card;
use crate::motion::Movable;
use crate::rng::DealRng;
use crate::types::{Layout, Pos, CARD_DIMS, SPREAD_SPACING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStack {
    cards: Vec<Card>,
    base: Pos<i32>,
    layout: Layout,
}

impl CardStack {
    /// Create an empty stack.
    pub fn new(base: Pos<i32>, layout: Layout) -> Self {
        Self {
            cards: Vec::new(),
            base,
            layout,
        }
    }

    /// Create a stack owning `cards` (bottom-to-top).
    pub fn with_cards(cards: Vec<Card>, base: Pos<i32>, layout: Layout) -> Self {
        let mut stack = Self {
            cards,
            base,
            layout,
        };
        stack.normalize();
        stack
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom-to-top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn bottom_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn base_pos(&self) -> Pos<i32> {
        self.base
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Position of the card at `index` under the current layout.
    pub fn slot_pos(&self, index: usize) -> Pos<i32> {
        match self.layout {
            Layout::Spread => self.base.translate(0, index as i32 * SPREAD_SPACING),
            Layout::Collapsed => self.base,
        }
    }

    /// Position the next appended card would occupy.
    pub fn next_slot_pos(&self) -> Pos<i32> {
        self.slot_pos(self.cards.len())
    }

    /// Whether `point` lies on the footprint of a card at the base position.
    ///
    /// This is the hit area of an empty pile's placeholder.
    pub fn base_contains(&self, point: Pos<i32>) -> bool {
        CARD_DIMS.contains_at(self.base, point)
    }

    /// Whether `point` lies on the top card, or on the placeholder when empty.
    pub fn top_contains(&self, point: Pos<i32>) -> bool {
        match self.top_card() {
            Some(top) => top.contains(point),
            None => self.base_contains(point),
        }
    }

    /// Move a single card onto the top.
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
        self.normalize();
    }

    /// Move every card of `other` onto the top, keeping their order.
    ///
    /// Appending an empty stack is a no-op.
    pub fn append_stack(&mut self, other: CardStack) {
        if other.is_empty() {
            return;
        }
        self.cards.extend(other.cards);
        self.normalize();
    }

    /// Split off `[index, len)` into a new stack with the same layout.
    ///
    /// The new stack is based where its bottom card sat before the split, so
    /// nothing visibly moves. Returns `None` when `index` is out of range.
    pub fn split_at(&mut self, index: usize) -> Option<CardStack> {
        if index >= self.cards.len() {
            log::trace!("split index {} out of range for {} cards", index, self.cards.len());
            return None;
        }
        let base = self.cards[index].pos();
        let cards = self.cards.split_off(index);
        self.normalize();
        Some(CardStack::with_cards(cards, base, self.layout))
    }

    /// Split at the card under `point`.
    ///
    /// Cards are scanned bottom-to-top. A card that contains `point` is chosen
    /// only if it is the top card or the card above it does not also contain
    /// `point`; otherwise the scan moves on, so overlapping cards resolve to
    /// the one drawn last at that point. Returns `None` when no card matches.
    pub fn split_at_position(&mut self, point: Pos<i32>) -> Option<CardStack> {
        let last = self.cards.len().checked_sub(1)?;
        let index = (0..=last).find(|&i| {
            self.cards[i].contains(point) && (i == last || !self.cards[i + 1].contains(point))
        })?;
        self.split_at(index)
    }

    /// Remove every card, leaving this stack empty.
    pub fn take_all(&mut self) -> CardStack {
        let cards = std::mem::take(&mut self.cards);
        CardStack::with_cards(cards, self.base, self.layout)
    }

    pub fn reverse(&mut self) {
        self.cards.reverse();
        self.normalize();
    }

    pub fn shuffle(&mut self, rng: &mut DealRng) {
        rng.shuffle(&mut self.cards);
        self.normalize();
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.normalize();
    }

    pub fn move_base_to(&mut self, pos: Pos<i32>) {
        self.base = pos;
        self.normalize();
    }

    pub fn set_all_face_up(&mut self, face_up: bool) {
        for card in &mut self.cards {
            card.face_up = face_up;
        }
        self.normalize();
    }

    /// Turn the top card face-up. Returns whether a card was turned over.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.face_up => {
                top.face_up = true;
                true
            }
            _ => false,
        }
    }

    /// Recompute every card's position from the base, index and layout.
    fn normalize(&mut self) {
        let base = self.base;
        let layout = self.layout;
        for (i, card) in self.cards.iter_mut().enumerate() {
            let pos = match layout {
                Layout::Spread => base.translate(0, i as i32 * SPREAD_SPACING),
                Layout::Collapsed => base,
            };
            card.set_pos(pos);
        }
    }
}

impl Movable for CardStack {
    fn position(&self) -> Pos<i32> {
        self.base
    }

    fn move_to(&mut self, pos: Pos<i32>) {
        self.move_base_to(pos);
    }
}
