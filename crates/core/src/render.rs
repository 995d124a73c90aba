//! Renderer contract.
//!
//! The core never draws. It walks its piles and tells a [`CardRenderer`]
//! which cards are visible and where, and where empty piles need a
//! placeholder.

use crate::card::Card;
use crate::stack::CardStack;
use crate::types::{Layout, Pos};

pub trait CardRenderer {
    /// Draw one visible card. The card carries rank, suit, face-up flag and position.
    fn draw_card(&mut self, card: &Card);

    /// Draw the marker of an empty pile at its base position.
    fn draw_placeholder(&mut self, pos: Pos<i32>);
}

/// Emit a single stack: a placeholder when empty, every card when spread,
/// only the top card when collapsed.
pub fn render_stack<R: CardRenderer + ?Sized>(stack: &CardStack, renderer: &mut R) {
    match (stack.layout(), stack.top_card()) {
        (_, None) => renderer.draw_placeholder(stack.base_pos()),
        (Layout::Spread, Some(_)) => {
            for card in stack.cards() {
                renderer.draw_card(card);
            }
        }
        (Layout::Collapsed, Some(top)) => renderer.draw_card(top),
    }
}

/// Emit a stack that is in the pointer's hand or in flight; no placeholder.
pub fn render_floating<R: CardRenderer + ?Sized>(stack: &CardStack, renderer: &mut R) {
    if !stack.is_empty() {
        render_stack(stack, renderer);
    }
}
