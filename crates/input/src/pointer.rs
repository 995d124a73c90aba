//! Folds terminal mouse events into one [`PointerInput`] per tick.
//!
//! Terminals report button transitions and drags as separate events that can
//! arrive in bursts between ticks. The tracker queues them and hands out one
//! position per tick, so a press or release is always reported at the cell
//! where the button changed.

use std::collections::VecDeque;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{PointerInput, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Move,
    Press,
    Release,
}

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Position delivered with the last taken input.
    pos: Pos<i32>,
    down: bool,
    /// Events not yet delivered, in arrival order. Runs of moves are coalesced.
    pending: VecDeque<(Edge, Pos<i32>)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the primary button is currently held.
    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn pos(&self) -> Pos<i32> {
        self.pos
    }

    /// Record one mouse event. Buttons other than the primary one only move the pointer.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) {
        let pos = Pos::new(i32::from(event.column), i32::from(event.row));
        let edge = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.down = true;
                Edge::Press
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.down = false;
                Edge::Release
            }
            _ => Edge::Move,
        };

        if edge == Edge::Move {
            if let Some((Edge::Move, last)) = self.pending.back_mut() {
                *last = pos;
                return;
            }
        }
        self.pending.push_back((edge, pos));
    }

    /// Input for the current tick.
    ///
    /// One tick carries at most one position. Pending events are consumed in
    /// order until one would move the pointer after an edge, or would reorder
    /// a press and a release; the rest wait for the next call.
    pub fn take(&mut self) -> PointerInput {
        let mut input = PointerInput::at(self.pos);
        while let Some(&(edge, pos)) = self.pending.front() {
            let latched = input.pressed || input.released;
            let fits = match edge {
                Edge::Move | Edge::Press => !latched,
                Edge::Release => !input.released && (!input.pressed || pos == input.pos),
            };
            if !fits {
                break;
            }
            input.pos = pos;
            match edge {
                Edge::Move => {}
                Edge::Press => input.pressed = true,
                Edge::Release => input.released = true,
            }
            self.pending.pop_front();
        }
        self.pos = input.pos;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_move_only() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Moved, 4, 9));
        assert_eq!(t.take(), PointerInput::at(Pos::new(4, 9)));
    }

    #[test]
    fn test_press_drag_release_across_ticks() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 8));
        assert_eq!(t.take(), PointerInput::press(Pos::new(2, 8)));
        assert!(t.is_down());

        t.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 12));
        t.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 11, 13));
        assert_eq!(t.take(), PointerInput::at(Pos::new(11, 13)));

        t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 11, 13));
        assert_eq!(t.take(), PointerInput::release(Pos::new(11, 13)));
        assert!(!t.is_down());
        assert_eq!(t.take(), PointerInput::at(Pos::new(11, 13)));
    }

    #[test]
    fn test_click_within_one_tick_reports_both_edges() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 3));
        t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 3, 3));
        let input = t.take();
        assert!(input.pressed && input.released);
    }

    #[test]
    fn test_release_then_press_defers_the_press() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        t.take();
        t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1));
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));

        assert_eq!(t.take(), PointerInput::release(Pos::new(1, 1)));
        assert_eq!(t.take(), PointerInput::press(Pos::new(5, 5)));
        assert_eq!(t.take(), PointerInput::at(Pos::new(5, 5)));
    }

    #[test]
    fn test_second_click_in_one_tick_is_delivered_next_tick() {
        let mut t = PointerTracker::new();
        for _ in 0..2 {
            t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 7, 7));
            t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 7, 7));
        }
        let first = t.take();
        assert!(first.pressed && first.released);
        let second = t.take();
        assert!(second.pressed && second.released);
        assert_eq!(t.take(), PointerInput::at(Pos::new(7, 7)));
    }

    #[test]
    fn test_drag_after_press_waits_for_next_tick() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7));
        t.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 8));
        t.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 3, 9));

        assert_eq!(t.take(), PointerInput::press(Pos::new(3, 7)));
        assert_eq!(t.take(), PointerInput::at(Pos::new(3, 9)));
    }

    #[test]
    fn test_release_elsewhere_in_press_tick_is_deferred() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7));
        t.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 7));
        t.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 20, 7));

        assert_eq!(t.take(), PointerInput::press(Pos::new(3, 7)));
        assert_eq!(t.take(), PointerInput::release(Pos::new(20, 7)));
        assert_eq!(t.take(), PointerInput::at(Pos::new(20, 7)));
    }

    #[test]
    fn test_moves_before_a_press_are_absorbed() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Moved, 1, 1));
        t.handle_mouse_event(mouse(MouseEventKind::Moved, 2, 2));
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 4));
        assert_eq!(t.take(), PointerInput::press(Pos::new(4, 4)));
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut t = PointerTracker::new();
        t.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 2, 2));
        assert_eq!(t.take(), PointerInput::at(Pos::new(2, 2)));
        assert!(!t.is_down());
    }
}
