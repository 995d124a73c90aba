//! BoardView: maps a `core::Board` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! One board cell is one terminal cell, so pointer coordinates only need the
//! view origin subtracted. A card is drawn as a 7x5 box:
//!
//! ```text
//! ┌A♥───┐
//! │     │
//! │  ♥  │
//! │     │
//! └───A♥┘
//! ```
//!
//! Spread stacks overlap by all but one row, so the top edge carries the
//! rank and suit of every card underneath.

use crate::core::{Board, Card, CardRenderer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Pos, BOARD_DIMS, CARD_DIMS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FELT: Rgb = Rgb::new(18, 78, 42);
const CARD_FACE: Rgb = Rgb::new(236, 236, 230);
const RED_INK: Rgb = Rgb::new(200, 30, 40);
const BLACK_INK: Rgb = Rgb::new(20, 20, 20);
const BACK_FG: Rgb = Rgb::new(120, 150, 230);
const BACK_BG: Rgb = Rgb::new(30, 45, 110);

const TABLE: CellStyle = CellStyle::new(Rgb::new(200, 220, 200), FELT);
const PLACEHOLDER: CellStyle = CellStyle::new(Rgb::new(90, 150, 110), FELT);

/// Width reserved right of the board for the status panel.
const PANEL_WIDTH: i32 = 18;

/// A lightweight terminal renderer for the solitaire board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardView {
    origin: Pos<i32>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place board cell (0, 0) at terminal cell `origin`.
    pub fn with_origin(mut self, origin: Pos<i32>) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> Pos<i32> {
        self.origin
    }

    /// Terminal cell to board coordinates.
    pub fn to_board(&self, terminal: Pos<i32>) -> Pos<i32> {
        terminal - self.origin
    }

    /// Render the board into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, board: &Board, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));
        fb.fill_rect_at(
            self.origin.x,
            self.origin.y,
            BOARD_DIMS.width,
            BOARD_DIMS.height,
            ' ',
            TABLE,
        );

        board.render(&mut CardPainter {
            fb: &mut *fb,
            origin: self.origin,
        });

        self.draw_side_panel(fb, board);

        if board.is_won() {
            self.draw_overlay_text(fb, "YOU WIN!  n: new game");
        } else if i32::from(viewport.width) < self.origin.x + BOARD_DIMS.width
            || i32::from(viewport.height) < self.origin.y + BOARD_DIMS.height
        {
            let style = CellStyle::new(Rgb::new(255, 220, 120), Rgb::new(0, 0, 0)).bold();
            fb.put_str(0, 0, "terminal too small", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, board: &Board) {
        let x = self.origin.x + BOARD_DIMS.width + 2;
        if x < 0 || x + PANEL_WIDTH > i32::from(fb.width()) {
            return;
        }
        let (Ok(px), Ok(mut y)) = (u16::try_from(x), u16::try_from(self.origin.y.max(0) + 1))
        else {
            return;
        };

        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let hint = CellStyle::default().dim();

        fb.put_str(px, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(px, y, board.moves(), value);
        y = y.saturating_add(2);

        fb.put_str(px, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_u32(px, y, board.seed(), value);
        y = y.saturating_add(2);

        fb.put_str(px, y, "MOTION", label);
        y = y.saturating_add(1);
        fb.put_str(px, y, board.motion_policy().as_str(), value);
        y = y.saturating_add(2);

        for line in ["n  new game", "r  redeal", "m  motion", "q  quit"] {
            fb.put_str(px, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, text: &str) {
        let width = text.chars().count() as i32;
        let x = self.origin.x + (BOARD_DIMS.width - width) / 2;
        let y = self.origin.y + BOARD_DIMS.height / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_at(x, y, text, style);
    }
}

/// Paints the cards the board emits, offset by the view origin.
struct CardPainter<'a> {
    fb: &'a mut FrameBuffer,
    origin: Pos<i32>,
}

impl CardRenderer for CardPainter<'_> {
    fn draw_card(&mut self, card: &Card) {
        let p = card.pos() + self.origin;
        let (w, h) = (CARD_DIMS.width, CARD_DIMS.height);

        if !card.face_up {
            let back = CellStyle::new(BACK_FG, BACK_BG);
            self.fb.fill_rect_at(p.x, p.y, w, h, '░', back);
            self.fb.draw_box_at(p.x, p.y, w, h, back);
            return;
        }

        let ink = match card.suit.color() {
            Color::Red => RED_INK,
            Color::Black => BLACK_INK,
        };
        let face = CellStyle::new(ink, CARD_FACE);
        let edge = CellStyle::new(Rgb::new(110, 110, 110), CARD_FACE);
        let index = card.label();
        let index_w = index.chars().count() as i32;

        self.fb.fill_rect_at(p.x, p.y, w, h, ' ', face);
        self.fb.draw_box_at(p.x, p.y, w, h, edge);
        self.fb.put_str_at(p.x + 1, p.y, &index, face.bold());
        self.fb
            .put_char_at(p.x + w / 2, p.y + h / 2, card.suit.symbol(), face);
        self.fb
            .put_str_at(p.x + w - 1 - index_w, p.y + h - 1, &index, face.bold());
    }

    fn draw_placeholder(&mut self, pos: Pos<i32>) {
        let p = pos + self.origin;
        self.fb
            .draw_box_at(p.x, p.y, CARD_DIMS.width, CARD_DIMS.height, PLACEHOLDER.dim());
    }
}
