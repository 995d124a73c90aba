//! Terminal solitaire runner (default binary).
//!
//! It uses crossterm for keyboard and mouse input and a custom
//! framebuffer-based renderer (no widget toolkit).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use tui_solitaire::config::Config;
use tui_solitaire::input::{handle_key_event, should_quit, PointerTracker};
use tui_solitaire::logging;
use tui_solitaire::session::Session;
use tui_solitaire::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_solitaire::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_args();
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting after error: {:#}", e);
    }
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut session = Session::new(config);
    let view = BoardView::new();
    let mut pointer = PointerTracker::new();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut drawn: Option<u64> = None;

    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();

    loop {
        // Render only when something visible changed.
        let fingerprint = session.board().fingerprint();
        if drawn != Some(fingerprint) {
            view.render_into(session.board(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some(fingerprint);
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit after {} moves", session.board().moves());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                        drawn = None;
                    }
                }
                Event::Mouse(mouse) => pointer.handle_mouse_event(mouse),
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let mut input = pointer.take();
            input.pos = view.to_board(input.pos);
            session.update(input);
        }
    }
}
