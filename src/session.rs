//! A playing session: the board plus the keyboard actions around it.

use log::{debug, info};

use crate::config::Config;
use crate::core::{Board, DealRng, PressOutcome, ReleaseOutcome, TickReport};
use crate::types::{GameAction, PointerInput};

pub struct Session {
    board: Board,
    /// Source of seeds for `n`; seeded from the first deal so sessions replay.
    seeds: DealRng,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            board: Board::new(config.seed).with_motion(config.motion),
            seeds: DealRng::new(config.seed.rotate_left(16) ^ 0x9E37_79B9),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Feed one tick of pointer input to the board.
    pub fn update(&mut self, input: PointerInput) -> TickReport {
        let report = self.board.update(input);
        if let Some(PressOutcome::Refused(why)) = report.press {
            debug!("press refused: {}", why);
        }
        if let Some(ReleaseOutcome::Refused(why)) = report.release {
            debug!("release refused: {}", why);
        }
        report
    }

    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::NewGame => {
                let seed = self.seeds.next_u32();
                self.board.new_game(seed);
            }
            GameAction::Redeal => self.board.redeal(),
            GameAction::CycleMotion => {
                let next = self.board.motion_policy().cycle();
                info!("motion policy: {}", next.as_str());
                self.board.set_motion_policy(next);
            }
        }
    }
}
