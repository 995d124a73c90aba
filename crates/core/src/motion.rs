//! Motion module - per-tick interpolation toward a target position
//!
//! A [`Motion`] knows where it started and where it is going. Each tick it
//! reads the live position of the thing being moved and computes the next
//! position. Two policies are supported:
//!
//! - **Fixed-step**: every tick advances a constant percentage of the original
//!   start-to-target vector, clamped at the target. It finishes within
//!   `ceil(100 / percent)` ticks.
//! - **Unit-step**: every tick moves one cell per axis toward the target (the
//!   sign of the remaining delta). It finishes within `max(|dx|, |dy|)` ticks.
//!
//! [`Animation`] pairs a motion with a completion payload. Stepping consumes
//! the animation and hands the payload back exactly once, when the moved
//! object is "almost equal" to the target.

use crate::types::{MotionPolicy, Pos};

/// Positions within this distance on both axes count as arrived.
pub const ARRIVAL_EPSILON: i32 = 1;

/// Smallest per-tick fraction a fixed-step motion accepts.
const MIN_FRACTION: f64 = 0.001;

/// Something with a live position that a motion can drive.
pub trait Movable {
    fn position(&self) -> Pos<i32>;
    fn move_to(&mut self, pos: Pos<i32>);
}

/// Interpolation rule for an in-flight motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolation {
    /// Fraction of the start-to-target vector covered per tick, in `(0, 1]`.
    FixedStep { fraction: f64 },
    UnitStep,
}

impl Interpolation {
    /// Interpolation for an animated policy; `None` for [`MotionPolicy::Instant`].
    pub fn from_policy(policy: MotionPolicy) -> Option<Self> {
        match policy {
            MotionPolicy::Instant => None,
            MotionPolicy::FixedStep { percent } => Some(Interpolation::FixedStep {
                fraction: f64::from(percent.clamp(1, 100)) / 100.0,
            }),
            MotionPolicy::UnitStep => Some(Interpolation::UnitStep),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    start: Pos<i32>,
    target: Pos<i32>,
    interpolation: Interpolation,
    ticks: u32,
}

impl Motion {
    pub fn new(start: Pos<i32>, target: Pos<i32>, interpolation: Interpolation) -> Self {
        let interpolation = match interpolation {
            Interpolation::FixedStep { fraction } => Interpolation::FixedStep {
                fraction: fraction.clamp(MIN_FRACTION, 1.0),
            },
            other => other,
        };
        Self {
            start,
            target,
            interpolation,
            ticks: 0,
        }
    }

    pub fn start(&self) -> Pos<i32> {
        self.start
    }

    pub fn target(&self) -> Pos<i32> {
        self.target
    }

    /// Ticks advanced so far.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Upper bound on the ticks needed to arrive from `start`.
    pub fn max_ticks(&self) -> u32 {
        match self.interpolation {
            Interpolation::FixedStep { fraction } => {
                // Same arithmetic as `advance`, so the bound is exact.
                let mut n = 1u32;
                while f64::from(n) * fraction < 1.0 {
                    n += 1;
                }
                n
            }
            Interpolation::UnitStep => {
                let d = self.target - self.start;
                d.x.unsigned_abs().max(d.y.unsigned_abs())
            }
        }
    }

    pub fn arrived(&self, current: Pos<i32>) -> bool {
        current.almost_eq(self.target, ARRIVAL_EPSILON)
    }

    /// Compute the position for the next tick given the live `current` position.
    pub fn advance(&mut self, current: Pos<i32>) -> Pos<i32> {
        self.ticks = self.ticks.saturating_add(1);
        match self.interpolation {
            Interpolation::FixedStep { fraction } => {
                let t = (f64::from(self.ticks) * fraction).min(1.0);
                let start = self.start.to_f64();
                let delta = self.target.to_f64() - start;
                Pos::new(start.x + delta.x * t, start.y + delta.y * t).round_to_i32()
            }
            Interpolation::UnitStep => {
                let d = self.target - current;
                current.translate(d.x.signum(), d.y.signum())
            }
        }
    }
}

/// Result of stepping an [`Animation`].
#[derive(Debug)]
pub enum Progress<T> {
    Running(Animation<T>),
    Done(T),
}

/// A motion plus the payload to hand back once it completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation<T> {
    motion: Motion,
    payload: T,
}

impl<T> Animation<T> {
    pub fn new(motion: Motion, payload: T) -> Self {
        Self { motion, payload }
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Advance one tick, moving `subject` along the motion.
    ///
    /// Completion is checked against the live position after moving.
    pub fn step<M: Movable + ?Sized>(mut self, subject: &mut M) -> Progress<T> {
        let current = subject.position();
        if !self.motion.arrived(current) {
            let next = self.motion.advance(current);
            log::trace!(
                "motion tick {}: {:?} -> {:?} (target {:?})",
                self.motion.ticks(),
                current,
                next,
                self.motion.target()
            );
            subject.move_to(next);
        }
        if self.motion.arrived(subject.position()) {
            Progress::Done(self.payload)
        } else {
            Progress::Running(self)
        }
    }
}
