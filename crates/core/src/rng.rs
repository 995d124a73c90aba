//! RNG module - deterministic deal randomness
//!
//! The deal is the only place randomness enters a game. A seeded LCG keeps
//! deals reproducible: the same seed always yields the same layout, which the
//! `r` (redeal) key and the tests rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct DealRng {
    state: u32,
}

impl DealRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point of the multiply step.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// Uses the high bits (the low bits of an LCG cycle with short periods)
    /// and rejects the biased tail so every value is equally likely.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        let zone = u32::MAX - (u32::MAX % bound);
        loop {
            let v = self.next_u32().rotate_left(16);
            if v < zone {
                return v % bound;
            }
        }
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}
