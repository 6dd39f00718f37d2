//! RNG trait abstraction for the simulation
//!
//! Allows World to work with both:
//! - a seeded `rand` engine (the driver, determinism tests)
//! - scripted RNGs that force every roll (rule scenario tests)

/// Random number source used by the material rules
pub trait SimRng {
    /// Uniform draw in `[0, n)`. `n` must be non-zero.
    fn roll(&mut self, n: u32) -> u32;

    /// "1 in N" check. Succeeds when the draw lands on residue 1, so `n == 1`
    /// never succeeds.
    fn one_in(&mut self, n: u32) -> bool {
        self.roll(n) == 1
    }

    /// Random horizontal direction, +1 or -1
    fn random_side(&mut self) -> i32 {
        if self.roll(2) == 0 { 1 } else { -1 }
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: rand::Rng> SimRng for T {
    fn roll(&mut self, n: u32) -> u32 {
        self.gen_range(0..n)
    }
}
