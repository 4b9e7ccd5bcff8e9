//! Random Source
//!
//! The random walk is the only consumer of randomness. The session owns one
//! source, seeded once when the session is built.

use std::time::{SystemTime, UNIX_EPOCH};

/// Uniform integer draws
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: u32) -> u32 {
        self.u32(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// Seed derived from wall-clock time.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Build the default source, from `seed` or the clock.
pub fn seeded(seed: Option<u64>) -> fastrand::Rng {
    let seed = seed.unwrap_or_else(seed_from_clock);
    log::debug!("seeding random source with {}", seed);
    fastrand::Rng::with_seed(seed)
}

/// Replays a fixed list of draws, wrapping each into range.
///
/// Useful wherever a reproducible walk is needed without depending on the
/// generator's internal sequence.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % bound
    }
}
