//! Sources of the per-round price noise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simulator::RandomSource;

pub mod scripted;

pub use scripted::ScriptedRandom;

/// Non-deterministic source backed by the thread-local generator.
///
/// Fetches the thread-local generator on every draw so the source stays `Send`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible source: the same seed always yields the same rounds.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Picks the seeded source when a seed is given, the thread source otherwise.
pub fn from_seed(seed: Option<u64>) -> Box<dyn RandomSource + Send> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    }
}
