use simulator::RandomSource;

/// Replays a fixed list of samples, wrapping around when exhausted.
pub struct ScriptedRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Samples must lie in `[0, 1)`. An empty list behaves like `[0.5]`.
    pub fn new(samples: Vec<f64>) -> Self {
        let samples = if samples.is_empty() { vec![0.5] } else { samples };
        Self { samples, cursor: 0 }
    }

    /// Scripts the resulting price changes instead of the raw samples.
    ///
    /// `max_change` is the configured per-round bound; a factor of `0.05`
    /// with a bound of `0.1` is replayed as the sample `0.75`. Factors must lie
    /// in `[-max_change, max_change)`; `max_change` itself would map to the
    /// excluded sample `1.0`.
    pub fn from_factors(factors: &[f64], max_change: f64) -> Self {
        let samples = factors
            .iter()
            .map(|factor| (factor / max_change + 1.0) / 2.0)
            .collect();
        Self::new(samples)
    }

    /// A source whose every draw is a zero price change.
    pub fn flat() -> Self {
        Self::new(vec![0.5])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
