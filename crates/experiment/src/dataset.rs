use anyhow::{Result, ensure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_MAX_VALUE: i64 = 10_000_000;

/// Produces arrays of keys drawn uniformly from `[1, max_value]`.
pub struct DataGenerator {
    rng: StdRng,
    max_value: i64,
}

impl DataGenerator {
    pub fn new(seed: Option<u64>, max_value: i64) -> Result<Self> {
        ensure!(max_value >= 1, "max value must be at least 1, got {max_value}");
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { rng, max_value })
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn generate(&mut self, n: usize) -> Vec<i64> {
        (0..n)
            .map(|_| self.rng.random_range(1..=self.max_value))
            .collect()
    }
}
