use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform random draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// `StdRng`-backed source; reproducible when built from a seed.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Returns the same value on every draw. `0.5` cancels the load noise.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRandom(pub f64);

impl ConstantRandom {
    pub fn midpoint() -> Self {
        Self(0.5)
    }
}

impl RandomSource for ConstantRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
