//! Injectable randomness for price offsets and supplier categories.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of the two random draws made per fruit.
pub trait Randomness {
    /// Uniform in `[0, 1)`.
    fn unit_offset(&mut self) -> f64;

    /// Uniform in `0..bound`. `bound` must be positive.
    fn category(&mut self, bound: i32) -> i32;
}

/// [`Randomness`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngRandomness<R> {
    rng: R,
}

impl<R: Rng> RngRandomness<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngRandomness<StdRng> {
    /// Seeded from `seed` when given, otherwise from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Randomness for RngRandomness<R> {
    fn unit_offset(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn category(&mut self, bound: i32) -> i32 {
        self.rng.gen_range(0..bound)
    }
}
