//! Seeded pseudo-random number generator for path simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo random number generator.
///
/// Wraps `StdRng` and remembers the seed it was created from, so a run can
/// always be replayed by logging [`seed`](Self::seed).
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(12345);
/// let mut rng2 = PricerRng::from_seed(12345);
///
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
#[derive(Clone, Debug)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator from a freshly drawn operating-system seed.
    ///
    /// The drawn seed is kept, so the run is still reproducible afterwards
    /// via [`seed`](Self::seed). It never exceeds
    /// [`MAX_SEED`](crate::mc::MAX_SEED).
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random::<u64>() >> 1)
    }

    /// Creates a generator from an optional seed, drawing one when absent.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniform value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean 0, variance 1).
    ///
    /// Sampling uses the Ziggurat method from `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Values are drawn front to back, so filling one buffer of length
    /// `a + b` consumes the stream exactly like filling `a` then `b`.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
