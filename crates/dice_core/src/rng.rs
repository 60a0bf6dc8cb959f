//! Pseudo-random number generator wrapper for dice simulations.
//!
//! This module provides [`DiceRng`], a seeded PRNG wrapper that offers
//! reproducible uniform integer draws for every simulation above it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Dice simulation random number generator.
///
/// Provides seeded, reproducible uniform integer generation. A simulation
/// that accepts a seed parameter constructs exactly one `DiceRng` before
/// any draws and never reseeds mid-sequence, so a given (seed, operation)
/// pair is fully reproducible.
///
/// # Examples
///
/// ```rust
/// use dice_core::DiceRng;
///
/// let mut rng = DiceRng::from_seed(42);
/// let face = rng.roll_uniform(1, 6);
/// assert!((1..=6).contains(&face));
/// ```
pub struct DiceRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, when one was given.
    seed: Option<u64>,
}

impl DiceRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of draws,
    /// enabling reproducible simulations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dice_core::DiceRng;
    ///
    /// let mut rng1 = DiceRng::from_seed(12345);
    /// let mut rng2 = DiceRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.roll_uniform(1, 20), rng2.roll_uniform(1, 20));
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a new RNG instance seeded from operating-system entropy.
    ///
    /// Draws from an entropy-seeded instance are not reproducible.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates an RNG from an optional seed.
    ///
    /// `Some(seed)` gives a deterministic stream, `None` defers to
    /// operating-system entropy. This mirrors the optional `--seed` flag
    /// every simulation entry point accepts.
    #[inline]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation, if one was given.
    ///
    /// This is useful for logging and debugging reproducibility issues.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws one integer uniformly from `[low, high]`, both ends inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`; callers validate their ranges first (a die
    /// face range `[1, faces]` is checked by the roller).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dice_core::DiceRng;
    ///
    /// let mut rng = DiceRng::from_seed(7);
    /// for _ in 0..100 {
    ///     let v = rng.roll_uniform(1, 6);
    ///     assert!((1..=6).contains(&v));
    /// }
    /// ```
    #[inline]
    pub fn roll_uniform(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }
}
