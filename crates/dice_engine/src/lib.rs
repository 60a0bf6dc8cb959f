//! # Dice Engine (Probability Kernel)
//!
//! The probability engine on top of [`dice_core`]:
//! - [`exact`]: exact sum distributions via iterative convolution
//! - [`sampler`]: Monte Carlo samplers for sums, craps, the five-dice
//!   all-equal game, and the head-to-head sum game
//! - [`compare`]: empirical-versus-theoretical discrepancy for one target
//!
//! Every entry point takes plain numeric (or optional-numeric) parameters
//! and returns plain values; no hidden I/O anywhere.
//!
//! ## Usage Example
//!
//! ```rust
//! use dice_engine::{experimental_sum_distribution, theoretical_sum_distribution};
//!
//! let exact = theoretical_sum_distribution(6, 2)?;
//! let sampled = experimental_sum_distribution(6, 2, 100_000, Some(42))?;
//!
//! let gap = (sampled[&7] - exact[&7]).abs();
//! assert!(gap < 0.01);
//! # Ok::<(), dice_core::DiceError>(())
//! ```

use std::collections::BTreeMap;

pub mod compare;
pub mod exact;
pub mod sampler;

/// Mapping from an integer key (face value or sum) to an occurrence count.
///
/// The counts of a table built over `trials` trials total `trials`.
pub type FrequencyTable = BTreeMap<u32, u64>;

/// Mapping from an integer sum to a probability in `[0, 1]`.
///
/// Theoretical tables cover the full achievable range with zero-mass
/// entries included; empirical tables only hold sums that occurred, and a
/// missing key reads as probability 0.
pub type DistributionTable = BTreeMap<u32, f64>;

pub use compare::{compare_probabilities, Comparison};
pub use exact::{all_equal_theoretical, theoretical_sum_distribution};
pub use sampler::{
    craps_step, experimental_sum_distribution, play_sum_game, sample_sum_frequencies,
    simulate_all_equal, simulate_craps, simulate_simple_rolls, CrapsState, GameTally,
    SumGameOutcome, SumGameResult, ALL_EQUAL_DICE, MAX_POINT_ROLLS,
};
