//! Empirical versus theoretical probability comparison.

use dice_core::Result;

use crate::exact::theoretical_sum_distribution;
use crate::sampler::experimental_sum_distribution;

/// Discrepancy between the empirical and exact probability of one target
/// sum.
///
/// Produced by [`compare_probabilities`]; contains raw numbers only, text
/// formatting belongs to the report and CLI layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    /// Empirical probability of the target sum, in `[0, 1]`.
    pub empirical: f64,
    /// Exact probability of the target sum, in `[0, 1]`.
    pub theoretical: f64,
    /// Signed difference `(empirical - theoretical)` in percentage points.
    pub diff_pp: f64,
    /// Empirical probability times the trial count, rounded to nearest.
    pub expected_successes: u64,
}

/// Compares the Monte Carlo estimate of `P(sum == target_sum)` against the
/// exact convolution value.
///
/// A `target_sum` outside `[dice, dice * faces]` is a valid query that
/// simply never occurs: both probabilities are 0.0 and the difference is
/// 0.0 percentage points, not an error.
///
/// # Errors
///
/// - [`dice_core::DiceError::InvalidTrialCount`] if `trials == 0`
/// - [`dice_core::DiceError::InvalidFaceCount`] if `faces < 1`
///
/// # Examples
///
/// ```rust
/// use dice_engine::compare_probabilities;
///
/// // Sum 1 is unreachable with two dice.
/// let cmp = compare_probabilities(1, 6, 2, 1000, Some(1))?;
/// assert_eq!(cmp.empirical, 0.0);
/// assert_eq!(cmp.theoretical, 0.0);
/// assert_eq!(cmp.diff_pp, 0.0);
/// # Ok::<(), dice_core::DiceError>(())
/// ```
pub fn compare_probabilities(
    target_sum: u32,
    faces: u32,
    dice: u32,
    trials: u64,
    seed: Option<u64>,
) -> Result<Comparison> {
    let empirical_dist = experimental_sum_distribution(faces, dice, trials, seed)?;
    let empirical = empirical_dist.get(&target_sum).copied().unwrap_or(0.0);

    let theoretical_dist = theoretical_sum_distribution(faces, dice)?;
    let theoretical = theoretical_dist.get(&target_sum).copied().unwrap_or(0.0);

    Ok(Comparison {
        empirical,
        theoretical,
        diff_pp: (empirical - theoretical) * 100.0,
        expected_successes: (empirical * trials as f64).round() as u64,
    })
}
