//! Exact sum distributions via discrete convolution.
//!
//! The sum of `dice` independent uniform dice has a probability mass
//! function obtained by convolving the single-die uniform PMF with itself
//! `dice - 1` times. Everything here is deterministic and pure: the result
//! depends only on `(faces, dice)`.

use std::collections::BTreeMap;

use dice_core::{DiceError, Result};

use crate::DistributionTable;

/// Computes the exact probability mass function of the sum of `dice`
/// independent `faces`-sided dice.
///
/// The returned table has exactly one entry per integer sum in
/// `[dice, dice * faces]` — that is `dice * (faces - 1) + 1` entries —
/// with zero-mass sums included as `0.0`. Probabilities over the full
/// range sum to 1.0 within floating-point tolerance.
///
/// `dice == 1` is the single-die uniform PMF with no convolution step;
/// `dice == 0` is the degenerate distribution `{0: 1.0}` (an empty
/// roll-set always sums to 0).
///
/// Cost is O(dice² · faces) time and O(dice · faces) space, which is fine
/// at the intended scale of a few dozen dice and faces.
///
/// # Errors
///
/// Returns [`DiceError::InvalidFaceCount`] if `faces < 1`.
///
/// # Examples
///
/// ```rust
/// use dice_engine::theoretical_sum_distribution;
///
/// let dist = theoretical_sum_distribution(6, 2)?;
/// assert_eq!(dist.len(), 11);
/// assert!((dist[&7] - 6.0 / 36.0).abs() < 1e-12);
/// # Ok::<(), dice_core::DiceError>(())
/// ```
pub fn theoretical_sum_distribution(faces: u32, dice: u32) -> Result<DistributionTable> {
    if faces < 1 {
        return Err(DiceError::InvalidFaceCount(faces));
    }
    if dice == 0 {
        let mut table = BTreeMap::new();
        table.insert(0, 1.0);
        return Ok(table);
    }

    let per_face = 1.0 / f64::from(faces);

    // Dense PMF indexed by sum; index 0 is unreachable padding.
    let mut current = vec![0.0; faces as usize + 1];
    for value in 1..=faces as usize {
        current[value] = per_face;
    }

    for _ in 1..dice {
        let mut next = vec![0.0; current.len() + faces as usize];
        for (sum, &mass) in current.iter().enumerate() {
            if mass == 0.0 {
                continue;
            }
            for value in 1..=faces as usize {
                next[sum + value] += mass * per_face;
            }
        }
        current = next;
    }

    Ok((dice..=dice * faces)
        .map(|sum| (sum, current[sum as usize]))
        .collect())
}

/// Closed-form success probability of the five-dice all-equal game.
///
/// The first die is free; each of the remaining four must match it, so the
/// probability is `1 / faces⁴`.
///
/// # Errors
///
/// Returns [`DiceError::InvalidFaceCount`] if `faces < 1`.
pub fn all_equal_theoretical(faces: u32) -> Result<f64> {
    if faces < 1 {
        return Err(DiceError::InvalidFaceCount(faces));
    }
    Ok(1.0 / f64::from(faces).powi(4))
}
