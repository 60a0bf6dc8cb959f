//! Dice rolling primitives.
//!
//! Every roll draws from an injected [`DiceRng`], so callers control
//! seeding and tests can pin exact sequences.

use crate::error::{DiceError, Result};
use crate::rng::DiceRng;

/// Rolls a single die with `faces` faces, returning a value in `[1, faces]`.
///
/// # Errors
///
/// Returns [`DiceError::InvalidFaceCount`] if `faces < 1`.
///
/// # Examples
///
/// ```rust
/// use dice_core::{roll_one, DiceRng};
///
/// let mut rng = DiceRng::from_seed(42);
/// let outcome = roll_one(&mut rng, 6).unwrap();
/// assert!((1..=6).contains(&outcome));
/// ```
#[inline]
pub fn roll_one(rng: &mut DiceRng, faces: u32) -> Result<u32> {
    if faces < 1 {
        return Err(DiceError::InvalidFaceCount(faces));
    }
    Ok(rng.roll_uniform(1, faces))
}

/// Rolls `dice` dice together, returning the outcomes in generation order.
///
/// `dice == 0` is valid and yields an empty set (its sum is 0).
///
/// # Errors
///
/// Returns [`DiceError::InvalidFaceCount`] if `faces < 1`.
pub fn roll_set(rng: &mut DiceRng, dice: u32, faces: u32) -> Result<Vec<u32>> {
    if faces < 1 {
        return Err(DiceError::InvalidFaceCount(faces));
    }
    Ok((0..dice).map(|_| rng.roll_uniform(1, faces)).collect())
}

/// Rolls one die `count` times, returning the outcomes in generation order.
///
/// Unlike [`roll_set`], which groups draws into one trial, this is the
/// flat sequence used by the plain single-die simulation mode.
///
/// # Errors
///
/// Returns [`DiceError::InvalidFaceCount`] if `faces < 1`.
pub fn roll_many(rng: &mut DiceRng, count: u64, faces: u32) -> Result<Vec<u32>> {
    if faces < 1 {
        return Err(DiceError::InvalidFaceCount(faces));
    }
    Ok((0..count).map(|_| rng.roll_uniform(1, faces)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_one_in_range() {
        let mut rng = DiceRng::from_seed(1);
        for _ in 0..1000 {
            let v = roll_one(&mut rng, 8).unwrap();
            assert!((1..=8).contains(&v));
        }
    }

    #[test]
    fn test_roll_one_single_face() {
        let mut rng = DiceRng::from_seed(1);
        assert_eq!(roll_one(&mut rng, 1).unwrap(), 1);
    }

    #[test]
    fn test_roll_one_zero_faces_rejected() {
        let mut rng = DiceRng::from_seed(1);
        assert_eq!(roll_one(&mut rng, 0), Err(DiceError::InvalidFaceCount(0)));
    }

    #[test]
    fn test_roll_set_length_and_range() {
        let mut rng = DiceRng::from_seed(2);
        let set = roll_set(&mut rng, 5, 6).unwrap();
        assert_eq!(set.len(), 5);
        assert!(set.iter().all(|v| (1..=6).contains(v)));
    }

    #[test]
    fn test_roll_set_zero_dice_is_empty() {
        let mut rng = DiceRng::from_seed(2);
        assert!(roll_set(&mut rng, 0, 6).unwrap().is_empty());
    }

    #[test]
    fn test_roll_set_zero_faces_rejected() {
        let mut rng = DiceRng::from_seed(2);
        assert_eq!(roll_set(&mut rng, 3, 0), Err(DiceError::InvalidFaceCount(0)));
    }

    #[test]
    fn test_roll_many_reproducible() {
        let mut rng1 = DiceRng::from_seed(42);
        let mut rng2 = DiceRng::from_seed(42);
        assert_eq!(
            roll_many(&mut rng1, 500, 20).unwrap(),
            roll_many(&mut rng2, 500, 20).unwrap()
        );
    }

    #[test]
    fn test_roll_many_zero_faces_rejected() {
        let mut rng = DiceRng::from_seed(3);
        assert_eq!(roll_many(&mut rng, 10, 0), Err(DiceError::InvalidFaceCount(0)));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_roll_set_outcomes_in_range(
                seed in any::<u64>(),
                dice in 0u32..=50,
                faces in 1u32..=100,
            ) {
                let mut rng = DiceRng::from_seed(seed);
                let set = roll_set(&mut rng, dice, faces).unwrap();
                prop_assert_eq!(set.len() as u32, dice);
                prop_assert!(set.iter().all(|&v| (1..=faces).contains(&v)));
            }

            #[test]
            fn prop_roll_many_outcomes_in_range(
                seed in any::<u64>(),
                count in 0u64..=500,
                faces in 1u32..=100,
            ) {
                let mut rng = DiceRng::from_seed(seed);
                let samples = roll_many(&mut rng, count, faces).unwrap();
                prop_assert_eq!(samples.len() as u64, count);
                prop_assert!(samples.iter().all(|&v| (1..=faces).contains(&v)));
            }

            #[test]
            fn prop_roll_one_in_range(seed in any::<u64>(), faces in 1u32..=100) {
                let mut rng = DiceRng::from_seed(seed);
                let v = roll_one(&mut rng, faces).unwrap();
                prop_assert!((1..=faces).contains(&v));
            }
        }
    }
}
