//! Monte Carlo samplers.
//!
//! Repeated-trial simulators for sum distributions and the three game
//! modes (craps, the five-dice all-equal game, the head-to-head sum game).
//!
//! Every public entry point takes an optional seed and constructs one
//! [`DiceRng`] before any draws; the trials inside a call share that one
//! stream and nothing else. Inner helpers take `&mut DiceRng` so tests can
//! pin exact sequences.

use std::collections::BTreeMap;

use dice_core::{roll_many, roll_one, roll_set, DiceError, DiceRng, Result};

use crate::{DistributionTable, FrequencyTable};

/// Number of dice in the all-equal game (all five must match).
pub const ALL_EQUAL_DICE: u32 = 5;

/// Defensive cap on point-phase rolls in a single craps round.
///
/// A fair pair of dice resolves the point phase with probability 1 and a
/// small expected roll count; the cap only matters for hostile or broken
/// randomness sources. A capped round counts as a loss.
pub const MAX_POINT_ROLLS: u32 = 1_000_000;

/// Win/loss tally of a repeated game simulation.
///
/// For craps `wins` and `losses` are literal; for the all-equal game a
/// success (all five dice matching) is tallied as a win. The invariant
/// `wins + losses == trials` holds for every sampler that returns one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameTally {
    /// Trials resolved as a win (or success).
    pub wins: u64,
    /// Trials resolved as a loss (or failure).
    pub losses: u64,
}

impl GameTally {
    /// Total number of trials tallied.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.wins + self.losses
    }

    /// Fraction of trials won, in `[0, 1]`.
    ///
    /// Undefined for an empty tally; the samplers always produce at least
    /// one trial, so an empty tally here is a caller bug.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        debug_assert!(self.trials() > 0, "win_rate on an empty tally");
        self.wins as f64 / self.trials() as f64
    }
}

/// Outcome of one head-to-head sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SumGameOutcome {
    /// The player's sum was strictly greater.
    PlayerWin,
    /// The opponent's sum was strictly greater.
    PlayerLoss,
    /// Both sums were equal.
    Tie,
}

/// Result of one head-to-head sum game, with both sums for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumGameResult {
    /// Discriminated outcome of the comparison.
    pub outcome: SumGameOutcome,
    /// The player's roll-set total.
    pub player_sum: u32,
    /// The opponent's roll-set total.
    pub opponent_sum: u32,
}

/// State of a single craps round.
///
/// The round starts at [`CrapsState::ComeOut`] and moves through
/// [`craps_step`] transitions until it reaches a terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrapsState {
    /// Fresh round, no point established yet.
    ComeOut,
    /// A come-out roll established this point; it must reappear before a 7.
    Point(u32),
    /// Terminal: the round is won.
    Won,
    /// Terminal: the round is lost.
    Lost,
}

impl CrapsState {
    /// Whether the round has resolved.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, CrapsState::Won | CrapsState::Lost)
    }
}

/// Advances a craps round by one two-die roll summing to `sum`.
///
/// Come-out roll: 7 or 11 wins, 2, 3 or 12 loses, anything else becomes
/// the point. Point phase: rolling the point again wins, a 7 loses, and
/// any other sum leaves the point unchanged. Terminal states are absorbing.
pub fn craps_step(state: CrapsState, sum: u32) -> CrapsState {
    match state {
        CrapsState::ComeOut => match sum {
            7 | 11 => CrapsState::Won,
            2 | 3 | 12 => CrapsState::Lost,
            point => CrapsState::Point(point),
        },
        CrapsState::Point(point) => {
            if sum == point {
                CrapsState::Won
            } else if sum == 7 {
                CrapsState::Lost
            } else {
                CrapsState::Point(point)
            }
        }
        terminal => terminal,
    }
}

/// Plays one craps round to resolution, returning `true` on a win.
///
/// Drives [`craps_step`] with fresh two-die (6-faced) rolls, bounded by
/// [`MAX_POINT_ROLLS`].
fn craps_round(rng: &mut DiceRng) -> Result<bool> {
    let mut state = CrapsState::ComeOut;
    for _ in 0..=MAX_POINT_ROLLS {
        let sum = roll_one(rng, 6)? + roll_one(rng, 6)?;
        state = craps_step(state, sum);
        match state {
            CrapsState::Won => return Ok(true),
            CrapsState::Lost => return Ok(false),
            _ => {}
        }
    }
    // Cap exhausted without resolution; count the round as lost.
    Ok(false)
}

/// Tallies `trials` roll-set sums into a frequency table.
///
/// The injectable-RNG primitive underlying
/// [`experimental_sum_distribution`]. The table's counts total `trials`
/// and its keys all lie in `[dice, dice * faces]`.
///
/// # Errors
///
/// Returns [`DiceError::InvalidFaceCount`] if `faces < 1`.
pub fn sample_sum_frequencies(
    rng: &mut DiceRng,
    faces: u32,
    dice: u32,
    trials: u64,
) -> Result<FrequencyTable> {
    let mut counts = BTreeMap::new();
    for _ in 0..trials {
        let sum: u32 = roll_set(rng, dice, faces)?.iter().sum();
        *counts.entry(sum).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Estimates the sum distribution of `dice` `faces`-sided dice from
/// `trials` Monte Carlo trials.
///
/// Seeds once, draws `trials` independent roll-sets, sums each, and
/// divides every tally by `trials`. Sums that never occurred are absent
/// from the table; readers treat a missing key as probability 0.
///
/// # Errors
///
/// - [`DiceError::InvalidTrialCount`] if `trials == 0` (the division
///   requires at least one trial)
/// - [`DiceError::InvalidFaceCount`] if `faces < 1`
///
/// # Examples
///
/// ```rust
/// use dice_engine::experimental_sum_distribution;
///
/// let dist = experimental_sum_distribution(6, 2, 10_000, Some(42))?;
/// let total: f64 = dist.values().sum();
/// assert!((total - 1.0).abs() < 1e-9);
/// # Ok::<(), dice_core::DiceError>(())
/// ```
pub fn experimental_sum_distribution(
    faces: u32,
    dice: u32,
    trials: u64,
    seed: Option<u64>,
) -> Result<DistributionTable> {
    if trials == 0 {
        return Err(DiceError::InvalidTrialCount(trials));
    }
    let mut rng = DiceRng::new(seed);
    let counts = sample_sum_frequencies(&mut rng, faces, dice, trials)?;
    Ok(counts
        .into_iter()
        .map(|(sum, count)| (sum, count as f64 / trials as f64))
        .collect())
}

/// Simulates `trials` independent craps rounds.
///
/// Seeds once; every round shares the one stream. The returned tally
/// satisfies `wins + losses == trials`.
///
/// # Errors
///
/// Returns [`DiceError::InvalidTrialCount`] if `trials == 0`.
pub fn simulate_craps(trials: u64, seed: Option<u64>) -> Result<GameTally> {
    if trials == 0 {
        return Err(DiceError::InvalidTrialCount(trials));
    }
    let mut rng = DiceRng::new(seed);
    let mut tally = GameTally::default();
    for _ in 0..trials {
        if craps_round(&mut rng)? {
            tally.wins += 1;
        } else {
            tally.losses += 1;
        }
    }
    Ok(tally)
}

/// Simulates `trials` rounds of the five-dice all-equal game.
///
/// Each round rolls [`ALL_EQUAL_DICE`] dice and succeeds iff all five
/// values are identical. Successes are tallied as wins.
///
/// # Errors
///
/// - [`DiceError::InvalidTrialCount`] if `trials == 0`
/// - [`DiceError::InvalidFaceCount`] if `faces < 1`
pub fn simulate_all_equal(trials: u64, faces: u32, seed: Option<u64>) -> Result<GameTally> {
    if trials == 0 {
        return Err(DiceError::InvalidTrialCount(trials));
    }
    let mut rng = DiceRng::new(seed);
    let mut tally = GameTally::default();
    for _ in 0..trials {
        let set = roll_set(&mut rng, ALL_EQUAL_DICE, faces)?;
        if set.iter().all(|&v| v == set[0]) {
            tally.wins += 1;
        } else {
            tally.losses += 1;
        }
    }
    Ok(tally)
}

/// Plays one head-to-head sum game.
///
/// Seeds once, rolls a player roll-set then an opponent roll-set of
/// `dice` `faces`-sided dice each, and compares the sums.
///
/// # Errors
///
/// Returns [`DiceError::InvalidFaceCount`] if `faces < 1`.
pub fn play_sum_game(dice: u32, faces: u32, seed: Option<u64>) -> Result<SumGameResult> {
    let mut rng = DiceRng::new(seed);
    let player_sum: u32 = roll_set(&mut rng, dice, faces)?.iter().sum();
    let opponent_sum: u32 = roll_set(&mut rng, dice, faces)?.iter().sum();
    let outcome = match player_sum.cmp(&opponent_sum) {
        std::cmp::Ordering::Greater => SumGameOutcome::PlayerWin,
        std::cmp::Ordering::Less => SumGameOutcome::PlayerLoss,
        std::cmp::Ordering::Equal => SumGameOutcome::Tie,
    };
    Ok(SumGameResult {
        outcome,
        player_sum,
        opponent_sum,
    })
}

/// Rolls one `faces`-sided die `trials` times for the plain-rolls mode.
///
/// Returns the per-face frequency table and the raw sample sequence; the
/// report layer needs both (the table for the percentage rows and the
/// histogram, the samples for summary statistics).
///
/// # Errors
///
/// - [`DiceError::InvalidTrialCount`] if `trials == 0`
/// - [`DiceError::InvalidFaceCount`] if `faces < 1`
pub fn simulate_simple_rolls(
    faces: u32,
    trials: u64,
    seed: Option<u64>,
) -> Result<(FrequencyTable, Vec<u32>)> {
    if trials == 0 {
        return Err(DiceError::InvalidTrialCount(trials));
    }
    let mut rng = DiceRng::new(seed);
    let samples = roll_many(&mut rng, trials, faces)?;
    let mut counts = BTreeMap::new();
    for &face in &samples {
        *counts.entry(face).or_insert(0) += 1;
    }
    Ok((counts, samples))
}
