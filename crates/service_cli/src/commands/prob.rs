//! Probability-comparison command implementation
//!
//! Compares the Monte Carlo estimate of one target sum against the exact
//! convolution value and renders the discrepancy block.

use tracing::info;

use dice_engine::compare_probabilities;

use crate::Result;

/// Run the comparison and return the report text.
pub fn run(
    target_sum: u32,
    faces: u32,
    dice: u32,
    rolls: u64,
    seed: Option<u64>,
) -> Result<String> {
    info!("Starting probability comparison...");
    info!("  Target sum: {}", target_sum);
    info!("  Faces: {} | Dice: {} | Trials: {}", faces, dice, rolls);

    let cmp = compare_probabilities(target_sum, faces, dice, rolls, seed)?;

    info!("Comparison complete");
    Ok(format!(
        "Probability of sum {}\nExperimental: {:.2}% ({}/{})\nTheoretical: {:.2}%\nDifference: {:+.2} pp",
        target_sum,
        cmp.empirical * 100.0,
        cmp.expected_successes,
        rolls,
        cmp.theoretical * 100.0,
        cmp.diff_pp
    ))
}
