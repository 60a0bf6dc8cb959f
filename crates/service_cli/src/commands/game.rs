//! Game command implementation
//!
//! Runs one of the three named game modes and renders its result block.

use clap::ValueEnum;
use tracing::info;

use dice_engine::{
    all_equal_theoretical, play_sum_game, simulate_all_equal, simulate_craps, SumGameOutcome,
};

use crate::Result;

/// Named game selected by `--game`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// Repeated craps rounds, tallying wins and losses.
    Craps,
    /// The five-dice all-equal game, experimental versus closed form.
    Yahtzee,
    /// One head-to-head sum game against the computer.
    Sum,
}

/// Run the selected game and return the report text.
pub fn run(mode: GameMode, faces: u32, dice: u32, rolls: u64, seed: Option<u64>) -> Result<String> {
    info!("Starting game simulation...");
    info!("  Mode: {:?}", mode);

    let text = match mode {
        GameMode::Craps => {
            let tally = simulate_craps(rolls, seed)?;
            format!("CRAPS\nWins: {} | Losses: {}", tally.wins, tally.losses)
        }
        GameMode::Yahtzee => {
            let tally = simulate_all_equal(rolls, faces, seed)?;
            let theoretical = all_equal_theoretical(faces)?;
            format!(
                "YAHTZEE\nExperimental: {:.3}%\nTheoretical: {:.3}%",
                tally.win_rate() * 100.0,
                theoretical * 100.0
            )
        }
        GameMode::Sum => {
            let result = play_sum_game(dice, faces, seed)?;
            let verdict = match result.outcome {
                SumGameOutcome::PlayerWin => "You win!",
                SumGameOutcome::PlayerLoss => "You lose!",
                SumGameOutcome::Tie => "It's a tie!",
            };
            format!(
                "You: {} | Computer: {} -> {}",
                result.player_sum, result.opponent_sum, verdict
            )
        }
    };

    info!("Game simulation complete");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_craps_block() {
        let report = run(GameMode::Craps, 6, 2, 1000, Some(42)).unwrap();
        assert!(report.starts_with("CRAPS\nWins: "));
        assert!(report.contains(" | Losses: "));
    }

    #[test]
    fn test_yahtzee_block() {
        let report = run(GameMode::Yahtzee, 6, 2, 1000, Some(42)).unwrap();
        assert!(report.starts_with("YAHTZEE\n"));
        assert!(report.contains("Experimental: "));
        assert!(report.contains("Theoretical: 0.077%"));
    }

    #[test]
    fn test_sum_block() {
        let report = run(GameMode::Sum, 6, 2, 1000, Some(42)).unwrap();
        assert!(report.starts_with("You: "));
        assert!(report.contains(" | Computer: "));
        assert!(report.contains(" -> "));
    }

    #[test]
    fn test_zero_rolls_rejected_for_tallied_games() {
        assert!(run(GameMode::Craps, 6, 2, 0, Some(1)).is_err());
        assert!(run(GameMode::Yahtzee, 6, 2, 0, Some(1)).is_err());
    }
}
