//! Dice Simulator CLI - Command Line Dice Probability Simulations
//!
//! This is the operational entry point for the dice probability engine.
//!
//! # Modes
//!
//! - `dice_sim` - plain rolls: count table, histogram, summary statistics
//! - `dice_sim --game craps|yahtzee|sum` - named game simulation
//! - `dice_sim --prob <sum>` - empirical vs exact probability of one sum
//!
//! Add `--save` (optionally with `--out <path>`) to persist the report.
//!
//! # Architecture
//!
//! The service layer on top of the pure library crates: it validates
//! arguments, selects the engine entry point, prints the returned text,
//! and owns the one persistence operation.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod persist;

pub use error::{CliError, Result};

use commands::game::GameMode;

/// Face counts accepted by the CLI. The engine itself takes any
/// `faces >= 1`; the restriction to standard dice is a front-end choice.
const ALLOWED_FACES: [u32; 5] = [6, 8, 10, 12, 20];

fn parse_faces(raw: &str) -> std::result::Result<u32, String> {
    let faces: u32 = raw
        .parse()
        .map_err(|_| format!("'{}' is not a valid face count", raw))?;
    if ALLOWED_FACES.contains(&faces) {
        Ok(faces)
    } else {
        Err(format!("face count must be one of {:?}", ALLOWED_FACES))
    }
}

/// Dice probability simulator CLI
#[derive(Parser)]
#[command(name = "dice_sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of faces per die
    #[arg(long, default_value_t = 6, value_parser = parse_faces)]
    faces: u32,

    /// Number of dice per trial
    #[arg(long, default_value_t = 2)]
    dice: u32,

    /// Number of rolls (trials) to simulate
    #[arg(long, default_value_t = 1000)]
    rolls: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Compare empirical vs exact probability of this target sum
    #[arg(long)]
    prob: Option<u32>,

    /// Run a named game instead of plain rolls
    #[arg(long, value_enum)]
    game: Option<GameMode>,

    /// Save the report to a file
    #[arg(long)]
    save: bool,

    /// Report output path (defaults to a timestamped filename)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let report = match (cli.game, cli.prob) {
        (Some(_), Some(_)) => {
            return Err(CliError::InvalidArgument(
                "--game and --prob cannot be combined".to_string(),
            ));
        }
        (Some(mode), None) => commands::game::run(mode, cli.faces, cli.dice, cli.rolls, cli.seed)?,
        (None, Some(target)) => {
            commands::prob::run(target, cli.faces, cli.dice, cli.rolls, cli.seed)?
        }
        (None, None) => commands::rolls::run(cli.faces, cli.rolls, cli.seed)?,
    };

    println!("{}", report);

    if cli.save {
        let path = persist::save_report(&report, cli.out.as_deref())?;
        println!("Saved to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_faces_accepts_standard_dice() {
        for faces in ALLOWED_FACES {
            assert_eq!(parse_faces(&faces.to_string()), Ok(faces));
        }
    }

    #[test]
    fn test_parse_faces_rejects_nonstandard() {
        assert!(parse_faces("7").is_err());
        assert!(parse_faces("0").is_err());
        assert!(parse_faces("dice").is_err());
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["dice_sim"]);
        assert_eq!(cli.faces, 6);
        assert_eq!(cli.dice, 2);
        assert_eq!(cli.rolls, 1000);
        assert_eq!(cli.seed, None);
        assert!(!cli.save);
    }

    #[test]
    fn test_cli_parses_game_mode() {
        let cli = Cli::parse_from(["dice_sim", "--game", "craps", "--rolls", "500"]);
        assert_eq!(cli.game, Some(GameMode::Craps));
        assert_eq!(cli.rolls, 500);
    }

    #[test]
    fn test_cli_parses_prob_target() {
        let cli = Cli::parse_from(["dice_sim", "--prob", "7", "--seed", "42"]);
        assert_eq!(cli.prob, Some(7));
        assert_eq!(cli.seed, Some(42));
    }
}
