//! CLI error type.

use dice_core::DiceError;
use thiserror::Error;

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line layer.
///
/// Engine errors and persistence I/O errors propagate unmodified; the CLI
/// never retries or falls back to alternate paths.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument combination the parser cannot reject on its own.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid-parameter failure from the engine layers.
    #[error(transparent)]
    Engine(#[from] DiceError),

    /// Report persistence failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
