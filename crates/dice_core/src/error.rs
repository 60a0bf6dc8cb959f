//! Error types for the dice simulation foundation layer.
//!
//! This module provides:
//! - [`DiceError`]: invalid-parameter failures shared by every layer above

use thiserror::Error;

/// Convenience alias used throughout the engine crates.
pub type Result<T> = std::result::Result<T, DiceError>;

/// Invalid-parameter errors for dice simulations.
///
/// All failures are deterministic consequences of the caller's inputs;
/// nothing here is transient, so no operation is ever retried.
///
/// # Variants
/// - `InvalidFaceCount`: a die with fewer than one face
/// - `InvalidTrialCount`: a per-trial loop or division that requires at
///   least one trial was asked to run zero
/// - `InvalidParameter`: configuration builder misuse and defensive bounds
///
/// # Examples
/// ```
/// use dice_core::DiceError;
///
/// let err = DiceError::InvalidFaceCount(0);
/// assert!(format!("{}", err).contains("face count"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiceError {
    /// A die must have at least one face.
    #[error("Invalid face count {0}: a die needs at least 1 face")]
    InvalidFaceCount(u32),

    /// Sampling and frequency division require at least one trial.
    #[error("Invalid trial count {0}: at least 1 trial is required")]
    InvalidTrialCount(u64),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
