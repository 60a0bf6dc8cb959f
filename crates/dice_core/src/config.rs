//! Simulation configuration.
//!
//! This module provides the immutable parameter set shared by every
//! simulation entry point, with a validating builder.

use crate::error::{DiceError, Result};

/// Maximum number of trials allowed per simulation.
pub const MAX_TRIALS: u64 = 100_000_000;

/// Maximum number of dice allowed per roll-set.
pub const MAX_DICE: u32 = 1_000;

/// Maximum number of faces allowed per die.
pub const MAX_FACES: u32 = 10_000;

/// Dice simulation configuration.
///
/// Immutable configuration specifying simulation parameters. The engine
/// itself accepts any `faces >= 1`; restricting faces to a conventional
/// set such as {6, 8, 10, 12, 20} is the CLI layer's concern.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use dice_core::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .faces(6)
///     .dice(2)
///     .trials(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.faces(), 6);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of faces per die.
    faces: u32,
    /// Number of dice per trial.
    dice: u32,
    /// Number of independent trials.
    trials: u64,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of faces per die.
    #[inline]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Returns the number of dice per trial.
    #[inline]
    pub fn dice(&self) -> u32 {
        self.dice
    }

    /// Returns the number of independent trials.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError`] if:
    /// - `faces` is 0 or greater than [`MAX_FACES`]
    /// - `dice` is greater than [`MAX_DICE`] (0 dice is a valid, empty trial)
    /// - `trials` is 0 or greater than [`MAX_TRIALS`]
    pub fn validate(&self) -> Result<()> {
        if self.faces == 0 {
            return Err(DiceError::InvalidFaceCount(self.faces));
        }
        if self.faces > MAX_FACES {
            return Err(DiceError::InvalidParameter {
                name: "faces",
                value: format!("{} exceeds maximum {}", self.faces, MAX_FACES),
            });
        }
        if self.dice > MAX_DICE {
            return Err(DiceError::InvalidParameter {
                name: "dice",
                value: format!("{} exceeds maximum {}", self.dice, MAX_DICE),
            });
        }
        if self.trials == 0 {
            return Err(DiceError::InvalidTrialCount(self.trials));
        }
        if self.trials > MAX_TRIALS {
            return Err(DiceError::InvalidParameter {
                name: "trials",
                value: format!("{} exceeds maximum {}", self.trials, MAX_TRIALS),
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use dice_core::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .faces(20)
///     .dice(3)
///     .trials(50_000)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    faces: Option<u32>,
    dice: Option<u32>,
    trials: Option<u64>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of faces per die.
    #[inline]
    pub fn faces(mut self, faces: u32) -> Self {
        self.faces = Some(faces);
        self
    }

    /// Sets the number of dice per trial.
    #[inline]
    pub fn dice(mut self, dice: u32) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Sets the number of independent trials.
    #[inline]
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError`] if any of `faces`, `dice`, `trials` is not set
    /// or fails [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig> {
        let faces = self.faces.ok_or(DiceError::InvalidParameter {
            name: "faces",
            value: "must be specified".to_string(),
        })?;

        let dice = self.dice.ok_or(DiceError::InvalidParameter {
            name: "dice",
            value: "must be specified".to_string(),
        })?;

        let trials = self.trials.ok_or(DiceError::InvalidParameter {
            name: "trials",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            faces,
            dice,
            trials,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SimulationConfig::builder()
            .faces(6)
            .dice(2)
            .trials(1000)
            .build()
            .unwrap();

        assert_eq!(config.faces(), 6);
        assert_eq!(config.dice(), 2);
        assert_eq!(config.trials(), 1000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = SimulationConfig::builder()
            .faces(6)
            .dice(2)
            .trials(1000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_zero_dice_valid() {
        // Zero dice is an empty trial with sum 0, not an error.
        let config = SimulationConfig::builder()
            .faces(6)
            .dice(0)
            .trials(10)
            .build()
            .unwrap();
        assert_eq!(config.dice(), 0);
    }

    #[test]
    fn test_config_invalid_zero_faces() {
        let result = SimulationConfig::builder()
            .faces(0)
            .dice(2)
            .trials(1000)
            .build();
        assert!(matches!(result, Err(DiceError::InvalidFaceCount(0))));
    }

    #[test]
    fn test_config_invalid_zero_trials() {
        let result = SimulationConfig::builder()
            .faces(6)
            .dice(2)
            .trials(0)
            .build();
        assert!(matches!(result, Err(DiceError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_trials() {
        let result = SimulationConfig::builder()
            .faces(6)
            .dice(2)
            .trials(MAX_TRIALS + 1)
            .build();
        assert!(matches!(
            result,
            Err(DiceError::InvalidParameter { name: "trials", .. })
        ));
    }

    #[test]
    fn test_config_invalid_too_many_dice() {
        let result = SimulationConfig::builder()
            .faces(6)
            .dice(MAX_DICE + 1)
            .trials(1000)
            .build();
        assert!(matches!(
            result,
            Err(DiceError::InvalidParameter { name: "dice", .. })
        ));
    }

    #[test]
    fn test_config_missing_faces() {
        let result = SimulationConfig::builder().dice(2).trials(1000).build();
        assert!(matches!(
            result,
            Err(DiceError::InvalidParameter { name: "faces", .. })
        ));
    }
}
