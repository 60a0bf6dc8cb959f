//! # Dice Core (Foundation Layer)
//!
//! The foundation every other layer depends on:
//! - [`DiceRng`]: seeded, reproducible uniform integer generation
//! - [`roll_one`] / [`roll_set`] / [`roll_many`]: dice rolling primitives
//! - [`SimulationConfig`]: validated, immutable simulation parameters
//! - [`DiceError`]: the shared invalid-parameter taxonomy
//!
//! Everything here is pure CPU-bound computation over plain values; the
//! only mutable state is a [`DiceRng`]'s internal stream, which is owned
//! by exactly one simulation call at a time.
//!
//! ## Usage Example
//!
//! ```rust
//! use dice_core::{roll_set, DiceRng};
//!
//! let mut rng = DiceRng::from_seed(42);
//! let set = roll_set(&mut rng, 2, 6)?;
//! let total: u32 = set.iter().sum();
//! assert!((2..=12).contains(&total));
//! # Ok::<(), dice_core::DiceError>(())
//! ```

pub mod config;
pub mod error;
pub mod rng;
pub mod roller;

pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_DICE, MAX_FACES, MAX_TRIALS};
pub use error::{DiceError, Result};
pub use rng::DiceRng;
pub use roller::{roll_many, roll_one, roll_set};
