//! CLI command implementations
//!
//! Each submodule implements one simulation mode and returns the report
//! text; printing and persistence stay in `main`.

pub mod game;
pub mod prob;
pub mod rolls;
