//! Plain-rolls command implementation
//!
//! Rolls one die many times and renders the count/percentage table,
//! histogram and summary statistics.

use tracing::info;

use dice_core::SimulationConfig;
use dice_engine::simulate_simple_rolls;
use dice_report::summarise_rolls;

use crate::Result;

/// Run the plain-rolls simulation and return the report text.
pub fn run(faces: u32, rolls: u64, seed: Option<u64>) -> Result<String> {
    info!("Starting plain-rolls simulation...");
    info!("  Faces: {}", faces);
    info!("  Rolls: {}", rolls);

    let mut builder = SimulationConfig::builder().faces(faces).dice(1).trials(rolls);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build()?;

    let (counts, samples) =
        simulate_simple_rolls(config.faces(), config.trials(), config.seed())?;

    info!("Simulation complete");
    Ok(summarise_rolls(
        config.faces(),
        config.trials(),
        &counts,
        &samples,
    ))
}
