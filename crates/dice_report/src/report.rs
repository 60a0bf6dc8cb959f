//! Plain-text report composition for the plain-rolls simulation mode.

use dice_engine::FrequencyTable;

use crate::histogram::{ascii_histogram, DEFAULT_HISTOGRAM_WIDTH};
use crate::stats::basic_stats;

/// Composes the full plain-rolls report.
///
/// Layout: header line, a count + percentage row for every face in
/// `1..=faces` (0 for faces that never occurred), blank line, the ASCII
/// histogram over the same faces, blank line, then mean, median and
/// population standard deviation to two decimals. The text is plain
/// UTF-8 with newline separators — the only persisted artifact format.
///
/// An empty `samples` slice renders the statistics as `NaN`; the report
/// never fails.
pub fn summarise_rolls(
    faces: u32,
    trials: u64,
    counts: &FrequencyTable,
    samples: &[u32],
) -> String {
    let mut lines = vec![
        format!("Simulation complete: {} rolls of a {}-sided die", trials, faces),
        String::new(),
    ];

    for face in 1..=faces {
        let count = counts.get(&face).copied().unwrap_or(0);
        let pct = count as f64 * 100.0 / trials as f64;
        lines.push(format!("{:>2}: {:>6} ({:5.2}%)", face, count, pct));
    }

    let full_counts: FrequencyTable = (1..=faces)
        .map(|face| (face, counts.get(&face).copied().unwrap_or(0)))
        .collect();

    lines.push(String::new());
    lines.push("Histogram (ASCII):".to_string());
    lines.push(ascii_histogram(&full_counts, DEFAULT_HISTOGRAM_WIDTH));
    lines.push(String::new());

    let stats = basic_stats(samples);
    lines.push(format!("Mean: {:.2}", stats.mean));
    lines.push(format!("Median: {:.2}", stats.median));
    lines.push(format!("Standard deviation: {:.2}", stats.std_dev));

    lines.join("\n")
}
