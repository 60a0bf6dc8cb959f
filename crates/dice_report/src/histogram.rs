//! Fixed-width ASCII bar chart rendering.

use dice_engine::FrequencyTable;

/// Default bar width in characters.
pub const DEFAULT_HISTOGRAM_WIDTH: usize = 30;

/// Placeholder rendered when there is nothing to chart.
pub const EMPTY_HISTOGRAM: &str = "(no data)";

/// Renders `counts` as an ASCII bar chart, one line per key in ascending
/// order.
///
/// Each line is `"{key:>2}: {count:>6} {bar}"` where the bar holds
/// `round(count / max_count * width)` asterisks; a zero count gets no
/// asterisks. An empty map renders the fixed [`EMPTY_HISTOGRAM`]
/// placeholder rather than empty text.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use dice_report::ascii_histogram;
///
/// let counts = BTreeMap::from([(1, 2u64), (2, 4)]);
/// let chart = ascii_histogram(&counts, 30);
/// assert!(chart.lines().count() == 2);
/// assert!(chart.contains("******************************"));
/// ```
pub fn ascii_histogram(counts: &FrequencyTable, width: usize) -> String {
    if counts.is_empty() {
        return EMPTY_HISTOGRAM.to_string();
    }

    let max_count = counts.values().copied().max().unwrap_or(1).max(1);
    counts
        .iter()
        .map(|(&key, &count)| {
            let bar_len = (count as f64 / max_count as f64 * width as f64).round() as usize;
            format!("{:>2}: {:>6} {}", key, count, "*".repeat(bar_len))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_empty_map_placeholder() {
        assert_eq!(ascii_histogram(&BTreeMap::new(), 30), "(no data)");
    }

    #[test]
    fn test_max_count_fills_width() {
        let counts = BTreeMap::from([(1, 10u64)]);
        let chart = ascii_histogram(&counts, 30);
        assert_eq!(chart, format!(" 1:     10 {}", "*".repeat(30)));
    }

    #[test]
    fn test_zero_count_has_no_bar() {
        let counts = BTreeMap::from([(1, 0u64), (2, 8)]);
        let chart = ascii_histogram(&counts, 30);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], " 1:      0 ");
        assert!(lines[1].ends_with(&"*".repeat(30)));
    }

    #[test]
    fn test_bar_length_proportional() {
        let counts = BTreeMap::from([(1, 5u64), (2, 10)]);
        let chart = ascii_histogram(&counts, 30);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0].matches('*').count(), 15);
        assert_eq!(lines[1].matches('*').count(), 30);
    }

    #[test]
    fn test_keys_ascend() {
        let counts = BTreeMap::from([(3, 1u64), (1, 1), (2, 1)]);
        let chart = ascii_histogram(&counts, 10);
        let keys: Vec<&str> = chart
            .lines()
            .map(|line| line.split(':').next().unwrap().trim())
            .collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_all_zero_counts_render() {
        // max(count) is 0; the divisor clamps to 1 instead of dividing by 0.
        let counts = BTreeMap::from([(1, 0u64), (2, 0)]);
        let chart = ascii_histogram(&counts, 30);
        assert_eq!(chart.lines().count(), 2);
        assert_eq!(chart.matches('*').count(), 0);
    }
}
