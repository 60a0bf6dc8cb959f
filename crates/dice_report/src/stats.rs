//! Summary statistics over roll samples.

/// Mean, median and population standard deviation of a sample sequence.
///
/// An empty sequence has no defined statistics; [`basic_stats`] then
/// returns the NaN sentinel triple from [`SummaryStats::undefined`].
/// Callers render it as-is (the report shows `NaN`) and never feed it
/// back into arithmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (mean of the two middle values for even-length input).
    pub median: f64,
    /// Population standard deviation (divides by N, not N - 1).
    pub std_dev: f64,
}

impl SummaryStats {
    /// The sentinel triple representing "no samples, nothing to report".
    #[inline]
    pub fn undefined() -> Self {
        Self {
            mean: f64::NAN,
            median: f64::NAN,
            std_dev: f64::NAN,
        }
    }

    /// Whether this is the empty-input sentinel.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.mean.is_nan()
    }
}

/// Computes mean, median and population standard deviation of `samples`.
///
/// Returns [`SummaryStats::undefined`] for an empty slice instead of
/// failing, so report generation can proceed.
///
/// # Examples
///
/// ```rust
/// use dice_report::basic_stats;
///
/// let stats = basic_stats(&[4, 4, 4, 4]);
/// assert_eq!(stats.mean, 4.0);
/// assert_eq!(stats.median, 4.0);
/// assert_eq!(stats.std_dev, 0.0);
///
/// assert!(basic_stats(&[]).is_undefined());
/// ```
pub fn basic_stats(samples: &[u32]) -> SummaryStats {
    if samples.is_empty() {
        return SummaryStats::undefined();
    }

    let n = samples.len() as f64;
    let mean = samples.iter().map(|&v| f64::from(v)).sum::<f64>() / n;

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        f64::from(sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        f64::from(sorted[mid])
    };

    let variance = samples
        .iter()
        .map(|&v| {
            let d = f64::from(v) - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    SummaryStats {
        mean,
        median,
        std_dev: variance.sqrt(),
    }
}
