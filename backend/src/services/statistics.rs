//! Summary-statistics helpers shared by the aggregation service.

/// Summary statistics for a set of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

/// Compute mean, extrema, and sample standard deviation for a set of values.
///
/// Returns an all-zero result for an empty slice. The standard deviation
/// uses the n−1 divisor and is defined as 0 when fewer than two values are
/// present (a single data point has no dispersion estimate).
pub fn summarize(values: &[f64]) -> SummaryStats {
    if values.is_empty() {
        return SummaryStats {
            count: 0,
            mean: 0.0,
            min: 0.0,
            max: 0.0,
            std_dev: 0.0,
        };
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut min = values[0];
    let mut max = values[0];
    for &v in &values[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    SummaryStats {
        count,
        mean,
        min,
        max,
        std_dev: sample_std_dev(values, mean),
    }
}

/// Sample standard deviation around a precomputed mean; 0 when n ≤ 1.
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();
    let variance = sum_sq / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
