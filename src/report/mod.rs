use serde::Serialize;

pub mod json;
pub mod text;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub count: usize,
    pub sum: f64,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Compute summary statistics over the parsed scores. Statistics are
/// undefined for an empty score list, so that case yields `None` and the
/// caller decides how to surface it.
pub fn compute(scores: &[f64]) -> Option<StatsReport> {
    if scores.is_empty() {
        return None;
    }

    let count = scores.len();
    let sum: f64 = scores.iter().sum();

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(StatsReport {
        count,
        sum,
        average: sum / count as f64,
        min: sorted[0],
        max: sorted[count - 1],
        median: median_of_sorted(&sorted),
    })
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}
