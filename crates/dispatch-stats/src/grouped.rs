//! Grouping helpers shared by the aggregation functions

use serde::{Deserialize, Serialize};

/// Mean and spread of one group of values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroupedStats {
    /// Number of values in the group
    pub count: usize,
    /// Mean over the group
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator)
    pub std_dev: f64,
}

impl GroupedStats {
    /// Compute stats for one group.
    ///
    /// The n-1 denominator leaves a single-member group with a NaN
    /// standard deviation; callers pass that through as a valid result.
    pub fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                count: 0,
                mean: f64::NAN,
                std_dev: f64::NAN,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let std_dev = if count < 2 {
            f64::NAN
        } else {
            let variance =
                values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            variance.sqrt()
        };

        Self {
            count,
            mean,
            std_dev,
        }
    }
}

/// Group values by key, keeping keys in first-encounter order.
pub fn group_by_insertion<K, V, I>(items: I) -> Vec<(K, Vec<V>)>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, V)>,
{
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();
    for (key, value) in items {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => groups.push((key, vec![value])),
        }
    }
    groups
}

/// Median of a slice; mean of the middle pair for even counts.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}
