use ndarray::Array1;
use std::collections::BTreeMap;

/// Empirical distribution over present-keys observed after one past-key,
/// together with the raw observation count backing it.
///
/// `total` is kept unnormalized: it is the state's stationary weight before
/// normalization and keeps accumulating through merges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StateDistribution {
    /// Present-key → relative frequency. Sums to 1 for freshly discovered
    /// states; repeated merging averages distributions without re-deriving
    /// them from counts, so the sum may drift from 1 (accepted approximation).
    pub presents: BTreeMap<String, f64>,
    /// Raw number of (past, present) observations behind this state.
    pub total: u64,
}

/// Mapping from past-key to its present distribution.
///
/// Ordered map: the merge loop's first-found tie-break scans pairs in key
/// order, so identical inputs always collapse identically.
pub type StateTable = BTreeMap<String, StateDistribution>;

impl StateDistribution {
    /// L∞ distance to another distribution over the union of present-keys,
    /// treating a key as probability 0 on the side it is absent from.
    pub fn distance(&self, other: &StateDistribution) -> f64 {
        let mut difference = f64::NEG_INFINITY;
        for (present, &p) in &self.presents {
            let q = other.presents.get(present).copied().unwrap_or(0.0);
            difference = difference.max((p - q).abs());
        }
        for (present, &q) in &other.presents {
            if !self.presents.contains_key(present) {
                difference = difference.max(q);
            }
        }
        difference
    }

    /// Merge two distributions: per-key mean of the probabilities (a key on
    /// one side only contributes half its value), totals summed unhalved.
    pub fn merge(&self, other: &StateDistribution) -> StateDistribution {
        let mut presents = BTreeMap::new();
        for (present, &p) in &self.presents {
            let q = other.presents.get(present).copied().unwrap_or(0.0);
            presents.insert(present.clone(), (p + q) / 2.0);
        }
        for (present, &q) in &other.presents {
            if !self.presents.contains_key(present) {
                presents.insert(present.clone(), q / 2.0);
            }
        }
        StateDistribution {
            presents,
            total: self.total + other.total,
        }
    }
}

/// Build the canonical key for the merge of two past-keys.
///
/// Both keys are split into `dl`-length chunks; all chunks are sorted
/// lexicographically and concatenated. The result is independent of merge
/// order, so identical merged states reached along different merge paths end
/// up under the same key string.
pub fn merged_key(past1: &str, past2: &str, dl: usize) -> String {
    let combined = format!("{past1}{past2}");
    let mut chunks: Vec<&str> = (0..combined.len() / dl)
        .map(|i| &combined[i * dl..(i + 1) * dl])
        .collect();
    chunks.sort_unstable();
    chunks.concat()
}

/// Stationary probability vector of a state table: each state's `total`
/// normalized by the grand total. Sums to 1 for non-empty tables.
pub fn stationary_distribution(table: &StateTable) -> Array1<f64> {
    let grand_total: u64 = table.values().map(|dist| dist.total).sum();
    if grand_total == 0 {
        return Array1::zeros(table.len());
    }
    let grand_total = grand_total as f64;
    table
        .values()
        .map(|dist| dist.total as f64 / grand_total)
        .collect()
}

/// Shannon entropy (bits) of a probability vector: `-Σ p·log2(p)`, with
/// zero-probability entries contributing 0 rather than NaN.
pub fn complexity_from_probs(probs: &Array1<f64>) -> f64 {
    let mut complexity = 0.0;
    for &p in probs.iter() {
        if p > 0.0 {
            complexity -= p * p.log2();
        }
    }
    complexity
}
