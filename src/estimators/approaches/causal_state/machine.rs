use ndarray::Array1;

use crate::estimators::approaches::causal_state::collapse::collapse_states;
use crate::estimators::approaches::causal_state::discovery::{find_states, Windowing};
use crate::estimators::approaches::causal_state::state_table::{
    complexity_from_probs, stationary_distribution, StateDistribution, StateTable,
};
use crate::estimators::error::ComplexityError;
use crate::estimators::traits::GlobalValue;

/// Statistical (causal-state) complexity estimator for a symbol string.
///
/// Construction runs state discovery and sigma-tolerance collapse; the global
/// value is the Shannon entropy (bits) of the stationary distribution over the
/// collapsed causal states. Both the raw and the collapsed tables are kept for
/// diagnostics and for downstream bidirectional combination.
pub struct CausalStateComplexity {
    raw: StateTable,
    collapsed: StateTable,
}

impl CausalStateComplexity {
    /// Run the full forward pipeline on a symbol string.
    pub fn new(
        symbols: &str,
        dl: usize,
        sigma: f64,
        windowing: Windowing,
    ) -> Result<Self, ComplexityError> {
        let raw = find_states(symbols, dl, windowing)?;
        let collapsed = collapse_states(raw.clone(), dl, sigma)?;
        Ok(Self { raw, collapsed })
    }

    /// Wrap a precomputed state table. No further collapsing is applied; the
    /// table stands as both the raw and the collapsed form.
    pub fn from_table(table: StateTable) -> Self {
        Self {
            raw: table.clone(),
            collapsed: table,
        }
    }

    /// Build one estimator per symbol string, for batch runs over segmented
    /// recordings.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        dl: usize,
        sigma: f64,
        windowing: Windowing,
    ) -> Result<Vec<Self>, ComplexityError> {
        rows.iter()
            .map(|row| Self::new(row.as_ref(), dl, sigma, windowing))
            .collect()
    }

    /// The collapsed causal-state table.
    pub fn causal_states(&self) -> &StateTable {
        &self.collapsed
    }

    /// The pre-collapse table from state discovery.
    pub fn raw_states(&self) -> &StateTable {
        &self.raw
    }

    /// Stationary probability vector over the collapsed states.
    pub fn stationary_probs(&self) -> Array1<f64> {
        stationary_distribution(&self.collapsed)
    }
}

impl GlobalValue for CausalStateComplexity {
    /// Shannon entropy of the stationary distribution over causal states.
    /// 0 exactly when a single state remains.
    fn global_value(&self) -> f64 {
        complexity_from_probs(&self.stationary_probs())
    }
}

/// Diagnostic state counts for a bidirectional run, collapsed and raw, for
/// the forward, reverse and combined machines. The combined table has no
/// separate raw form, so its raw count equals its collapsed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateCounts {
    pub forward: usize,
    pub reverse: usize,
    pub combined: usize,
    pub forward_raw: usize,
    pub reverse_raw: usize,
    pub combined_raw: usize,
}

/// Forward, reverse and bidirectional complexity of one symbol string.
///
/// The reverse machine is the forward pipeline run on the reversed string.
/// The two collapsed tables are then combined by exact key equality: shared
/// keys keep only their summed stationary mass (the present distributions are
/// deliberately discarded — the bidirectional entropy needs only marginal
/// state probabilities), one-sided keys carry through unchanged, and no
/// further sigma collapse is applied.
pub struct BidirectionalComplexity {
    forward: CausalStateComplexity,
    reverse: CausalStateComplexity,
    combined: CausalStateComplexity,
}

impl BidirectionalComplexity {
    pub fn new(
        symbols: &str,
        dl: usize,
        sigma: f64,
        windowing: Windowing,
    ) -> Result<Self, ComplexityError> {
        let forward = CausalStateComplexity::new(symbols, dl, sigma, windowing)?;
        let reversed: String = symbols.chars().rev().collect();
        let reverse = CausalStateComplexity::new(&reversed, dl, sigma, windowing)?;
        let combined = CausalStateComplexity::from_table(combine_by_key(
            forward.causal_states(),
            reverse.causal_states(),
        ));
        Ok(Self {
            forward,
            reverse,
            combined,
        })
    }

    /// One bidirectional estimator per symbol string.
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        dl: usize,
        sigma: f64,
        windowing: Windowing,
    ) -> Result<Vec<Self>, ComplexityError> {
        rows.iter()
            .map(|row| Self::new(row.as_ref(), dl, sigma, windowing))
            .collect()
    }

    pub fn forward_value(&self) -> f64 {
        self.forward.global_value()
    }

    pub fn reverse_value(&self) -> f64 {
        self.reverse.global_value()
    }

    /// (forward, reverse, bidirectional) complexity values.
    pub fn values(&self) -> (f64, f64, f64) {
        (
            self.forward_value(),
            self.reverse_value(),
            self.global_value(),
        )
    }

    pub fn combined_states(&self) -> &StateTable {
        self.combined.causal_states()
    }

    pub fn state_counts(&self) -> StateCounts {
        StateCounts {
            forward: self.forward.causal_states().len(),
            reverse: self.reverse.causal_states().len(),
            combined: self.combined.causal_states().len(),
            forward_raw: self.forward.raw_states().len(),
            reverse_raw: self.reverse.raw_states().len(),
            combined_raw: self.combined.raw_states().len(),
        }
    }
}

impl GlobalValue for BidirectionalComplexity {
    /// The bidirectional complexity: entropy of the stationary distribution
    /// over the combined forward/reverse state table.
    fn global_value(&self) -> f64 {
        self.combined.global_value()
    }
}

/// Merge two collapsed tables by exact past-key equality. Keys present on
/// both sides become total-only entries with summed mass; the rest carry
/// through unchanged. Merged keys are already canonical (chunk-sorted), so
/// string equality is the right match.
fn combine_by_key(forward: &StateTable, reverse: &StateTable) -> StateTable {
    let mut combined = StateTable::new();
    for (key, dist) in forward {
        match reverse.get(key) {
            Some(other) => {
                combined.insert(
                    key.clone(),
                    StateDistribution {
                        presents: Default::default(),
                        total: dist.total + other.total,
                    },
                );
            }
            None => {
                combined.insert(key.clone(), dist.clone());
            }
        }
    }
    for (key, dist) in reverse {
        if !combined.contains_key(key) {
            combined.insert(key.clone(), dist.clone());
        }
    }
    combined
}
