use crate::estimators::approaches::causal_state::state_table::{merged_key, StateTable};
use crate::estimators::error::ComplexityError;

/// Collapse a raw state table into causal states: while any two past-keys'
/// present distributions are within `sigma` (L∞), merge them and restart the
/// scan over the new table; stop once a full scan finds no mergeable pair.
///
/// The scan takes the first pair under the tolerance in key order (greedy
/// first-found, not closest-pair), which together with the ordered table makes
/// the result deterministic. Each merge restarts the pairwise scan from
/// scratch; worst case is cubic in the number of distinct pasts, which stays
/// small for the short memory lengths this is used with.
///
/// Postcondition: every pair of distinct past-keys in the returned table has
/// distance >= `sigma`.
pub fn collapse_states(
    table: StateTable,
    dl: usize,
    sigma: f64,
) -> Result<StateTable, ComplexityError> {
    if dl == 0 {
        return Err(ComplexityError::InvalidParameter(
            "memory length dl must be positive".to_string(),
        ));
    }
    if !(sigma >= 0.0) {
        return Err(ComplexityError::InvalidParameter(format!(
            "sigma must be a non-negative number, got {sigma}"
        )));
    }

    let mut table = table;
    while let Some((past1, past2)) = find_mergeable_pair(&table, sigma) {
        let dist1 = table.remove(&past1).expect("key taken from this table");
        let dist2 = table.remove(&past2).expect("key taken from this table");
        table.insert(merged_key(&past1, &past2, dl), dist1.merge(&dist2));
    }
    Ok(table)
}

/// First pair of distinct past-keys (in key order) whose distributions are
/// closer than `sigma`, or None when the table is fully collapsed.
fn find_mergeable_pair(table: &StateTable, sigma: f64) -> Option<(String, String)> {
    for (i, (past1, dist1)) in table.iter().enumerate() {
        for (past2, dist2) in table.iter().skip(i + 1) {
            if dist1.distance(dist2) < sigma {
                return Some((past1.clone(), past2.clone()));
            }
        }
    }
    None
}
