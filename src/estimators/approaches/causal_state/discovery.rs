use std::collections::BTreeMap;
use std::str::FromStr;

use crate::estimators::approaches::causal_state::state_table::{StateDistribution, StateTable};
use crate::estimators::error::ComplexityError;

/// How past/present pairs are extracted from the symbol sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Windowing {
    /// Advance by one symbol per step; present is the past shifted by one.
    Overlapping,
    /// Advance by `dl` symbols per step; present is the next `dl`-block.
    NonOverlapping,
}

impl FromStr for Windowing {
    type Err = ComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overlapping" => Ok(Windowing::Overlapping),
            "nonoverlapping" => Ok(Windowing::NonOverlapping),
            other => Err(ComplexityError::InvalidParameter(format!(
                "unknown windowing '{other}', expected 'overlapping' or 'nonoverlapping'"
            ))),
        }
    }
}

/// Scan a symbol string into a raw state table: for every observed
/// `(past, present)` pair of `dl`-length substrings, count the present under
/// its past, then normalize each past's counts into relative frequencies.
///
/// The main loop stops once the next extraction would run past the end of the
/// string; one trailing pair the stride would otherwise skip is captured iff
/// the remaining length still fits a full pair. An incomplete tail is dropped
/// silently, which is the intended truncation policy rather than an error.
pub fn find_states(
    symbols: &str,
    dl: usize,
    windowing: Windowing,
) -> Result<StateTable, ComplexityError> {
    if dl == 0 {
        return Err(ComplexityError::InvalidParameter(
            "memory length dl must be positive".to_string(),
        ));
    }
    if !symbols.is_ascii() {
        return Err(ComplexityError::InvalidInputType(
            "symbol string must be ASCII".to_string(),
        ));
    }

    let len = symbols.len();
    let mut counts: BTreeMap<&str, (BTreeMap<&str, u64>, u64)> = BTreeMap::new();
    let mut observe = |i: usize| {
        let (past, present) = match windowing {
            Windowing::NonOverlapping => (&symbols[i..i + dl], &symbols[i + dl..i + 2 * dl]),
            Windowing::Overlapping => (&symbols[i..i + dl], &symbols[i + 1..i + 1 + dl]),
        };
        let entry = counts.entry(past).or_default();
        *entry.0.entry(present).or_insert(0) += 1;
        entry.1 += 1;
    };

    let mut i = 0;
    let (stride, pair_len) = match windowing {
        Windowing::NonOverlapping => (dl, 2 * dl),
        Windowing::Overlapping => (1, dl + 1),
    };
    while i + pair_len < len {
        observe(i);
        i += stride;
    }
    // Trailing pair left behind by the stride, if a full one remains.
    if i + pair_len == len {
        observe(i);
    }

    let mut table = StateTable::new();
    for (past, (presents, total)) in counts {
        let presents = presents
            .into_iter()
            .map(|(present, count)| (present.to_string(), count as f64 / total as f64))
            .collect();
        table.insert(past.to_string(), StateDistribution { presents, total });
    }
    Ok(table)
}
