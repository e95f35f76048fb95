use std::collections::HashSet;

use crate::estimators::error::ComplexityError;
use crate::estimators::traits::GlobalValue;

/// Lempel-Ziv (LZ76) complexity of a symbol string: the number of distinct
/// phrases produced by the left-to-right dictionary parse.
///
/// A much simpler measure than the causal-state machine, kept as a baseline
/// to compare against on the same binarised windows.
#[derive(Debug)]
pub struct LempelZivComplexity {
    phrases: usize,
}

impl LempelZivComplexity {
    pub fn new(symbols: &str) -> Result<Self, ComplexityError> {
        if !symbols.is_ascii() {
            return Err(ComplexityError::InvalidInputType(
                "symbol string must be ASCII".to_string(),
            ));
        }
        Ok(Self {
            phrases: lz76_phrase_count(symbols),
        })
    }

    /// Number of phrases in the LZ76 parse.
    pub fn phrase_count(&self) -> usize {
        self.phrases
    }
}

impl GlobalValue for LempelZivComplexity {
    fn global_value(&self) -> f64 {
        self.phrases as f64
    }
}

/// LZ76 parse: grow the current phrase one symbol at a time; as soon as it is
/// unseen, record it and start the next phrase after it.
fn lz76_phrase_count(symbols: &str) -> usize {
    let n = symbols.len();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut start = 0;
    let mut len = 1;
    while start + len <= n {
        let phrase = &symbols[start..start + len];
        if seen.contains(phrase) {
            len += 1;
        } else {
            seen.insert(phrase);
            start += len;
            len = 1;
        }
    }
    seen.len()
}
