//! Module containing tests for the causal-state estimators.
mod bidirectional_sanity;
