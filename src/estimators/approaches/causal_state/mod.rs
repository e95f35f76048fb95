//! Causal-state machine reconstruction for binary symbol sequences.
//!
//! The pipeline is: [`discovery::find_states`] scans a symbol string into a
//! table of past-key → present-distribution candidates, [`collapse::collapse_states`]
//! merges candidates whose distributions are within the tolerance `sigma`, and
//! [`machine::CausalStateComplexity`] reports the Shannon entropy of the
//! stationary distribution over the surviving states.

pub mod collapse;
pub mod discovery;
pub mod machine;
pub mod state_table;

pub use collapse::collapse_states;
pub use discovery::{find_states, Windowing};
pub use machine::{BidirectionalComplexity, CausalStateComplexity, StateCounts};
pub use state_table::{StateDistribution, StateTable};
