pub mod binarize;
pub mod causal_state;
pub mod lempel_ziv;

// Unified re-exports so tests and users can import
// statcomp::estimators::approaches::* ergonomically.
pub use binarize::{binarise, binarise_rows, ThresholdMode};
pub use causal_state::machine::{BidirectionalComplexity, CausalStateComplexity};
pub use lempel_ziv::LempelZivComplexity;
