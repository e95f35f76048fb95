use ndarray::Array1;

use crate::estimators::approaches::binarize::{binarise, ThresholdMode};
use crate::estimators::approaches::causal_state::discovery::Windowing;
use crate::estimators::approaches::causal_state::machine::{
    BidirectionalComplexity, CausalStateComplexity,
};
use crate::estimators::approaches::lempel_ziv::LempelZivComplexity;
use crate::estimators::error::ComplexityError;
pub use crate::estimators::traits::GlobalValue;

/// Complexity estimation methods for symbol sequences and numeric windows.
///
/// This struct provides static methods for creating complexity estimators
/// for the different estimation approaches.
pub struct Complexity;

impl Complexity {
    /// Creates a causal-state complexity estimator with overlapping windowing
    /// (the default of the analysis pipeline).
    ///
    /// # Arguments
    ///
    /// * `symbols` - Binary symbol string
    /// * `dl` - Memory length (length of past and present windows)
    /// * `sigma` - Merge tolerance between present distributions
    pub fn new_causal_state(
        symbols: &str,
        dl: usize,
        sigma: f64,
    ) -> Result<CausalStateComplexity, ComplexityError> {
        CausalStateComplexity::new(symbols, dl, sigma, Windowing::Overlapping)
    }

    /// Creates a causal-state complexity estimator with an explicit windowing
    /// mode.
    pub fn new_causal_state_with_windowing(
        symbols: &str,
        dl: usize,
        sigma: f64,
        windowing: Windowing,
    ) -> Result<CausalStateComplexity, ComplexityError> {
        CausalStateComplexity::new(symbols, dl, sigma, windowing)
    }

    /// Creates a bidirectional estimator: forward and reverse causal-state
    /// machines plus their key-merged combination.
    pub fn new_bidirectional(
        symbols: &str,
        dl: usize,
        sigma: f64,
        windowing: Windowing,
    ) -> Result<BidirectionalComplexity, ComplexityError> {
        BidirectionalComplexity::new(symbols, dl, sigma, windowing)
    }

    /// Creates a Lempel-Ziv (LZ76) baseline estimator.
    pub fn new_lempel_ziv(symbols: &str) -> Result<LempelZivComplexity, ComplexityError> {
        LempelZivComplexity::new(symbols)
    }

    /// Median-binarises a numeric window and builds a causal-state estimator
    /// on the resulting symbol string, with overlapping windowing.
    pub fn causal_state_from_series(
        data: &Array1<f64>,
        dl: usize,
        sigma: f64,
    ) -> Result<CausalStateComplexity, ComplexityError> {
        let symbols = binarise(data, ThresholdMode::Median)?;
        Self::new_causal_state(&symbols, dl, sigma)
    }
}
