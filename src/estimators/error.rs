use thiserror::Error;

/// Errors raised at the boundary of the complexity estimators.
///
/// All core functions are total over well-formed inputs; malformed inputs fail
/// fast here rather than deep inside the merge loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplexityError {
    /// The input is not a usable numeric or symbol sequence (empty data,
    /// non-finite values, or a symbol string that is not plain ASCII).
    #[error("invalid input: {0}")]
    InvalidInputType(String),

    /// A parameter is outside its domain: `dl == 0`, `sigma < 0` or NaN,
    /// a zero window length or step, or an unknown mode string.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
