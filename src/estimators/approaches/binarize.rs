use ndarray::{Array1, Array2, Axis};
use std::str::FromStr;

use crate::estimators::error::ComplexityError;

/// Threshold rule used to binarise a continuous series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMode {
    /// Threshold at the sample median (default in the EEG pipeline).
    Median,
    /// Threshold at the sample mean.
    Mean,
}

impl FromStr for ThresholdMode {
    type Err = ComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "median" => Ok(ThresholdMode::Median),
            "mean" => Ok(ThresholdMode::Mean),
            other => Err(ComplexityError::InvalidParameter(format!(
                "unknown threshold mode '{other}', expected 'median' or 'mean'"
            ))),
        }
    }
}

/// Binarise a continuous series into a string over the alphabet {0,1}.
///
/// The threshold is the series' median or mean; each element maps to `'1'` if
/// it is >= the threshold, else `'0'`, in input order. Empty input or
/// non-finite values are rejected.
pub fn binarise(data: &Array1<f64>, mode: ThresholdMode) -> Result<String, ComplexityError> {
    if data.is_empty() {
        return Err(ComplexityError::InvalidInputType(
            "cannot binarise an empty series".to_string(),
        ));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(ComplexityError::InvalidInputType(
            "series contains non-finite values".to_string(),
        ));
    }

    let threshold = match mode {
        ThresholdMode::Median => median(data),
        ThresholdMode::Mean => data.mean().expect("non-empty series has a mean"),
    };

    let mut out = String::with_capacity(data.len());
    for &v in data.iter() {
        out.push(if v >= threshold { '1' } else { '0' });
    }
    Ok(out)
}

/// Binarise each row of a 2D array independently.
///
/// Batch counterpart of [`binarise`] for segmented recordings, one symbol
/// string per window.
pub fn binarise_rows(
    data: &Array2<f64>,
    mode: ThresholdMode,
) -> Result<Vec<String>, ComplexityError> {
    data.axis_iter(Axis(0))
        .map(|row| binarise(&row.to_owned(), mode))
        .collect()
}

/// Median of a non-empty series. Even lengths take the mean of the two
/// middle order statistics, matching numpy.
fn median(data: &Array1<f64>) -> f64 {
    let mut sorted: Vec<f64> = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("values checked finite"));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}
