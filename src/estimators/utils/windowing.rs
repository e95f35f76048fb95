use ndarray::{s, Array1};

use crate::estimators::error::ComplexityError;

/// Sliding-window segmentation parameters, in samples.
///
/// Replaces the module-level window/step/sample-rate globals of the original
/// analysis scripts with an explicit configuration passed into the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window length in samples.
    pub window_len: usize,
    /// Stride between consecutive window starts, in samples.
    pub step: usize,
}

impl WindowConfig {
    pub fn new(window_len: usize, step: usize) -> Result<Self, ComplexityError> {
        if window_len == 0 || step == 0 {
            return Err(ComplexityError::InvalidParameter(
                "window length and step must be positive".to_string(),
            ));
        }
        Ok(Self { window_len, step })
    }

    /// Convenience constructor for recordings described in seconds at a fixed
    /// sample rate.
    pub fn from_seconds(
        window_secs: usize,
        step_secs: usize,
        sample_rate: usize,
    ) -> Result<Self, ComplexityError> {
        Self::new(window_secs * sample_rate, step_secs * sample_rate)
    }
}

/// Cut a series into fixed-length windows at the configured stride. A trailing
/// stretch shorter than one full window is dropped.
pub fn sliding_windows(data: &Array1<f64>, config: &WindowConfig) -> Vec<Array1<f64>> {
    let mut windows = Vec::new();
    let mut start = 0;
    while start + config.window_len <= data.len() {
        windows.push(data.slice(s![start..start + config.window_len]).to_owned());
        start += config.step;
    }
    windows
}
