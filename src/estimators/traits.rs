// SPDX-License-Identifier: MIT OR Apache-2.0

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}
