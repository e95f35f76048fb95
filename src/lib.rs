// SPDX-License-Identifier: MIT OR Apache-2.0

//! # statcomp
//!
//! Statistical (causal-state) complexity estimation for discretized time series,
//! in the style of computational-mechanics ε-machine reconstruction: a binary
//! symbol sequence is scanned into past → present-distribution states, states
//! with statistically indistinguishable present distributions are merged, and
//! the Shannon entropy of the stationary distribution over the surviving causal
//! states is reported as the complexity.
//!
//! ## Quick Start
//!
//! ```rust
//! use statcomp::estimators::complexity::Complexity;
//! use statcomp::estimators::traits::GlobalValue;
//! use ndarray::Array1;
//!
//! // Causal-state complexity of a symbol string
//! let sc = Complexity::new_causal_state("0110100110010110", 2, 0.05)
//!     .unwrap()
//!     .global_value();
//!
//! // From a raw numeric window: binarise, then estimate
//! let window = Array1::linspace(0.0, 1.0, 64).mapv(|x: f64| (20.0 * x).sin());
//! let sc = Complexity::causal_state_from_series(&window, 3, 0.05)
//!     .unwrap()
//!     .global_value();
//! ```
//!
//! ## Estimators
//!
//! - **Causal-state complexity**: forward, and forward/reverse/bidirectional
//!   via [`estimators::approaches::causal_state::machine::BidirectionalComplexity`].
//! - **Lempel-Ziv complexity**: LZ76 phrase counting, kept as a simple baseline
//!   alongside the causal-state estimator.
//!
//! ## Pipeline
//!
//! raw window → [`estimators::approaches::binarize::binarise`] → symbol string →
//! state discovery → sigma-tolerance state collapse → stationary-distribution
//! entropy. CSV ingestion, plotting and CLI handling live outside this crate;
//! [`estimators::utils::windowing`] provides the sliding-window segmentation
//! boundary for callers working on long recordings.

pub mod estimators;
