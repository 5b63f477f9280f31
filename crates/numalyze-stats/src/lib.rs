//! Descriptive statistics for integer sequences.
//!
//! This crate computes summary statistics over finite sequences of `i64`
//! values and provides a registry for plugging in additional named analysis
//! callbacks beyond the built-in set.
//!
//! # Modules
//!
//! - [`descriptive`]: Full descriptive analysis of a sequence (count, min,
//!   max, total, mean, median, population standard deviation)
//! - [`sorted`]: Non-mutating sorted copies of integer slices
//! - [`registry`]: Name-keyed registry of pluggable analysis callbacks
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use numalyze_stats::descriptive::Analysis;
//!
//! let analysis = Analysis::compute(&[5, 9, 2, 4, 11, 13]);
//! assert_eq!(analysis.count, 6);
//! assert_eq!(analysis.min, 2);
//! assert_eq!(analysis.max, 13);
//! assert_eq!(analysis.median, 7.0);
//! ```
//!
//! ## Registering a custom analysis callback
//!
//! ```
//! use numalyze_stats::registry::{AnalysisValue, CallbackRegistry};
//!
//! let mut registry = CallbackRegistry::new();
//! registry.register("range", |values: &[i64]| {
//!     let min = values.iter().min().copied().unwrap_or(0);
//!     let max = values.iter().max().copied().unwrap_or(0);
//!     AnalysisValue::Int(max - min)
//! });
//! assert_eq!(registry.run("range", &[5, 9, 2]), Some(AnalysisValue::Int(7)));
//! ```

pub mod descriptive;
pub mod registry;
pub mod sorted;
