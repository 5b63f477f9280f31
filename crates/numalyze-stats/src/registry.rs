//! Name-keyed registry of pluggable analysis callbacks.
//!
//! The registry is an explicit object with its own lifetime rather than
//! process-wide state: construct one, pass it by reference to whatever code
//! registers or resolves callbacks, and share it behind a lock if multiple
//! threads need to register concurrently. The statistics engine itself never
//! consults the registry.

use std::{collections::HashMap, fmt};

/// A boxed analysis callback.
///
/// Callbacks receive an immutable view of the input values and produce a
/// single [`AnalysisValue`]. They must be `Send + Sync` so a registry can be
/// shared across threads behind a lock.
pub type AnalysisFn = Box<dyn Fn(&[i64]) -> AnalysisValue + Send + Sync>;

/// The result of an analysis callback.
///
/// # Examples
///
/// ```
/// use numalyze_stats::registry::AnalysisValue;
///
/// let value = AnalysisValue::from(42_i64);
/// assert!(value.is_int());
///
/// let value = AnalysisValue::from(0.5);
/// assert!(value.is_float());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, derive_more::From, derive_more::IsVariant)]
pub enum AnalysisValue {
    /// An integer-valued result, such as a count or a range.
    Int(i64),
    /// A floating-point result, such as a ratio or a quantile.
    Float(f64),
}

/// A mapping from callback names to analysis callbacks.
///
/// Entries are added by [`register`](Self::register) and never removed; the
/// last registration for a given name silently wins.
///
/// # Examples
///
/// ```
/// use numalyze_stats::registry::{AnalysisValue, CallbackRegistry};
///
/// let mut registry = CallbackRegistry::new();
/// registry.register("sum", |values: &[i64]| {
///     AnalysisValue::Int(values.iter().sum())
/// });
/// assert_eq!(registry.run("sum", &[1, 2, 3]), Some(AnalysisValue::Int(6)));
/// assert_eq!(registry.run("product", &[1, 2, 3]), None);
/// ```
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: HashMap<String, AnalysisFn>,
}

impl CallbackRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under `name`.
    ///
    /// Overwrites any callback previously registered under the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&[i64]) -> AnalysisValue + Send + Sync + 'static,
    {
        self.callbacks.insert(name.into(), Box::new(callback));
    }

    /// Returns the callback registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AnalysisFn> {
        self.callbacks.get(name)
    }

    /// Runs the callback registered under `name` against `values`.
    ///
    /// Returns `None` if no callback is registered under `name`.
    #[must_use]
    pub fn run(&self, name: &str, values: &[i64]) -> Option<AnalysisValue> {
        self.callbacks.get(name).map(|callback| callback(values))
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Returns an iterator over the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.callbacks.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("CallbackRegistry")
            .field("names", &names)
            .finish()
    }
}
