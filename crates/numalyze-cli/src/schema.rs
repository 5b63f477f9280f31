use numalyze_stats::descriptive::Analysis;
use serde::{Deserialize, Serialize};

/// Serialized form of a computed analysis.
///
/// Field names are part of the JSON output contract, so the record is kept
/// separate from the library's [`Analysis`] type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Number of elements analyzed
    pub count: usize,
    /// Minimum value (zero when no elements were analyzed)
    pub min: i64,
    /// Maximum value (zero when no elements were analyzed)
    pub max: i64,
    /// Sum of all elements
    pub total: i64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median of the sorted sequence
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl From<&Analysis> for AnalysisRecord {
    fn from(analysis: &Analysis) -> Self {
        Self {
            count: analysis.count,
            min: analysis.min,
            max: analysis.max,
            total: analysis.total,
            mean: analysis.mean,
            median: analysis.median,
            std_dev: analysis.std_dev,
        }
    }
}
