//! Descriptive analysis of integer sequences.

use crate::sorted::sorted_copy;

/// Descriptive statistics summarizing a sequence of integers.
///
/// All fields hold zero for an empty input sequence. Note that `min` and
/// `max` therefore collide with legitimate zero values: a result with
/// `min == 0` may come from an empty sequence or from a sequence containing
/// zero. Check `count` to distinguish the two.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Number of elements analyzed.
    pub count: usize,
    /// The minimum value in the sequence; zero when the sequence is empty.
    pub min: i64,
    /// The maximum value in the sequence; zero when the sequence is empty.
    pub max: i64,
    /// Sum of all elements.
    pub total: i64,
    /// The arithmetic mean (average) of the sequence.
    pub mean: f64,
    /// The median of the sequence. For an even count this is the average of
    /// the two central elements of the sorted sequence.
    pub median: f64,
    /// The population standard deviation (divides by `count`, not
    /// `count - 1`).
    pub std_dev: f64,
}

impl Analysis {
    /// Computes descriptive statistics for the given values.
    ///
    /// The input is read in a single pass for `min`, `max`, and `total`,
    /// then revisited for the standard deviation and sorted into a copy for
    /// the median. The slice itself is never mutated or retained.
    ///
    /// An empty slice yields the all-zero analysis; no arithmetic is
    /// performed on that path.
    ///
    /// # Arguments
    ///
    /// * `values` - The sequence to analyze. May be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use numalyze_stats::descriptive::Analysis;
    ///
    /// let analysis = Analysis::compute(&[5, 9, 2, 4, 11, 13]);
    /// assert_eq!(analysis.count, 6);
    /// assert_eq!(analysis.min, 2);
    /// assert_eq!(analysis.max, 13);
    /// assert_eq!(analysis.total, 44);
    /// assert_eq!(analysis.median, 7.0);
    /// ```
    ///
    /// ```
    /// use numalyze_stats::descriptive::Analysis;
    ///
    /// assert_eq!(Analysis::compute(&[]), Analysis::default());
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn compute(values: &[i64]) -> Self {
        let mut output = Self {
            count: values.len(),
            ..Self::default()
        };
        let Some(&first) = values.first() else {
            return output;
        };

        output.min = first;
        output.max = first;
        for &value in values {
            output.total += value;
            if value < output.min {
                output.min = value;
            }
            if value > output.max {
                output.max = value;
            }
        }

        output.mean = output.total as f64 / output.count as f64;
        output.std_dev = population_std_dev(values, output.mean);

        let sorted = sorted_copy(values);
        output.median = if output.count % 2 == 0 {
            (sorted[output.count / 2 - 1] + sorted[output.count / 2]) as f64 / 2.0
        } else {
            sorted[output.count / 2] as f64
        };

        output
    }
}

/// Computes the population standard deviation of `values` around a
/// precomputed mean.
///
/// Accumulates the squared deviations in `f64`, divides by the element
/// count, and takes the square root.
///
/// # Arguments
///
/// * `values` - The sequence the mean was computed over
/// * `mean` - The arithmetic mean of `values`
///
/// # Panics
///
/// Panics if `values` is empty.
///
/// # Examples
///
/// ```
/// use numalyze_stats::descriptive::population_std_dev;
///
/// assert_eq!(population_std_dev(&[7], 7.0), 0.0);
/// assert_eq!(population_std_dev(&[1, 3], 2.0), 1.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn population_std_dev(values: &[i64], mean: f64) -> f64 {
    assert!(!values.is_empty(), "values must contain at least one element");

    let total_dev = values
        .iter()
        .map(|&value| (value as f64 - mean).powi(2))
        .sum::<f64>();
    (total_dev / values.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_all_zero() {
        let analysis = Analysis::compute(&[]);
        assert_eq!(analysis.count, 0);
        assert_eq!(analysis.min, 0);
        assert_eq!(analysis.max, 0);
        assert_eq!(analysis.total, 0);
        assert_eq!(analysis.mean, 0.0);
        assert_eq!(analysis.median, 0.0);
        assert_eq!(analysis.std_dev, 0.0);
    }

    #[test]
    fn test_even_count_sequence() {
        let analysis = Analysis::compute(&[5, 9, 2, 4, 11, 13]);
        assert_eq!(analysis.count, 6);
        assert_eq!(analysis.min, 2);
        assert_eq!(analysis.max, 13);
        assert_eq!(analysis.total, 44);
        assert!((analysis.mean - 22.0 / 3.0).abs() < 1e-12);
        // Median averages the sorted central elements 5 and 9.
        assert_eq!(analysis.median, 7.0);
        assert!((analysis.std_dev - (140.0_f64 / 9.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_element_sequence() {
        let analysis = Analysis::compute(&[7]);
        assert_eq!(analysis.count, 1);
        assert_eq!(analysis.min, 7);
        assert_eq!(analysis.max, 7);
        assert_eq!(analysis.total, 7);
        assert_eq!(analysis.mean, 7.0);
        assert_eq!(analysis.median, 7.0);
        assert_eq!(analysis.std_dev, 0.0);
    }

    #[test]
    fn test_odd_count_median_is_central_element() {
        let analysis = Analysis::compute(&[3, 1, 4, 1, 5]);
        assert_eq!(analysis.median, 3.0);
    }

    #[test]
    fn test_min_max_are_members_and_bounds() {
        let values = [4, -2, 19, 0, 7];
        let analysis = Analysis::compute(&values);
        assert!(values.contains(&analysis.min));
        assert!(values.contains(&analysis.max));
        for value in values {
            assert!(analysis.min <= value);
            assert!(value <= analysis.max);
        }
    }

    #[test]
    fn test_median_is_permutation_invariant() {
        let baseline = Analysis::compute(&[5, 9, 2, 4, 11, 13]).median;
        for permuted in [
            [13, 11, 4, 2, 9, 5],
            [2, 4, 5, 9, 11, 13],
            [9, 13, 5, 11, 2, 4],
        ] {
            assert_eq!(Analysis::compute(&permuted).median, baseline);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let values = vec![9, 1, 8, 2];
        let before = values.clone();
        let _ = Analysis::compute(&values);
        assert_eq!(values, before);
    }

    #[test]
    fn test_negative_values() {
        let analysis = Analysis::compute(&[-5, -1, -3]);
        assert_eq!(analysis.min, -5);
        assert_eq!(analysis.max, -1);
        assert_eq!(analysis.total, -9);
        assert_eq!(analysis.mean, -3.0);
        assert_eq!(analysis.median, -3.0);
    }

    #[test]
    fn test_population_std_dev_constant_sequence() {
        assert_eq!(population_std_dev(&[6, 6, 6, 6], 6.0), 0.0);
    }

    #[test]
    fn test_population_std_dev_divides_by_count() {
        // Sample deviation of [2, 4, 4, 4, 5, 5, 7, 9] would be ~2.138;
        // the population form divides by 8 and yields exactly 2.
        let values = [2, 4, 4, 4, 5, 5, 7, 9];
        assert_eq!(population_std_dev(&values, 5.0), 2.0);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn test_population_std_dev_rejects_empty_input() {
        let _ = population_std_dev(&[], 0.0);
    }
}
