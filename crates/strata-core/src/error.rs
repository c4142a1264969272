//! Partitioning error types

use thiserror::Error;

/// Result type alias for partitioning operations
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Errors that can occur while ingesting or partitioning points
///
/// Every variant aborts the whole call; no partial result is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    /// No points were supplied
    #[error("Input is empty: at least one point is required")]
    EmptyInput,

    /// A point's feature count differs from the first point's (or is zero)
    #[error("Point {index} has {found} feature(s), expected {expected}")]
    InvalidDimension {
        /// Position of the offending point in the input, or 1 for operand
        /// `b` of a two-point comparison
        index: usize,
        /// Feature count established by the first point
        expected: usize,
        /// Feature count of the offending point
        found: usize,
    },

    /// A feature value is NaN or infinite
    #[error("Point {index} has non-finite value {value} at feature {feature}")]
    InvalidFeatureValue {
        /// Position of the offending point in the input
        index: usize,
        /// Feature position within the point
        feature: usize,
        /// The rejected value
        value: f64,
    },

    /// The configured objective list does not match the point dimensionality
    #[error("Configured {found} objective(s) for points with {expected} feature(s)")]
    ObjectiveMismatch {
        /// Dimensionality of the points
        expected: usize,
        /// Number of configured objectives
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PartitionError::InvalidDimension {
            index: 3,
            expected: 2,
            found: 4,
        };
        assert_eq!(err.to_string(), "Point 3 has 4 feature(s), expected 2");

        let err = PartitionError::InvalidFeatureValue {
            index: 0,
            feature: 1,
            value: f64::NAN,
        };
        assert!(err.to_string().contains("non-finite value NaN"));
    }
}
