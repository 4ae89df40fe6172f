//! Error taxonomy for solver entry points.
//!
//! All failures are configuration failures detected before any search work
//! starts. Once an instance and a config pass validation, the solvers are
//! plain bounded arithmetic and cannot fail at runtime.

use thiserror::Error;

/// Rejected instance or solver configuration.
///
/// Returned by [`solve_genetic`](crate::solve_genetic),
/// [`solve_grasp`](crate::solve_grasp) and [`solve_tabu`](crate::solve_tabu)
/// before any partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The instance contains no items.
    #[error("instance has no items")]
    EmptyItems,

    /// Capacity is negative or not a finite number.
    #[error("capacity must be finite and non-negative, got {0}")]
    NegativeCapacity(f64),

    /// An item has a weight or value that is not strictly positive.
    #[error("item {index}: {field} must be positive, got {value}")]
    NonPositiveItem {
        /// Position of the offending item in the instance.
        index: usize,
        /// `"weight"` or `"value"`.
        field: &'static str,
        value: f64,
    },

    /// A rate parameter lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// A count parameter that must be at least 1 is zero.
    #[error("{name} must be positive")]
    ZeroParameter { name: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ConfigError::EmptyItems.to_string(), "instance has no items");
        assert_eq!(
            ConfigError::NegativeCapacity(-3.0).to_string(),
            "capacity must be finite and non-negative, got -3"
        );
        assert_eq!(
            ConfigError::RateOutOfRange {
                name: "alpha",
                value: 1.5
            }
            .to_string(),
            "alpha must be within [0, 1], got 1.5"
        );
        assert_eq!(
            ConfigError::ZeroParameter {
                name: "population_size"
            }
            .to_string(),
            "population_size must be positive"
        );
    }
}
