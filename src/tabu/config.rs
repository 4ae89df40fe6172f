//! Tabu search configuration.

use crate::error::ConfigError;

/// Configuration for the tabu search solver.
///
/// # Defaults
///
/// ```
/// use knapsack_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.tabu_size, 10);
/// assert_eq!(config.neighborhood_size, 20);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of search iterations.
    pub max_iterations: usize,

    /// Capacity of the tabu list; the oldest fingerprint is evicted when
    /// the list would exceed this size.
    pub tabu_size: usize,

    /// Single-bit-flip neighbors sampled per iteration. Flip indices are
    /// drawn independently, so duplicates are possible.
    pub neighborhood_size: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tabu_size: 10,
            neighborhood_size: 20,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, n: usize) -> Self {
        self.tabu_size = n;
        self
    }

    /// Sets the number of neighbors sampled per iteration.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroParameter {
                name: "max_iterations",
            });
        }
        if self.tabu_size == 0 {
            return Err(ConfigError::ZeroParameter { name: "tabu_size" });
        }
        if self.neighborhood_size == 0 {
            return Err(ConfigError::ZeroParameter {
                name: "neighborhood_size",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.tabu_size, 10);
        assert_eq!(config.neighborhood_size, 20);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TabuConfig::default()
            .with_max_iterations(500)
            .with_tabu_size(7)
            .with_neighborhood_size(30)
            .with_seed(42);

        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.tabu_size, 7);
        assert_eq!(config.neighborhood_size, 30);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_zero_parameters() {
        assert_eq!(
            TabuConfig::default().with_max_iterations(0).validate(),
            Err(ConfigError::ZeroParameter {
                name: "max_iterations"
            })
        );
        assert!(TabuConfig::default().with_tabu_size(0).validate().is_err());
        assert!(TabuConfig::default()
            .with_neighborhood_size(0)
            .validate()
            .is_err());
    }
}
