//! GRASP configuration.

use crate::error::ConfigError;

/// Local-search acceptance policy.
///
/// Both policies examine the same bounded number of random bit-pair flips
/// per round; they differ in which improving flip is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Improvement {
    /// Accept the first improving flip and end the round immediately.
    #[default]
    First,
    /// Examine every attempt in the round and keep the best improving flip.
    Best,
}

/// Configuration for the GRASP solver.
///
/// # Defaults
///
/// ```
/// use knapsack_metaheur::grasp::{GraspConfig, Improvement};
///
/// let config = GraspConfig::default();
/// assert_eq!(config.max_iterations, 20);
/// assert_eq!(config.alpha, 0.3);
/// assert_eq!(config.max_local_search_steps, 100);
/// assert_eq!(config.improvement, Improvement::First);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of independent construct + local-search cycles.
    pub max_iterations: usize,

    /// RCL relaxation factor in `[0, 1]`.
    ///
    /// `0.0` keeps only the best-ratio candidates (pure greedy);
    /// `1.0` admits every feasible candidate (pure random construction).
    pub alpha: f64,

    /// Maximum local-search rounds per iteration. A round only follows
    /// another if the previous one improved the solution.
    pub max_local_search_steps: usize,

    /// Which improving flip a local-search round accepts.
    pub improvement: Improvement,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            alpha: 0.3,
            max_local_search_steps: 100,
            improvement: Improvement::First,
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Sets the number of construct + local-search iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the RCL relaxation factor.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the maximum local-search rounds per iteration.
    pub fn with_max_local_search_steps(mut self, n: usize) -> Self {
        self.max_local_search_steps = n;
        self
    }

    /// Sets the local-search acceptance policy.
    pub fn with_improvement(mut self, improvement: Improvement) -> Self {
        self.improvement = improvement;
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
        if self.max_local_search_steps == 0 {
            return Err(ConfigError::ZeroParameter {
                name: "max_local_search_steps",
            });
        }
        if !(0.0..=1.0).contains(&self.alpha) || self.alpha.is_nan() {
            return Err(ConfigError::RateOutOfRange {
                name: "alpha",
                value: self.alpha,
            });
        }
        Ok(())
    }
}
