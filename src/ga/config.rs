//! Genetic algorithm configuration.

use crate::error::ConfigError;

/// Configuration for the genetic algorithm solver.
///
/// # Defaults
///
/// ```
/// use knapsack_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population, fully replaced each
    /// generation.
    pub population_size: usize,

    /// Number of generations to evolve before returning the best
    /// individual of the final population.
    pub generations: usize,

    /// Probability of flipping each bit of an offspring, applied
    /// independently per bit (0.0–1.0).
    pub mutation_rate: f64,

    /// Individuals drawn (with replacement) per tournament; the fittest
    /// of the draw becomes a parent.
    pub tournament_size: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 100,
            mutation_rate: 0.1,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-bit mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range values are rejected, never clamped: the caller asked
    /// for something this solver will not silently reinterpret.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroParameter {
                name: "population_size",
            });
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroParameter { name: "generations" });
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroParameter {
                name: "tournament_size",
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) || self.mutation_rate.is_nan() {
            return Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                value: self.mutation_rate,
            });
        }
        Ok(())
    }
}
