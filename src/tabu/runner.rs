//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Build a feasible seed solution (in-order coin-flip inclusion)
//! 2. At each iteration:
//!    a. Sample single-bit-flip neighbors of the current solution
//!    b. Move to the fittest non-tabu neighbor (skip the iteration when
//!       every neighbor is tabu)
//!    c. Update the tracked global best on strict improvement
//!    d. Record the new current solution in the tabu list
//! 3. Terminate after max iterations; return the tracked best, which may
//!    differ from the final current solution

use rand::Rng;
use tracing::{debug, trace};

use super::config::TabuConfig;
use super::types::{fingerprint, TabuList};
use crate::error::ConfigError;
use crate::problem::{evaluate, ProblemInstance, Solution, SolveResult};
use crate::rng_from_seed;

/// Executes the tabu search solver.
///
/// # Usage
///
/// ```
/// use knapsack_metaheur::tabu::{TabuConfig, TabuRunner};
/// use knapsack_metaheur::{Item, ProblemInstance};
///
/// let instance = ProblemInstance::new(
///     vec![Item::new(10.0, 120.0), Item::new(20.0, 100.0)],
///     30.0,
/// );
/// let config = TabuConfig::default().with_seed(42);
/// let result = TabuRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.value, 220.0);
/// ```
pub struct TabuRunner;

impl TabuRunner {
    /// Runs the tabu search and returns the best solution visited.
    pub fn run(
        instance: &ProblemInstance,
        config: &TabuConfig,
    ) -> Result<SolveResult, ConfigError> {
        config.validate()?;
        instance.validate()?;

        let n = instance.len();
        if instance.nothing_fits() {
            return Ok(SolveResult::empty(n));
        }

        let mut rng = rng_from_seed(config.seed);

        let mut current = initial_solution(instance, &mut rng);
        let mut best = current.clone();
        let mut best_value = evaluate(&current, instance);
        let mut tabu = TabuList::new(config.tabu_size);

        for iteration in 0..config.max_iterations {
            let mut neighbors: Vec<(Solution, f64)> = (0..config.neighborhood_size)
                .map(|_| {
                    let mut neighbor = current.clone();
                    let index = rng.random_range(0..n);
                    neighbor[index] ^= 1;
                    let value = evaluate(&neighbor, instance);
                    (neighbor, value)
                })
                .collect();

            neighbors.sort_by(|a, b| {
                b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
            });

            // Fittest non-tabu neighbor; skip the iteration when all
            // sampled neighbors are tabu.
            let selected = neighbors
                .into_iter()
                .find(|(neighbor, _)| !tabu.contains(&fingerprint(neighbor)));
            let Some((neighbor, value)) = selected else {
                trace!(iteration, "all neighbors tabu, skipping");
                continue;
            };

            current = neighbor;
            if value > best_value {
                debug!(iteration, value, "tabu: new best");
                best = current.clone();
                best_value = value;
            }

            tabu.insert(fingerprint(&current));
        }

        debug!(value = best_value, "tabu solver finished");
        Ok(SolveResult {
            solution: best,
            value: best_value,
        })
    }
}

/// Feasible but unoptimized seed: walk the items in order and include each
/// one that still fits, gated by an independent 50% coin flip.
fn initial_solution<R: Rng>(instance: &ProblemInstance, rng: &mut R) -> Solution {
    let mut solution = vec![0; instance.len()];
    let mut current_weight = 0.0;

    for (index, item) in instance.items.iter().enumerate() {
        if current_weight + item.weight <= instance.capacity && rng.random_bool(0.5) {
            solution[index] = 1;
            current_weight += item.weight;
        }
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;

    fn scenario_instance() -> ProblemInstance {
        ProblemInstance::new(
            vec![
                Item::new(10.0, 120.0),
                Item::new(20.0, 100.0),
                Item::new(30.0, 90.0),
            ],
            50.0,
        )
    }

    #[test]
    fn test_scenario_reaches_good_value() {
        let instance = scenario_instance();
        let config = TabuConfig::default().with_seed(42);

        let result = TabuRunner::run(&instance, &config).unwrap();

        assert!(result.value <= 220.0);
        assert!(
            result.value >= 180.0,
            "expected value >= 180, got {}",
            result.value
        );
    }

    #[test]
    fn test_result_is_consistent() {
        let instance = scenario_instance();
        let config = TabuConfig::default().with_seed(7);

        let result = TabuRunner::run(&instance, &config).unwrap();

        assert_eq!(result.solution.len(), instance.len());
        assert!(result.solution.iter().all(|&b| b == 0 || b == 1));
        assert_eq!(result.value, evaluate(&result.solution, &instance));
    }

    #[test]
    fn test_seed_reproducibility() {
        let instance = scenario_instance();
        let config = TabuConfig::default().with_seed(123);

        let a = TabuRunner::run(&instance, &config).unwrap();
        let b = TabuRunner::run(&instance, &config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_initial_solution_is_feasible() {
        let instance = scenario_instance();
        let mut rng = rng_from_seed(Some(42));

        for _ in 0..100 {
            let seed_solution = initial_solution(&instance, &mut rng);
            let weight: f64 = seed_solution
                .iter()
                .zip(&instance.items)
                .filter(|(b, _)| **b == 1)
                .map(|(_, item)| item.weight)
                .sum();
            assert!(weight <= instance.capacity);
        }
    }

    #[test]
    fn test_zero_capacity_returns_all_zero() {
        let instance = ProblemInstance::new(vec![Item::new(5.0, 10.0)], 0.0);
        let config = TabuConfig::default().with_seed(42);

        let result = TabuRunner::run(&instance, &config).unwrap();

        assert_eq!(result.solution, vec![0]);
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_single_fitting_item() {
        let instance = ProblemInstance::new(vec![Item::new(5.0, 33.0)], 10.0);
        let config = TabuConfig::default().with_seed(42);

        let result = TabuRunner::run(&instance, &config).unwrap();

        assert_eq!(result.solution, vec![1]);
        assert_eq!(result.value, 33.0);
    }

    #[test]
    fn test_tiny_tabu_list_still_works() {
        // With capacity 1 the list forbids only the previous solution;
        // the search must still make progress.
        let instance = scenario_instance();
        let config = TabuConfig::default().with_tabu_size(1).with_seed(42);

        let result = TabuRunner::run(&instance, &config).unwrap();

        assert!(result.value > 0.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let config = TabuConfig::default();
        assert_eq!(
            TabuRunner::run(&ProblemInstance::new(vec![], 10.0), &config),
            Err(ConfigError::EmptyItems)
        );
        assert!(TabuRunner::run(
            &scenario_instance(),
            &TabuConfig::default().with_tabu_size(0)
        )
        .is_err());
    }
}
