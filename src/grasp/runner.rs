//! GRASP execution: randomized greedy construction plus local search.

use rand::Rng;
use tracing::{debug, trace};

use super::config::{GraspConfig, Improvement};
use crate::error::ConfigError;
use crate::problem::{evaluate, ProblemInstance, Solution, SolveResult};
use crate::rng_from_seed;

/// Random bit-pair flips examined per local-search round.
const ATTEMPTS_PER_ROUND: usize = 20;

/// An unselected item during construction, with its greedy ranking key.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    weight: f64,
    ratio: f64,
}

/// Executes the GRASP solver.
///
/// # Usage
///
/// ```
/// use knapsack_metaheur::grasp::{GraspConfig, GraspRunner};
/// use knapsack_metaheur::{Item, ProblemInstance};
///
/// let instance = ProblemInstance::new(
///     vec![Item::new(10.0, 120.0), Item::new(20.0, 100.0)],
///     30.0,
/// );
/// let config = GraspConfig::default().with_seed(42);
/// let result = GraspRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.value, 220.0);
/// ```
pub struct GraspRunner;

impl GraspRunner {
    /// Runs `max_iterations` independent construct + local-search cycles
    /// and returns the best solution seen.
    pub fn run(
        instance: &ProblemInstance,
        config: &GraspConfig,
    ) -> Result<SolveResult, ConfigError> {
        config.validate()?;
        instance.validate()?;

        let n = instance.len();
        if instance.nothing_fits() {
            return Ok(SolveResult::empty(n));
        }

        let mut rng = rng_from_seed(config.seed);

        let mut best_solution = vec![0; n];
        let mut best_value = 0.0;

        for iteration in 0..config.max_iterations {
            let constructed = construct(instance, config.alpha, &mut rng);
            let improved = local_search(
                instance,
                constructed,
                config.max_local_search_steps,
                config.improvement,
                &mut rng,
            );
            let value = evaluate(&improved, instance);

            trace!(iteration, value, "grasp cycle complete");
            if value > best_value {
                debug!(iteration, value, "grasp: new best");
                best_solution = improved;
                best_value = value;
            }
        }

        debug!(value = best_value, "grasp solver finished");
        Ok(SolveResult {
            solution: best_solution,
            value: best_value,
        })
    }
}

/// Feasible candidates whose ratio is within `alpha` of the best available
/// ratio, recomputed from scratch at every construction step.
///
/// Empty only when no remaining candidate fits the residual capacity.
fn build_rcl(remaining: &[Candidate], residual: f64, alpha: f64) -> Vec<Candidate> {
    let mut feasible: Vec<Candidate> = remaining
        .iter()
        .copied()
        .filter(|c| c.weight <= residual)
        .collect();
    if feasible.is_empty() {
        return feasible;
    }

    feasible.sort_by(|a, b| {
        b.ratio
            .partial_cmp(&a.ratio)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let max_ratio = feasible[0].ratio;
    let min_ratio = feasible[feasible.len() - 1].ratio;
    let threshold = max_ratio - alpha * (max_ratio - min_ratio);

    feasible.retain(|c| c.ratio >= threshold);
    feasible
}

/// Randomized greedy construction: repeatedly pick a uniform random member
/// of the RCL until nothing else fits.
fn construct<R: Rng>(instance: &ProblemInstance, alpha: f64, rng: &mut R) -> Solution {
    let mut solution = vec![0; instance.len()];
    let mut residual = instance.capacity;
    let mut remaining: Vec<Candidate> = instance
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| Candidate {
            index,
            weight: item.weight,
            ratio: item.ratio(),
        })
        .collect();

    while !remaining.is_empty() {
        let rcl = build_rcl(&remaining, residual, alpha);
        if rcl.is_empty() {
            break;
        }

        let picked = rcl[rng.random_range(0..rcl.len())];
        solution[picked.index] = 1;
        residual -= picked.weight;
        remaining.retain(|c| c.index != picked.index);
    }

    solution
}

/// Hill-climb over random bit-pair flips.
///
/// Runs up to `max_steps` rounds, continuing only while the previous round
/// improved. Each round samples up to [`ATTEMPTS_PER_ROUND`] index pairs
/// with replacement; pairs with `i == j` are skipped without counting an
/// improvement.
fn local_search<R: Rng>(
    instance: &ProblemInstance,
    start: Solution,
    max_steps: usize,
    improvement: Improvement,
    rng: &mut R,
) -> Solution {
    let n = start.len();
    let mut best = start;
    let mut best_value = evaluate(&best, instance);

    let mut improved = true;
    let mut steps = 0;
    while improved && steps < max_steps {
        improved = false;
        steps += 1;

        let mut round_best: Option<(Solution, f64)> = None;
        for _ in 0..ATTEMPTS_PER_ROUND {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            if i == j {
                continue;
            }

            let mut candidate = best.clone();
            candidate[i] ^= 1;
            candidate[j] ^= 1;
            let value = evaluate(&candidate, instance);
            if value <= best_value {
                continue;
            }

            match improvement {
                Improvement::First => {
                    best = candidate;
                    best_value = value;
                    improved = true;
                    break;
                }
                Improvement::Best => {
                    if round_best.as_ref().map_or(true, |(_, v)| value > *v) {
                        round_best = Some((candidate, value));
                    }
                }
            }
        }

        if let Some((solution, value)) = round_best {
            best = solution;
            best_value = value;
            improved = true;
        }
    }

    best
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
        let config = GraspConfig::default().with_seed(42);

        let result = GraspRunner::run(&instance, &config).unwrap();

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
        let config = GraspConfig::default().with_seed(7);

        let result = GraspRunner::run(&instance, &config).unwrap();

        assert_eq!(result.solution.len(), instance.len());
        assert!(result.solution.iter().all(|&b| b == 0 || b == 1));
        assert_eq!(result.value, evaluate(&result.solution, &instance));
    }

    #[test]
    fn test_seed_reproducibility() {
        let instance = scenario_instance();
        let config = GraspConfig::default().with_seed(123);

        let a = GraspRunner::run(&instance, &config).unwrap();
        let b = GraspRunner::run(&instance, &config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_greedy_alpha_zero_finds_scenario_optimum() {
        // alpha = 0 keeps only the top-ratio candidate at each step:
        // item 0 (ratio 12), then item 1 (ratio 5), then item 2 no longer
        // fits. Construction alone reaches the optimum 220.
        let instance = scenario_instance();
        let config = GraspConfig::default().with_alpha(0.0).with_seed(42);

        let result = GraspRunner::run(&instance, &config).unwrap();

        assert_eq!(result.value, 220.0);
        assert_eq!(result.solution, vec![1, 1, 0]);
    }

    #[test]
    fn test_best_improvement_policy() {
        let instance = scenario_instance();
        let config = GraspConfig::default()
            .with_improvement(Improvement::Best)
            .with_seed(42);

        let result = GraspRunner::run(&instance, &config).unwrap();

        assert!(result.value >= 180.0);
        assert_eq!(result.value, evaluate(&result.solution, &instance));
    }

    #[test]
    fn test_zero_capacity_returns_all_zero() {
        let instance = ProblemInstance::new(vec![Item::new(5.0, 10.0)], 0.0);
        let config = GraspConfig::default().with_seed(42);

        let result = GraspRunner::run(&instance, &config).unwrap();

        assert_eq!(result.solution, vec![0]);
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_single_fitting_item() {
        let instance = ProblemInstance::new(vec![Item::new(5.0, 33.0)], 10.0);
        let config = GraspConfig::default().with_seed(42);

        let result = GraspRunner::run(&instance, &config).unwrap();

        assert_eq!(result.solution, vec![1]);
        assert_eq!(result.value, 33.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let config = GraspConfig::default();
        assert_eq!(
            GraspRunner::run(&ProblemInstance::new(vec![], 10.0), &config),
            Err(ConfigError::EmptyItems)
        );
        assert!(GraspRunner::run(
            &scenario_instance(),
            &GraspConfig::default().with_alpha(2.0)
        )
        .is_err());
    }

    #[test]
    fn test_construction_stays_feasible() {
        let instance = scenario_instance();
        let mut rng = rng_from_seed(Some(42));

        for _ in 0..50 {
            let solution = construct(&instance, 1.0, &mut rng);
            assert!(evaluate(&solution, &instance) > 0.0);
        }
    }

    #[test]
    fn test_rcl_never_empty_while_something_fits() {
        let remaining = vec![
            Candidate {
                index: 0,
                weight: 10.0,
                ratio: 12.0,
            },
            Candidate {
                index: 1,
                weight: 20.0,
                ratio: 5.0,
            },
        ];

        assert!(!build_rcl(&remaining, 15.0, 0.0).is_empty());
        assert!(build_rcl(&remaining, 5.0, 1.0).is_empty());
    }

    #[test]
    fn test_rcl_grows_with_alpha() {
        // Widening alpha toward 1 never shrinks the RCL.
        let remaining: Vec<Candidate> = [12.0, 9.0, 5.0, 3.0, 1.0]
            .iter()
            .enumerate()
            .map(|(index, &ratio)| Candidate {
                index,
                weight: 1.0,
                ratio,
            })
            .collect();

        let mut previous = 0;
        for alpha in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
            let size = build_rcl(&remaining, 100.0, alpha).len();
            assert!(
                size >= previous,
                "RCL shrank from {previous} to {size} at alpha {alpha}"
            );
            previous = size;
        }
        // alpha 0 keeps only the single best ratio; alpha 1 keeps all.
        assert_eq!(build_rcl(&remaining, 100.0, 0.0).len(), 1);
        assert_eq!(build_rcl(&remaining, 100.0, 1.0).len(), 5);
    }

    #[test]
    fn test_local_search_passes_all_zero_through() {
        // Degenerate start: nothing can improve because every pair flip
        // either stays at value 0 or is infeasible.
        let instance = ProblemInstance::new(
            vec![Item::new(60.0, 10.0), Item::new(70.0, 20.0)],
            50.0,
        );
        let mut rng = rng_from_seed(Some(42));

        let result = local_search(&instance, vec![0, 0], 100, Improvement::First, &mut rng);

        assert_eq!(result, vec![0, 0]);
    }

    #[test]
    fn test_local_search_improves_poor_start() {
        // Start with only the worst-ratio item; flipping the pair (0, 2)
        // swaps it for the best item and improves value 90 -> 120.
        let instance = scenario_instance();
        let mut rng = rng_from_seed(Some(42));

        let result = local_search(&instance, vec![0, 0, 1], 100, Improvement::First, &mut rng);

        assert!(evaluate(&result, &instance) > 90.0);
    }
}
