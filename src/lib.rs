//! Randomized heuristic solvers for the 0/1 knapsack problem.
//!
//! Three independent solvers share one data model and one fitness
//! evaluator:
//!
//! - **Genetic Algorithm ([`ga`])**: Population-based evolution with
//!   tournament selection, single-point crossover and per-bit mutation.
//! - **GRASP ([`grasp`])**: Greedy randomized construction over a
//!   restricted candidate list, followed by a pairwise-flip local search.
//! - **Tabu Search ([`tabu`])**: Single-bit-flip trajectory search with a
//!   bounded FIFO memory of recently visited solutions.
//!
//! All solvers are pure, single-threaded computations over an immutable
//! [`ProblemInstance`]: each call owns its population, candidate set or
//! tabu list exclusively, so concurrent calls on shared instances are
//! safe. Infeasible candidates score exactly `0` — a hard feasibility
//! wall, not a graded penalty.
//!
//! # Reproducibility
//!
//! Every config carries an optional seed. `None` draws a fresh random
//! seed per call; pass `Some` for deterministic runs (tests do).
//!
//! # Example
//!
//! ```
//! use knapsack_metaheur::ga::GaConfig;
//! use knapsack_metaheur::{solve_genetic, Item, ProblemInstance};
//!
//! let instance = ProblemInstance::new(
//!     vec![
//!         Item::new(10.0, 120.0),
//!         Item::new(20.0, 100.0),
//!         Item::new(30.0, 90.0),
//!     ],
//!     50.0,
//! );
//! let result = solve_genetic(&instance, &GaConfig::default().with_seed(42)).unwrap();
//! assert!(result.value <= 220.0);
//! ```

pub mod error;
pub mod ga;
pub mod grasp;
pub mod problem;
pub mod tabu;

pub use error::ConfigError;
pub use problem::{evaluate, Item, ProblemInstance, Solution, SolveResult};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Solves an instance with the genetic algorithm.
///
/// Thin wrapper over [`ga::GaRunner::run`].
pub fn solve_genetic(
    instance: &ProblemInstance,
    config: &ga::GaConfig,
) -> Result<SolveResult, ConfigError> {
    ga::GaRunner::run(instance, config)
}

/// Solves an instance with GRASP.
///
/// Thin wrapper over [`grasp::GraspRunner::run`].
pub fn solve_grasp(
    instance: &ProblemInstance,
    config: &grasp::GraspConfig,
) -> Result<SolveResult, ConfigError> {
    grasp::GraspRunner::run(instance, config)
}

/// Solves an instance with tabu search.
///
/// Thin wrapper over [`tabu::TabuRunner::run`].
pub fn solve_tabu(
    instance: &ProblemInstance,
    config: &tabu::TabuConfig,
) -> Result<SolveResult, ConfigError> {
    tabu::TabuRunner::run(instance, config)
}

/// One RNG per solve call, seeded explicitly or from entropy.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
