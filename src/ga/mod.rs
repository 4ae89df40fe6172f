//! Genetic algorithm solver.
//!
//! Evolves a population of bit-vector candidates through tournament
//! selection, single-point crossover and per-bit mutation. The population
//! is replaced wholesale each generation — there is no elitism, so the
//! best individual of one generation is not guaranteed to survive into
//! the next.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation count, mutation rate,
//!   tournament size, seed
//! - [`GaRunner`]: executes the evolutionary loop
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::GaRunner;
