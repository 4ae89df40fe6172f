//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement.

use rand::Rng;
use tracing::{debug, trace};

use super::config::GaConfig;
use crate::error::ConfigError;
use crate::problem::{evaluate, ProblemInstance, Solution, SolveResult};
use crate::rng_from_seed;

/// A candidate with its cached fitness, evaluated once at creation.
#[derive(Clone)]
struct Chromosome {
    bits: Solution,
    fitness: f64,
}

impl Chromosome {
    fn new(bits: Solution, instance: &ProblemInstance) -> Self {
        let fitness = evaluate(&bits, instance);
        Self { bits, fitness }
    }
}

/// Executes the genetic algorithm.
///
/// # Usage
///
/// ```
/// use knapsack_metaheur::ga::{GaConfig, GaRunner};
/// use knapsack_metaheur::{Item, ProblemInstance};
///
/// let instance = ProblemInstance::new(
///     vec![Item::new(10.0, 120.0), Item::new(20.0, 100.0)],
///     30.0,
/// );
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&instance, &config).unwrap();
/// assert_eq!(result.solution.len(), 2);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the evolutionary loop and returns the fittest individual of
    /// the final generation.
    pub fn run(
        instance: &ProblemInstance,
        config: &GaConfig,
    ) -> Result<SolveResult, ConfigError> {
        config.validate()?;
        instance.validate()?;

        let n = instance.len();
        if instance.nothing_fits() {
            return Ok(SolveResult::empty(n));
        }

        let mut rng = rng_from_seed(config.seed);

        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::new(random_bits(n, &mut rng), instance))
            .collect();

        for generation in 0..config.generations {
            sort_by_fitness_desc(&mut population);

            let mut next_gen: Vec<Chromosome> = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, &mut rng);
                let p2 = tournament(&population, config.tournament_size, &mut rng);

                let (mut child1, mut child2) =
                    crossover(&population[p1].bits, &population[p2].bits, &mut rng);
                mutate(&mut child1, config.mutation_rate, &mut rng);
                mutate(&mut child2, config.mutation_rate, &mut rng);

                next_gen.push(Chromosome::new(child1, instance));
                if next_gen.len() < config.population_size {
                    next_gen.push(Chromosome::new(child2, instance));
                }
            }

            // Wholesale replacement, no elitism.
            population = next_gen;

            trace!(
                generation,
                best = population
                    .iter()
                    .map(|c| c.fitness)
                    .fold(f64::NEG_INFINITY, f64::max),
                "generation complete"
            );
        }

        sort_by_fitness_desc(&mut population);
        let best = population.into_iter().next().expect("population is non-empty");
        debug!(value = best.fitness, "genetic solver finished");

        Ok(SolveResult {
            solution: best.bits,
            value: best.fitness,
        })
    }
}

fn random_bits<R: Rng>(n: usize, rng: &mut R) -> Solution {
    (0..n).map(|_| u8::from(rng.random_bool(0.5))).collect()
}

fn sort_by_fitness_desc(population: &mut [Chromosome]) {
    population.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Tournament selection: draw `k` individuals with replacement, return the
/// index of the fittest. Duplicate draws are allowed, so both parents of a
/// pair may coincide.
fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let contender = rng.random_range(0..n);
        if population[contender].fitness > population[best].fitness {
            best = contender;
        }
    }
    best
}

/// Single-point crossover at a uniformly random cut index.
///
/// The first child takes the prefix of `parent1` and the suffix of
/// `parent2`; the second child is the mirror image.
fn crossover<R: Rng>(parent1: &[u8], parent2: &[u8], rng: &mut R) -> (Solution, Solution) {
    let cut = rng.random_range(0..parent1.len());
    let mut child1 = Vec::with_capacity(parent1.len());
    let mut child2 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..cut]);
    child1.extend_from_slice(&parent2[cut..]);
    child2.extend_from_slice(&parent2[..cut]);
    child2.extend_from_slice(&parent1[cut..]);
    (child1, child2)
}

/// Flips each bit independently with probability `rate`.
fn mutate<R: Rng>(bits: &mut [u8], rate: f64, rng: &mut R) {
    for bit in bits.iter_mut() {
        if rng.random::<f64>() < rate {
            *bit ^= 1;
        }
    }
}
