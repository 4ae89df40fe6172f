//! GRASP solver (greedy randomized adaptive search procedure).
//!
//! Each iteration builds a solution with a randomized greedy construction
//! driven by a restricted candidate list (RCL) over value/weight ratios,
//! then polishes it with a randomized pairwise-flip local search. The best
//! solution over all iterations is returned; no memory is carried between
//! iterations.
//!
//! # Key Types
//!
//! - [`GraspConfig`]: iteration counts, RCL relaxation factor `alpha`,
//!   local-search policy, seed
//! - [`GraspRunner`]: executes construct + local-search cycles
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures",
//!   *Journal of Global Optimization* 6, 109-133.

mod config;
mod runner;

pub use config::{GraspConfig, Improvement};
pub use runner::GraspRunner;
