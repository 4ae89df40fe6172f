//! Tabu search solver.
//!
//! A single-solution trajectory search over single-bit-flip neighborhoods,
//! guided by a bounded FIFO memory of recently visited solutions (the tabu
//! list). Forbidding recent solutions prevents short cycles and pushes the
//! walk into unexplored regions.
//!
//! # Key Types
//!
//! - [`TabuConfig`]: iteration count, tabu list capacity, neighborhood size, seed
//! - [`TabuList`]: insertion-ordered fingerprint memory with FIFO eviction
//! - [`TabuRunner`]: executes the search
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::TabuRunner;
pub use types::{fingerprint, TabuList};
