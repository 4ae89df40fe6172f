//! Knapsack data model and the shared fitness evaluator.
//!
//! One [`ProblemInstance`] is built by the caller and shared read-only
//! across every solver; each solver returns a [`SolveResult`] whose `value`
//! always equals [`evaluate`] of its `solution`.

use crate::error::ConfigError;

/// A single knapsack item. Weight and value are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    /// Value per unit of weight, the greedy ranking key used by GRASP.
    pub fn ratio(&self) -> f64 {
        self.value / self.weight
    }
}

/// Candidate solution: one binary decision variable per item, index-aligned
/// with [`ProblemInstance::items`]. Every entry is exactly `0` or `1`.
pub type Solution = Vec<u8>;

/// A 0/1 knapsack instance: an ordered item list and a capacity.
///
/// Immutable for the duration of a solve call. The same instance may be
/// passed to any number of concurrent solver invocations; solvers keep all
/// mutable state private to the call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemInstance {
    pub items: Vec<Item>,
    pub capacity: f64,
}

impl ProblemInstance {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self { items, capacity }
    }

    /// Number of items (= length of every candidate solution).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks the data-model invariants: at least one item, finite
    /// non-negative capacity, strictly positive weights and values.
    ///
    /// Called by every solver entry point before any search work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::EmptyItems);
        }
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(ConfigError::NegativeCapacity(self.capacity));
        }
        for (index, item) in self.items.iter().enumerate() {
            if !(item.weight > 0.0) || !item.weight.is_finite() {
                return Err(ConfigError::NonPositiveItem {
                    index,
                    field: "weight",
                    value: item.weight,
                });
            }
            if !(item.value > 0.0) || !item.value.is_finite() {
                return Err(ConfigError::NonPositiveItem {
                    index,
                    field: "value",
                    value: item.value,
                });
            }
        }
        Ok(())
    }

    /// True when not even the lightest single item fits the capacity.
    ///
    /// Covers `capacity == 0` for valid instances. Solvers short-circuit
    /// this case to the all-zero solution.
    pub fn nothing_fits(&self) -> bool {
        self.items.iter().all(|item| item.weight > self.capacity)
    }
}

/// Best solution found by a solver run, with its objective value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Bit vector, one entry per item.
    pub solution: Solution,
    /// Objective value; equals `evaluate(&solution, instance)`.
    pub value: f64,
}

impl SolveResult {
    /// The all-zero solution for an `n`-item instance.
    pub(crate) fn empty(n: usize) -> Self {
        Self {
            solution: vec![0; n],
            value: 0.0,
        }
    }
}

/// Scores a candidate against an instance.
///
/// Sums weight and value over the included indices. Returns the value sum
/// when the weight sum is within capacity, otherwise exactly `0.0` — a hard
/// feasibility wall with no graded penalty. Pure and deterministic.
pub fn evaluate(solution: &[u8], instance: &ProblemInstance) -> f64 {
    debug_assert_eq!(solution.len(), instance.len());

    let mut total_weight = 0.0;
    let mut total_value = 0.0;
    for (bit, item) in solution.iter().zip(&instance.items) {
        if *bit == 1 {
            total_weight += item.weight;
            total_value += item.value;
        }
    }

    if total_weight <= instance.capacity {
        total_value
    } else {
        0.0
    }
}
