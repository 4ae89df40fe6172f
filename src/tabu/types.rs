//! Tabu list memory and solution fingerprints.

use std::collections::{HashSet, VecDeque};

/// Serializes a bit vector into its tabu fingerprint, e.g. `[1, 0, 1]`
/// becomes `"101"`. Equal solutions always produce equal fingerprints.
pub fn fingerprint(solution: &[u8]) -> String {
    solution.iter().map(|&bit| char::from(b'0' + bit)).collect()
}

/// Bounded, insertion-ordered set of solution fingerprints.
///
/// A FIFO queue paired with a hash set for O(1) membership (the queue
/// defines eviction order, the set answers `contains`). When an insert
/// pushes the list past its capacity the oldest inserted entry is evicted,
/// regardless of how recently it was re-encountered. Re-inserting a
/// fingerprint that is already present does not refresh its position.
#[derive(Debug, Clone)]
pub struct TabuList {
    queue: VecDeque<String>,
    members: HashSet<String>,
    capacity: usize,
}

impl TabuList {
    /// Creates an empty list that holds at most `capacity` fingerprints.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity + 1),
            members: HashSet::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Whether `key` is currently tabu.
    pub fn contains(&self, key: &str) -> bool {
        self.members.contains(key)
    }

    /// Inserts a fingerprint, evicting the oldest entry if the list would
    /// exceed its capacity. A no-op when `key` is already present.
    pub fn insert(&mut self, key: String) {
        if self.members.contains(&key) {
            return;
        }
        self.members.insert(key.clone());
        self.queue.push_back(key);

        if self.queue.len() > self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.members.remove(&oldest);
            }
        }
    }

    /// Number of fingerprints currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
