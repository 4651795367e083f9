//! # Reachability Graph
//!
//! Directed acyclic adjacency over joltage levels, plus the memoized path
//! counter that runs on it.
//!
//! Vertices are keyed by level value, not by position in the sequence.
//! Levels that never appear in the slice a graph was built from simply have
//! no adjacency entry; nothing ever traverses them because no edge refers
//! to them. All storage is `BTreeMap` for deterministic iteration.

use crate::primitives::MAX_STEP;
use crate::types::{ChainError, Level};
use std::collections::BTreeMap;

/// A directed graph over level values.
///
/// An edge `u -> v` means `v` lies later in the level sequence and
/// `v - u` is within the step bound, so an arrangement at level `u` can
/// plug in the adapter at level `v` next. Edges always point from a lower
/// level to a higher one, which makes the structure acyclic by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct ReachGraph {
    /// Adjacency: level -> outgoing neighbour levels, ascending.
    neighbours: BTreeMap<Level, Vec<Level>>,
}

impl ReachGraph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the reachability graph of an ascending slice of levels.
    ///
    /// For each position the scan walks forward, adding an edge per
    /// reachable level, and stops at the first step wider than
    /// [`MAX_STEP`] - the slice is sorted, so nothing beyond that point can
    /// be reachable either.
    #[must_use]
    pub fn from_levels(levels: &[Level]) -> Self {
        let mut graph = Self::new();
        for (i, &from) in levels.iter().enumerate() {
            let reachable: Vec<Level> = levels[i + 1..]
                .iter()
                .copied()
                .take_while(|&to| to.saturating_sub(from) <= MAX_STEP)
                .collect();
            graph.neighbours.insert(from, reachable);
        }
        graph
    }

    /// Insert a single directed edge.
    ///
    /// `from` must be strictly below `to`; edges that point downward or at
    /// their own vertex would introduce a cycle and are rejected.
    pub fn add_edge(&mut self, from: Level, to: Level) -> Result<(), ChainError> {
        if from >= to {
            return Err(ChainError::UnacceptableStep {
                from,
                to,
                gap: 0,
            });
        }
        self.neighbours.entry(from).or_default().push(to);
        Ok(())
    }

    /// Number of outgoing edges at a level.
    ///
    /// Levels the graph has never seen have degree 0.
    #[must_use]
    pub fn out_degree(&self, level: Level) -> usize {
        self.neighbours.get(&level).map_or(0, Vec::len)
    }

    /// Number of vertices with an adjacency entry.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Count the distinct directed paths from `src` to `dst`.
    ///
    /// `count_paths(v, v)` is 1: the empty path. Per-vertex counts to `dst`
    /// are memoized, so the walk is linear in the number of edges even on
    /// long unforced runs where naive enumeration would be exponential.
    ///
    /// Returns [`ChainError::CountOverflow`] if a count exceeds the u64
    /// range.
    pub fn count_paths(&self, src: Level, dst: Level) -> Result<u64, ChainError> {
        let mut memo: BTreeMap<Level, u64> = BTreeMap::new();
        self.paths_to(src, dst, &mut memo)
    }

    /// Recursive helper: paths from `at` to `dst`, memoized per vertex.
    fn paths_to(
        &self,
        at: Level,
        dst: Level,
        memo: &mut BTreeMap<Level, u64>,
    ) -> Result<u64, ChainError> {
        if at == dst {
            return Ok(1);
        }
        if let Some(&cached) = memo.get(&at) {
            return Ok(cached);
        }

        let mut total: u64 = 0;
        if let Some(reachable) = self.neighbours.get(&at) {
            for &next in reachable {
                let below = self.paths_to(next, dst, memo)?;
                total = total
                    .checked_add(below)
                    .ok_or(ChainError::CountOverflow)?;
            }
        }
        memo.insert(at, total);
        Ok(total)
    }
}

// =============================================================================
// TESTS
// =============================================================================
