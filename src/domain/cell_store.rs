//! Sparse storage of live cells.
//! Only live coordinates are kept, so memory scales with population
//! rather than with the area being simulated.

use super::Coord;
use rustc_hash::FxHashSet;

/// Deduplicated set of live coordinates.
/// Knows nothing about simulation rules.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct CellStore {
    cells: FxHashSet<Coord>,
}

/// Mutations recorded against a snapshot and applied together.
///
/// Nothing queued here is visible through the store until
/// [`CellStore::commit`] runs, so a whole generation can be evaluated
/// against the cells as they were when it started.
#[derive(Clone, Default, Debug)]
pub struct Batch {
    adds: Vec<Coord>,
    removes: Vec<Coord>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, coord: Coord) {
        self.adds.push(coord);
    }

    pub fn remove(&mut self, coord: Coord) {
        self.removes.push(coord);
    }

    /// Number of queued additions
    pub fn births(&self) -> usize {
        self.adds.len()
    }

    /// Number of queued removals
    pub fn deaths(&self) -> usize {
        self.removes.len()
    }
}

impl CellStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff coord is currently live
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Add coord; no-op if already present
    pub fn insert(&mut self, coord: Coord) {
        self.cells.insert(coord);
    }

    /// Remove coord; no-op if absent
    pub fn remove(&mut self, coord: Coord) {
        self.cells.remove(&coord);
    }

    /// Number of live cells, O(1)
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Every live cell, in unspecified order.
    /// Sort the result before comparing it.
    pub fn all(&self) -> Vec<Coord> {
        self.iter().collect()
    }

    /// Borrow the underlying set for parallel iteration
    pub(crate) fn as_set(&self) -> &FxHashSet<Coord> {
        &self.cells
    }

    /// Apply a batch as one step: all removals, then all additions
    pub fn commit(&mut self, batch: Batch) {
        for coord in batch.removes {
            self.remove(coord);
        }
        for coord in batch.adds {
            self.insert(coord);
        }
    }
}

impl FromIterator<Coord> for CellStore {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
