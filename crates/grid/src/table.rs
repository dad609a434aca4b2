//! Timed result table for one strategy over the triangular grid.

use std::collections::BTreeMap;
use std::time::Duration;

/// One timed grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Coefficient value the strategy returned.
    pub value: f64,
    /// Wall-clock duration of the single timed call.
    pub elapsed: Duration,
}

/// Completed evaluation of one strategy over the grid n in 1..=n_max,
/// k in 0..=n.
///
/// Backed by an ordered map keyed on (n, k), so [`cells`](Self::cells)
/// iterates deterministically row-major. Tables are immutable once
/// returned; the only way to obtain one is
/// [`evaluate_grid`](crate::evaluate_grid).
#[derive(Debug, Clone)]
pub struct ResultTable {
    n_max: u32,
    cells: BTreeMap<(u32, u32), Cell>,
}

impl ResultTable {
    pub(crate) fn new(n_max: u32) -> Self {
        Self {
            n_max,
            cells: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, n: u32, k: u32, cell: Cell) {
        self.cells.insert((n, k), cell);
    }

    /// Largest row n covered by this table.
    pub fn n_max(&self) -> u32 {
        self.n_max
    }

    /// Number of cells, `n_max * (n_max + 3) / 2` for a full grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the table holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Looks up the cell for (n, k), if present.
    pub fn get(&self, n: u32, k: u32) -> Option<&Cell> {
        self.cells.get(&(n, k))
    }

    /// Iterates cells in row-major order: increasing n, then increasing k.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &Cell)> {
        self.cells.iter().map(|(&(n, k), cell)| (n, k, cell))
    }

    /// Total wall time across every cell, the per-strategy summary scalar.
    pub fn total_time(&self) -> Duration {
        self.cells.values().map(|cell| cell.elapsed).sum()
    }
}
