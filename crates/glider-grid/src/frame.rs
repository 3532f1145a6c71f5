//! Owned, immutable snapshots of board state.

use crate::dims::Dims;
use glider_core::Generation;

/// An owned copy of one generation's cells.
///
/// A frame is produced by [`Board::frame`](crate::Board::frame) and
/// carries its own cell storage, so it stays valid and unchanged while
/// the board ticks on. This is what crosses the thread boundary to
/// renderers and sinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    dims: Dims,
    generation: Generation,
    cells: Vec<bool>,
}

impl Frame {
    pub(crate) fn new(dims: Dims, generation: Generation, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), dims.cell_count());
        Self {
            dims,
            generation,
            cells,
        }
    }

    /// Dimensions of the captured grid.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The generation counter at capture time.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Reads a captured cell. Total: out-of-range coordinates read as
    /// dead, mirroring [`Board::get`](crate::Board::get).
    pub fn alive(&self, col: i32, row: i32) -> bool {
        if !self.dims.contains(col, row) {
            return false;
        }
        self.cells[self.dims.index(col as u32, row as u32)]
    }

    /// The captured cells in row-major order.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells in the snapshot.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
