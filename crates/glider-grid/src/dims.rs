//! Validated grid dimensions and row-major indexing.

use crate::error::GridError;
use std::fmt;

/// Grid dimensions in cells, fixed for the lifetime of a board.
///
/// Both axes are positive and at most [`Dims::MAX_DIM`], so any cell
/// coordinate and any of its eight neighbor offsets fit in `i32`
/// without overflow.
///
/// # Examples
///
/// ```
/// use glider_grid::Dims;
///
/// let dims = Dims::new(40, 25).unwrap();
/// assert_eq!(dims.cols(), 40);
/// assert_eq!(dims.cell_count(), 1000);
/// assert!(Dims::new(0, 25).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    cols: u32,
    rows: u32,
}

impl Dims {
    /// Maximum axis size: coordinates travel through `i32` offsets.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Creates validated dimensions.
    ///
    /// Returns [`GridError::EmptyAxis`] if either axis is zero and
    /// [`GridError::AxisTooLarge`] if either exceeds [`Dims::MAX_DIM`].
    pub fn new(cols: u32, rows: u32) -> Result<Self, GridError> {
        if cols == 0 {
            return Err(GridError::EmptyAxis { axis: "cols" });
        }
        if rows == 0 {
            return Err(GridError::EmptyAxis { axis: "rows" });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::AxisTooLarge {
                axis: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::AxisTooLarge {
                axis: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { cols, rows })
    }

    /// Width in cells.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Height in cells.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Whether a (possibly negative) coordinate lies inside the grid.
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols as i32 && row >= 0 && row < self.rows as i32
    }

    /// Row-major buffer index of an in-range cell.
    #[inline]
    pub fn index(&self, col: u32, row: u32) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}
