//! Grid construction errors.

use std::error::Error;
use std::fmt;

/// Errors from grid dimension validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An axis was zero; the grid would have no cells.
    EmptyAxis {
        /// Which axis ("cols" or "rows").
        axis: &'static str,
    },
    /// An axis exceeds what neighbor arithmetic can address.
    AxisTooLarge {
        /// Which axis ("cols" or "rows").
        axis: &'static str,
        /// The requested size.
        value: u32,
        /// The maximum representable size.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis { axis } => write!(f, "grid {axis} must be positive"),
            Self::AxisTooLarge { axis, value, max } => {
                write!(f, "grid {axis} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}
