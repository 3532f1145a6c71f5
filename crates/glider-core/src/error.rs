//! Command rejection reasons.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Why a [`Command`](crate::Command) was rejected.
///
/// Carried in [`Receipt::reason`](crate::Receipt) so the collaborator
/// can report the rejection; none of these are recoverable by the
/// engine itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommandError {
    /// A cell address fell outside the grid.
    OutOfBounds {
        /// Requested column.
        col: u32,
        /// Requested row.
        row: u32,
        /// Grid width in cells.
        cols: u32,
        /// Grid height in cells.
        rows: u32,
    },
    /// A density value was outside `[0, 1]` or not finite.
    InvalidDensity {
        /// The offending value, on the normalized scale.
        value: f64,
    },
    /// A resize requested dimensions the grid cannot represent.
    InvalidDimensions {
        /// Requested width in cells.
        cols: u32,
        /// Requested height in cells.
        rows: u32,
    },
    /// A tick interval of zero was requested.
    InvalidInterval {
        /// The offending interval.
        interval: Duration,
    },
    /// The command type is not supported by the executor it reached
    /// (run-control commands against a bare world, for example).
    UnsupportedCommand {
        /// Name of the rejected command.
        name: &'static str,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                col,
                row,
                cols,
                rows,
            } => {
                write!(f, "cell ({col}, {row}) is outside the {cols}x{rows} grid")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density {value} is outside [0, 1]")
            }
            Self::InvalidDimensions { cols, rows } => {
                write!(f, "grid dimensions {cols}x{rows} are not representable")
            }
            Self::InvalidInterval { interval } => {
                write!(f, "tick interval {interval:?} must be positive")
            }
            Self::UnsupportedCommand { name } => {
                write!(f, "command '{name}' is not supported by this executor")
            }
        }
    }
}

impl Error for CommandError {}
