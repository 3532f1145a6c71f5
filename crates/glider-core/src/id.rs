//! Strongly-typed counters.

use std::fmt;

/// Monotonically increasing generation counter.
///
/// Incremented each time the simulation advances one tick; reset to zero
/// when the grid is reseeded, cleared, or resized. Generation 0 is the
/// seed state before any tick has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
