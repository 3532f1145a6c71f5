//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for constructing a [`World`](crate::World)
//! or spawning a [`Runner`](crate::Runner). [`validate()`](WorldConfig::validate)
//! checks structural invariants up front so the tick thread never starts
//! on a grid it cannot run.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use glider_core::EdgePolicy;
use glider_grid::{Dims, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// Tick interval is zero.
    IntervalZero,
    /// Command channel capacity is zero.
    CommandBufferZero,
    /// The tick thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::IntervalZero => write!(f, "tick interval must be non-zero"),
            Self::CommandBufferZero => write!(f, "command_buffer must be at least 1"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation world.
///
/// [`WorldConfig::new`] fills in the conventional defaults; override
/// fields directly for anything else.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use glider_core::EdgePolicy;
/// use glider_engine::WorldConfig;
///
/// let config = WorldConfig {
///     edge: EdgePolicy::Wrap,
///     interval: Duration::from_millis(50),
///     ..WorldConfig::new(40, 30)
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Grid width in cells. Must be positive.
    pub cols: u32,
    /// Grid height in cells. Must be positive.
    pub rows: u32,
    /// Boundary policy for neighbor probes. Default: `Bounded`.
    pub edge: EdgePolicy,
    /// Delay between scheduled ticks while playing. Default: 200ms.
    pub interval: Duration,
    /// RNG seed for deterministic population. Default: 0.
    pub seed: u64,
    /// Capacity of the command channel into the tick thread. Default: 64.
    pub command_buffer: usize,
}

impl WorldConfig {
    /// Configuration for a `cols` x `rows` grid with default policies.
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            edge: EdgePolicy::Bounded,
            interval: Duration::from_millis(200),
            seed: 0,
            command_buffer: 64,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Both grid axes must be positive and addressable.
        Dims::new(self.cols, self.rows)?;
        // 2. The tick interval must be non-zero.
        if self.interval.is_zero() {
            return Err(ConfigError::IntervalZero);
        }
        // 3. Command channel capacity must admit at least one command.
        if self.command_buffer == 0 {
            return Err(ConfigError::CommandBufferZero);
        }
        Ok(())
    }
}
