//! Commands and receipts for driving a simulation.
//!
//! User interactions (a clicked cell, a pressed play button, a moved
//! interval slider) become [`Command`] values, decoupled from whatever
//! input technology produced them. Each submitted command is answered
//! with a [`Receipt`].

use crate::density::Density;
use crate::edge::EdgePolicy;
use crate::error::CommandError;
use crate::id::Generation;
use std::time::Duration;

/// A single operation against the simulation.
///
/// Grid commands (`Toggle` through `SetEdge`) mutate world state and are
/// honored by any executor. Run-control commands (`SetInterval` through
/// `Step`) drive the tick schedule and only make sense against a run
/// controller; a bare world rejects them as unsupported.
///
/// # Examples
///
/// ```
/// use glider_core::{Command, Density};
///
/// let click = Command::Toggle { col: 3, row: 7 };
/// let reseed = Command::Populate(Density::new(0.3).unwrap());
///
/// assert_eq!(click.name(), "toggle");
/// assert_eq!(reseed.name(), "populate");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Flip one cell in the current buffer.
    Toggle {
        /// Target column.
        col: u32,
        /// Target row.
        row: u32,
    },
    /// Set one cell in the current buffer to an explicit state.
    Set {
        /// Target column.
        col: u32,
        /// Target row.
        row: u32,
        /// The state to write.
        alive: bool,
    },
    /// Overwrite every cell by an independent random draw at the given
    /// density. Resets the generation counter.
    Populate(Density),
    /// Set every cell dead. Resets the generation counter.
    Clear,
    /// Reallocate the grid at new dimensions, all cells dead. Resets
    /// the generation counter.
    Resize {
        /// New width in cells.
        cols: u32,
        /// New height in cells.
        rows: u32,
    },
    /// Change the boundary policy. Takes effect from the next tick; a
    /// tick in progress has already latched its policy.
    SetEdge(EdgePolicy),
    /// Change the interval between scheduled ticks. An already-armed
    /// schedule keeps its deadline; the next re-arm uses the new value.
    SetInterval(Duration),
    /// Start ticking on the configured interval, with one immediate
    /// tick first. No-op while already running.
    Play,
    /// Stop ticking and cancel any pending scheduled tick. No-op while
    /// already stopped.
    Pause,
    /// Stop ticking if running, then perform exactly one tick. Always
    /// ends stopped.
    Step,
}

impl Command {
    /// Short stable name for receipts and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::Set { .. } => "set",
            Self::Populate(_) => "populate",
            Self::Clear => "clear",
            Self::Resize { .. } => "resize",
            Self::SetEdge(_) => "set_edge",
            Self::SetInterval(_) => "set_interval",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Step => "step",
        }
    }

    /// Whether this command drives the tick schedule rather than grid
    /// state.
    pub fn is_run_control(&self) -> bool {
        matches!(
            self,
            Self::SetInterval(_) | Self::Play | Self::Pause | Self::Step
        )
    }
}

/// Outcome of one submitted [`Command`].
///
/// # Examples
///
/// ```
/// use glider_core::{Generation, Receipt};
///
/// let ok = Receipt::applied(Generation(4));
/// assert!(ok.accepted);
/// assert_eq!(ok.generation, Some(Generation(4)));
/// assert!(ok.reason.is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Receipt {
    /// Whether the command was accepted.
    pub accepted: bool,
    /// The generation the command applied at, if accepted.
    pub generation: Option<Generation>,
    /// Why the command was rejected, if it was.
    pub reason: Option<CommandError>,
}

impl Receipt {
    /// Receipt for a command applied at `generation`.
    pub fn applied(generation: Generation) -> Self {
        Self {
            accepted: true,
            generation: Some(generation),
            reason: None,
        }
    }

    /// Receipt for a rejected command.
    pub fn rejected(reason: CommandError) -> Self {
        Self {
            accepted: false,
            generation: None,
            reason: Some(reason),
        }
    }
}
