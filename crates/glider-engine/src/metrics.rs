//! Per-tick metrics for the simulation engine.
//!
//! [`TickMetrics`] captures population and timing data for a single
//! tick. The world records them after every pass; consumers read them
//! from the most recent tick for status lines and profiling.

use glider_core::Generation;

/// Population and timing counters collected during a single tick.
///
/// The population counters are deterministic for a given seed and
/// command history; `total_us` is wall-clock and varies run to run, so
/// the struct carries no equality. Compare the counter fields directly
/// where a test needs to.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickMetrics {
    /// Generation number after the tick.
    pub generation: Generation,
    /// Live cells after the tick.
    pub live_cells: usize,
    /// Cells that went from dead to alive this tick.
    pub births: usize,
    /// Cells that went from alive to dead this tick.
    pub deaths: usize,
    /// Wall-clock time for the whole pass, in microseconds.
    pub total_us: u64,
}
