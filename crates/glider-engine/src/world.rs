//! The simulation world: grid state, tick execution, and seeded
//! population.
//!
//! [`World`] owns the double-buffered board and the RNG. It has no
//! threads and no channels; everything here is synchronous. The run
//! controller in [`runner`](crate::runner) moves a `World` onto its
//! tick thread, and headless callers (tests, benchmarks, batch runs)
//! drive one directly.

use std::time::Instant;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use glider_core::{next_state, Command, CommandError, Density, EdgePolicy, Generation};
use glider_grid::{Board, Dims, Frame};

use crate::config::{ConfigError, WorldConfig};
use crate::metrics::TickMetrics;

/// A Life simulation: board, generation counter, and population RNG.
///
/// The RNG is seeded once at construction and never reseeded, so a
/// given seed yields the same sequence of populations across runs.
///
/// # Examples
///
/// ```
/// use glider_engine::{World, WorldConfig};
///
/// let mut world = World::new(&WorldConfig::new(5, 5)).unwrap();
/// world.set(1, 2, true).unwrap();
/// world.set(2, 2, true).unwrap();
/// world.set(3, 2, true).unwrap();
///
/// let metrics = world.tick();
/// // The blinker rotates in place; its population holds at 3.
/// assert_eq!(metrics.live_cells, 3);
/// assert!(world.get(2, 1));
/// ```
pub struct World {
    board: Board,
    rng: ChaCha8Rng,
    generation: Generation,
    last_metrics: TickMetrics,
}

impl World {
    /// Build a world from a validated configuration.
    pub fn new(config: &WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dims = Dims::new(config.cols, config.rows)?;
        Ok(Self {
            board: Board::new(dims, config.edge),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            generation: Generation(0),
            last_metrics: TickMetrics::default(),
        })
    }

    /// Advance the simulation by one generation.
    ///
    /// Every cell's next state is computed from the current buffer
    /// before any of it becomes visible, then one O(1) buffer swap
    /// publishes the whole generation at once. The center cell is read
    /// at its own in-range address; only the eight neighbor probes go
    /// through the edge policy.
    pub fn tick(&mut self) -> TickMetrics {
        let start = Instant::now();
        let dims = self.board.dims();
        let mut births = 0usize;
        let mut deaths = 0usize;
        let mut live = 0usize;

        for row in 0..dims.rows() {
            for col in 0..dims.cols() {
                let alive = self.board.get(col as i32, row as i32);
                let next = next_state(alive, self.board.live_neighbours(col, row));
                if next != alive {
                    if next {
                        births += 1;
                    } else {
                        deaths += 1;
                    }
                }
                if next {
                    live += 1;
                }
                self.board.set_next(col, row, next);
            }
        }

        self.board.swap();
        self.generation = Generation(self.generation.0 + 1);
        self.last_metrics = TickMetrics {
            generation: self.generation,
            live_cells: live,
            births,
            deaths,
            total_us: start.elapsed().as_micros() as u64,
        };
        self.last_metrics
    }

    /// Overwrite every cell by an independent draw at `density`.
    ///
    /// A cell comes up alive when its draw falls below the density;
    /// density 1.0 skips the draw so every cell is alive regardless of
    /// float comparison edge cases. Resets the generation counter.
    pub fn populate(&mut self, density: Density) {
        let d = density.value();
        let rng = &mut self.rng;
        self.board.fill_with(|_, _| d == 1.0 || rng.gen::<f64>() < d);
        self.generation = Generation(0);
    }

    /// Set every cell dead and reset the generation counter.
    pub fn clear(&mut self) {
        self.board.clear();
        self.generation = Generation(0);
    }

    /// Replace the board with a fresh all-dead grid at new dimensions.
    ///
    /// The edge policy carries over; cell state does not. Resets the
    /// generation counter.
    pub fn resize(&mut self, cols: u32, rows: u32) -> Result<(), CommandError> {
        let dims =
            Dims::new(cols, rows).map_err(|_| CommandError::InvalidDimensions { cols, rows })?;
        self.board = Board::new(dims, self.board.edge_policy());
        self.generation = Generation(0);
        Ok(())
    }

    /// Flip one cell, returning its new state.
    pub fn toggle(&mut self, col: u32, row: u32) -> Result<bool, CommandError> {
        self.check_bounds(col, row)?;
        Ok(self.board.toggle(col, row))
    }

    /// Write one cell to an explicit state.
    pub fn set(&mut self, col: u32, row: u32, alive: bool) -> Result<(), CommandError> {
        self.check_bounds(col, row)?;
        self.board.set(col, row, alive);
        Ok(())
    }

    /// Read one cell. Total: out-of-range coordinates read as dead.
    pub fn get(&self, col: i32, row: i32) -> bool {
        self.board.get(col, row)
    }

    /// Apply a grid command.
    ///
    /// Run-control commands are rejected as unsupported: a bare world
    /// has no schedule to drive. Submit those through a
    /// [`Runner`](crate::Runner) instead.
    pub fn apply(&mut self, command: &Command) -> Result<(), CommandError> {
        match *command {
            Command::Toggle { col, row } => self.toggle(col, row).map(|_| ()),
            Command::Set { col, row, alive } => self.set(col, row, alive),
            Command::Populate(density) => {
                self.populate(density);
                Ok(())
            }
            Command::Clear => {
                self.clear();
                Ok(())
            }
            Command::Resize { cols, rows } => self.resize(cols, rows),
            Command::SetEdge(edge) => {
                self.set_edge_policy(edge);
                Ok(())
            }
            Command::SetInterval(_) | Command::Play | Command::Pause | Command::Step => {
                Err(CommandError::UnsupportedCommand {
                    name: command.name(),
                })
            }
        }
    }

    /// Snapshot the current buffer as an owned [`Frame`].
    pub fn frame(&self) -> Frame {
        self.board.frame(self.generation)
    }

    /// Grid dimensions.
    pub fn dims(&self) -> Dims {
        self.board.dims()
    }

    /// The boundary policy in force.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.board.edge_policy()
    }

    /// Change the boundary policy. Cell state is untouched.
    pub fn set_edge_policy(&mut self, edge: EdgePolicy) {
        self.board.set_edge_policy(edge);
    }

    /// Generations elapsed since the last reset.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> TickMetrics {
        self.last_metrics
    }

    /// Live cells in the current buffer.
    pub fn live_cells(&self) -> usize {
        self.board.live_cells()
    }

    fn check_bounds(&self, col: u32, row: u32) -> Result<(), CommandError> {
        let dims = self.board.dims();
        if !dims.contains(col as i32, row as i32) {
            return Err(CommandError::OutOfBounds {
                col,
                row,
                cols: dims.cols(),
                rows: dims.rows(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn world(cols: u32, rows: u32) -> World {
        World::new(&WorldConfig::new(cols, rows)).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_world_is_dead_at_generation_zero() {
        let w = world(8, 6);
        assert_eq!(w.generation(), Generation(0));
        assert_eq!(w.live_cells(), 0);
        assert_eq!(w.dims().cols(), 8);
        assert_eq!(w.dims().rows(), 6);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = WorldConfig::new(0, 5);
        assert!(World::new(&cfg).is_err());
    }

    // ── Tick semantics ──────────────────────────────────────────

    #[test]
    fn blinker_rotates_and_metrics_count_flips() {
        let mut w = world(5, 5);
        w.set(1, 2, true).unwrap();
        w.set(2, 2, true).unwrap();
        w.set(3, 2, true).unwrap();

        let m = w.tick();
        assert_eq!(m.generation, Generation(1));
        assert_eq!(m.live_cells, 3);
        assert_eq!(m.births, 2); // (2,1) and (2,3) born
        assert_eq!(m.deaths, 2); // (1,2) and (3,2) died
        assert!(w.get(2, 1));
        assert!(w.get(2, 2));
        assert!(w.get(2, 3));
        assert!(!w.get(1, 2));
    }

    #[test]
    fn empty_world_stays_empty() {
        let mut w = world(6, 6);
        for _ in 0..5 {
            let m = w.tick();
            assert_eq!(m.live_cells, 0);
            assert_eq!(m.births, 0);
            assert_eq!(m.deaths, 0);
        }
        assert_eq!(w.generation(), Generation(5));
    }

    #[test]
    fn tick_metrics_are_retained() {
        let mut w = world(4, 4);
        let m = w.tick();
        let kept = w.last_metrics();
        assert_eq!(kept.generation, m.generation);
        assert_eq!(kept.live_cells, m.live_cells);
        assert_eq!(kept.births, m.births);
        assert_eq!(kept.deaths, m.deaths);
        assert_eq!(kept.total_us, m.total_us);
    }

    // ── Population ──────────────────────────────────────────────

    #[test]
    fn populate_zero_density_kills_everything() {
        let mut w = world(10, 10);
        w.set(3, 3, true).unwrap();
        w.populate(Density::ZERO);
        assert_eq!(w.live_cells(), 0);
    }

    #[test]
    fn populate_full_density_fills_everything() {
        let mut w = world(10, 10);
        w.populate(Density::ONE);
        assert_eq!(w.live_cells(), 100);
    }

    #[test]
    fn populate_is_deterministic_per_seed() {
        let cfg = WorldConfig {
            seed: 99,
            ..WorldConfig::new(16, 16)
        };
        let mut a = World::new(&cfg).unwrap();
        let mut b = World::new(&cfg).unwrap();
        let density = Density::new(0.4).unwrap();
        a.populate(density);
        b.populate(density);
        assert_eq!(a.frame().cells(), b.frame().cells());
    }

    #[test]
    fn successive_populates_advance_the_stream() {
        let mut w = world(16, 16);
        let density = Density::new(0.5).unwrap();
        w.populate(density);
        let first = w.frame();
        w.populate(density);
        // Same world, same density: the second board comes from later
        // draws of the same stream and differs from the first.
        assert_ne!(first.cells(), w.frame().cells());
    }

    #[test]
    fn populate_resets_generation() {
        let mut w = world(6, 6);
        w.tick();
        w.tick();
        assert_eq!(w.generation(), Generation(2));
        w.populate(Density::new(0.3).unwrap());
        assert_eq!(w.generation(), Generation(0));
    }

    // ── Direct mutation ─────────────────────────────────────────

    #[test]
    fn clear_resets_cells_and_generation() {
        let mut w = world(6, 6);
        w.set(2, 2, true).unwrap();
        w.tick();
        w.clear();
        assert_eq!(w.live_cells(), 0);
        assert_eq!(w.generation(), Generation(0));
    }

    #[test]
    fn resize_replaces_board_and_keeps_edge_policy() {
        let mut w = world(6, 6);
        w.set_edge_policy(EdgePolicy::Wrap);
        w.set(5, 5, true).unwrap();
        w.tick();

        w.resize(9, 3).unwrap();
        assert_eq!(w.dims().cols(), 9);
        assert_eq!(w.dims().rows(), 3);
        assert_eq!(w.live_cells(), 0);
        assert_eq!(w.generation(), Generation(0));
        assert_eq!(w.edge_policy(), EdgePolicy::Wrap);
    }

    #[test]
    fn resize_to_zero_is_rejected() {
        let mut w = world(6, 6);
        assert_eq!(
            w.resize(0, 4),
            Err(CommandError::InvalidDimensions { cols: 0, rows: 4 })
        );
        // The old board is untouched after a rejected resize.
        assert_eq!(w.dims().cols(), 6);
    }

    #[test]
    fn writes_outside_the_grid_are_rejected() {
        let mut w = world(4, 4);
        assert_eq!(
            w.set(4, 0, true),
            Err(CommandError::OutOfBounds {
                col: 4,
                row: 0,
                cols: 4,
                rows: 4
            })
        );
        assert!(w.toggle(0, 7).is_err());
        // Reads stay total.
        assert!(!w.get(4, 0));
    }

    // ── Command dispatch ────────────────────────────────────────

    #[test]
    fn apply_routes_grid_commands() {
        let mut w = world(5, 5);
        w.apply(&Command::Set {
            col: 1,
            row: 1,
            alive: true,
        })
        .unwrap();
        assert!(w.get(1, 1));

        w.apply(&Command::Toggle { col: 1, row: 1 }).unwrap();
        assert!(!w.get(1, 1));

        w.apply(&Command::SetEdge(EdgePolicy::Wrap)).unwrap();
        assert_eq!(w.edge_policy(), EdgePolicy::Wrap);

        w.apply(&Command::Populate(Density::ONE)).unwrap();
        assert_eq!(w.live_cells(), 25);

        w.apply(&Command::Clear).unwrap();
        assert_eq!(w.live_cells(), 0);

        w.apply(&Command::Resize { cols: 3, rows: 3 }).unwrap();
        assert_eq!(w.dims().cols(), 3);
    }

    #[test]
    fn apply_rejects_run_control() {
        let mut w = world(5, 5);
        for command in [
            Command::Play,
            Command::Pause,
            Command::Step,
            Command::SetInterval(Duration::from_millis(50)),
        ] {
            assert_eq!(
                w.apply(&command),
                Err(CommandError::UnsupportedCommand {
                    name: command.name()
                }),
                "{} should be unsupported",
                command.name()
            );
        }
    }

    // ── Frames ──────────────────────────────────────────────────

    #[test]
    fn frame_carries_generation_and_cells() {
        let mut w = world(4, 4);
        w.set(0, 0, true).unwrap();
        w.tick();
        let frame = w.frame();
        assert_eq!(frame.generation(), Generation(1));
        // A lone cell dies of isolation.
        assert_eq!(frame.live_cells(), 0);
    }

    // ── Property tests ──────────────────────────────────────────

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn populate_extremes_are_exact(
            cols in 1u32..24,
            rows in 1u32..24,
            seed in 0u64..1000,
        ) {
            let cfg = WorldConfig { seed, ..WorldConfig::new(cols, rows) };
            let mut w = World::new(&cfg).unwrap();

            w.populate(Density::ONE);
            prop_assert_eq!(w.live_cells(), w.dims().cell_count());

            w.populate(Density::ZERO);
            prop_assert_eq!(w.live_cells(), 0);
        }

        #[test]
        fn tick_preserves_dims_and_advances_generation(
            cols in 1u32..16,
            rows in 1u32..16,
            seed in 0u64..1000,
            ticks in 1usize..5,
        ) {
            let cfg = WorldConfig { seed, ..WorldConfig::new(cols, rows) };
            let mut w = World::new(&cfg).unwrap();
            w.populate(Density::new(0.5).unwrap());
            for _ in 0..ticks {
                w.tick();
            }
            prop_assert_eq!(w.dims().cell_count(), (cols * rows) as usize);
            prop_assert_eq!(w.generation(), Generation(ticks as u64));
        }
    }
}
