//! Glider: a Conway's Game of Life engine with double-buffered grids
//! and threaded run control.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all glider sub-crates. For most users, adding `glider` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use glider::prelude::*;
//!
//! // A 5x5 world with a blinker across the middle row.
//! let mut world = World::new(&WorldConfig::new(5, 5)).unwrap();
//! for col in 1..=3 {
//!     world.set(col, 2, true).unwrap();
//! }
//!
//! world.tick();
//! assert_eq!(world.generation(), Generation(1));
//! // The blinker now stands vertically.
//! assert!(world.get(2, 1) && world.get(2, 2) && world.get(2, 3));
//! ```
//!
//! # Run control
//!
//! [`Runner`](prelude::Runner) owns the world on a dedicated tick
//! thread; commands go in, receipts and frames come out:
//!
//! ```rust
//! use glider::prelude::*;
//!
//! let mut runner = Runner::spawn(&WorldConfig::new(32, 24), |frame: &Frame| {
//!     // Repaint from `frame` here.
//!     let _ = frame.live_cells();
//! })
//! .unwrap();
//!
//! let density = Density::new(0.3).unwrap();
//! runner.submit(Command::Populate(density)).unwrap();
//! runner.step().unwrap();
//! assert_eq!(runner.run_state(), RunState::Stopped);
//!
//! let world = runner.shutdown().unwrap();
//! assert_eq!(world.generation(), Generation(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `glider-core` | Rule table, commands, receipts, shared types |
//! | [`grid`] | `glider-grid` | Double-buffered board, dimensions, frames |
//! | [`engine`] | `glider-engine` | World, tick thread, run control |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Rule table, commands, and shared types (`glider-core`).
///
/// Contains the [`types::next_state`] rule function, the
/// [`types::Command`] and [`types::Receipt`] pair, and small shared
/// types like [`types::Density`] and [`types::EdgePolicy`].
pub use glider_core as types;

/// Double-buffered board and frame snapshots (`glider-grid`).
///
/// [`grid::Board`] holds the two cell buffers and resolves neighbor
/// probes under the edge policy; [`grid::Frame`] is the owned snapshot
/// handed to renderers.
pub use glider_grid as grid;

/// World, tick orchestration, and run control (`glider-engine`).
///
/// [`engine::World`] for synchronous headless stepping,
/// [`engine::Runner`] for autonomous background ticking.
pub use glider_engine as engine;

/// Common imports for typical glider usage.
///
/// ```rust
/// use glider::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use glider_core::{
        next_state, Command, CommandError, Density, EdgePolicy, Generation, Receipt,
    };

    // Grid
    pub use glider_grid::{Board, Dims, Frame, GridError};

    // Engine
    pub use glider_engine::{
        ConfigError, FrameSink, RunState, Runner, SubmitError, TickMetrics, World, WorldConfig,
    };
}
