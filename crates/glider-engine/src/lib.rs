//! Tick orchestration, population seeding, and run control.
//!
//! This crate turns the passive grid from `glider-grid` into a running
//! simulation:
//!
//! - [`World`]: board + rule application + seeded RNG, fully
//!   synchronous. Construct one directly for headless use.
//! - [`Runner`]: moves a `World` onto a dedicated tick thread and
//!   schedules automatic ticks. Commands go in, receipts and
//!   [`Frame`](glider_grid::Frame)s come out.
//!
//! # Threading model
//!
//! One thread owns the world; everyone else talks to it over a bounded
//! channel. There are no locks and no shared mutable state, so a tick
//! pass can never observe (or be observed in) a half-updated
//! generation.
//!
//! # Determinism
//!
//! The population RNG (ChaCha8) is seeded from
//! [`WorldConfig::seed`] once at construction. Equal seeds plus equal
//! command sequences produce equal boards, which is what makes the
//! integration tests in this crate exact instead of statistical.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod runner;
mod tick_thread;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use metrics::TickMetrics;
pub use runner::{FrameSink, RunState, Runner, SubmitError};
pub use world::World;
