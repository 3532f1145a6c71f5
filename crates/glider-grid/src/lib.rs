//! Grid state storage for the glider Game of Life engine.
//!
//! This crate owns the cell buffers and nothing else: a [`Board`] holds
//! two equally-sized row-major buffers that alternate between "current"
//! (read by neighbor counts and the renderer) and "write" (the target
//! of the in-progress tick), swapped by a role flip rather than a copy.
//! Edge topology is resolved here too, so callers probe neighbors near
//! boundaries without special-casing.
//!
//! Rule application, randomness, and scheduling all live upstream in
//! `glider-engine`; this crate performs no I/O and knows nothing about
//! time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod dims;
pub mod error;
pub mod frame;

pub use board::Board;
pub use dims::Dims;
pub use error::GridError;
pub use frame::Frame;
