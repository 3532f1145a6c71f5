//! Core types for the glider Game of Life engine.
//!
//! This is the leaf crate with zero dependencies. It defines the rule
//! table, the command/receipt vocabulary shared by every execution
//! surface, and the small value types (generation counter, density,
//! edge policy) the rest of the workspace builds on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod density;
pub mod edge;
pub mod error;
pub mod id;
pub mod rule;

pub use command::{Command, Receipt};
pub use density::Density;
pub use edge::EdgePolicy;
pub use error::CommandError;
pub use id::Generation;
pub use rule::next_state;
