//! Core types for the bytevec container.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error type shared across the workspace and the capacity growth
//! policy used by the engine when a mutation outgrows the buffer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod growth;

pub use error::ArrayError;
pub use growth::GrowthPolicy;
