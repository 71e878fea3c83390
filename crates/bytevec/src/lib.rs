//! Runtime-typed growable contiguous container over opaque byte slots.
//!
//! The engine is [`RawArray`]: one contiguous buffer plus three scalars
//! (length, capacity, element byte size), with amortized-O(1) append
//! under the default geometric [`GrowthPolicy`] and exact byte-level
//! semantics for insert, remove, split, append, and swap.
//!
//! [`Array<T>`] layers a compile-time element type over the same
//! engine for callers who know their type statically.
//!
//! # Error channels
//!
//! Resource failures (allocation, size overflow) are recoverable
//! `Result`s carrying [`ArrayError`], with the array always left in
//! its last-known-valid state. Contract violations (bad indices, zero
//! element sizes, mismatched element widths) panic immediately.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod raw;
pub mod typed;

// Public re-exports for the primary API surface.
pub use bytevec_core::{ArrayError, GrowthPolicy};
pub use raw::RawArray;
pub use typed::Array;
