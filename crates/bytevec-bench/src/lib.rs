//! Benchmark helpers for the bytevec container.
//!
//! Provides pre-built arrays for the criterion benches:
//!
//! - [`filled_raw`]: a `RawArray` of sequential 4-byte elements
//! - [`filled_typed`]: the same content behind the typed adapter

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use bytevec::{Array, GrowthPolicy, RawArray};

/// Build a `RawArray` of `n` sequential `u32` elements under `growth`.
pub fn filled_raw(n: u32, growth: GrowthPolicy) -> RawArray {
    let mut arr = RawArray::new(4).with_growth_policy(growth);
    for v in 0..n {
        arr.push(&v.to_le_bytes()).expect("bench allocation failed");
    }
    arr
}

/// Build an `Array<u32>` of `n` sequential elements under `growth`.
pub fn filled_typed(n: u32, growth: GrowthPolicy) -> Array<u32> {
    let mut arr = Array::new().with_growth_policy(growth);
    for v in 0..n {
        arr.push(v).expect("bench allocation failed");
    }
    arr
}
