//! Recoverable error types for array operations.
//!
//! Only resource-class failures travel through this enum: allocation
//! failure, size arithmetic overflow, and capacity requests that would
//! undercut live data. Contract violations (out-of-bounds indices, zero
//! element sizes, mismatched element widths) are programming errors and
//! panic at the call site instead — the two classes never share a channel.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Every variant leaves the array in its last-known-valid state: no
/// operation commits a partial mutation before reporting failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The allocator could not provide the requested buffer.
    AllocFailed {
        /// Number of bytes requested from the allocator.
        requested: usize,
    },
    /// Slot-count or byte-count arithmetic overflowed `usize`.
    CapacityOverflow,
    /// `ensure_capacity` was asked for fewer slots than are live.
    ///
    /// Shrinking below the live length is a `truncate` job, not a
    /// capacity request.
    CapacityBelowLength {
        /// The capacity that was requested.
        requested: usize,
        /// The current live element count.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed { requested } => {
                write!(f, "allocation failed: requested {requested} bytes")
            }
            Self::CapacityOverflow => {
                write!(f, "capacity arithmetic overflowed usize")
            }
            Self::CapacityBelowLength { requested, len } => {
                write!(
                    f,
                    "requested capacity {requested} is below live length {len}; use truncate"
                )
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_byte_count() {
        let err = ArrayError::AllocFailed { requested: 4096 };
        assert_eq!(err.to_string(), "allocation failed: requested 4096 bytes");
    }

    #[test]
    fn display_points_shrinkers_at_truncate() {
        let err = ArrayError::CapacityBelowLength {
            requested: 2,
            len: 5,
        };
        assert!(err.to_string().contains("use truncate"));
    }
}
