//! Capacity growth policy for implicit reallocation.
//!
//! When a push or insert finds the buffer full, the engine asks the
//! policy how many slots the reallocated buffer should hold. The policy
//! maps (current capacity, required minimum) to an actual capacity and
//! never returns less than the required minimum.

/// Strategy for choosing a new capacity when the buffer must grow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Double the current capacity (minimum one slot).
    ///
    /// Gives amortized O(1) push: N sequential pushes perform O(N) total
    /// element copies across O(log N) reallocations.
    #[default]
    Geometric,
    /// Allocate exactly the required number of slots.
    ///
    /// Tight packing with no slack. Every growing push reallocates, so
    /// N sequential pushes cost O(N²) copies — opt in only when memory
    /// footprint matters more than push throughput.
    Exact,
}

impl GrowthPolicy {
    /// Compute the capacity for a reallocation.
    ///
    /// `current` is the capacity before growing; `required` is the
    /// minimum number of slots the pending operation needs. The result
    /// is always `>= required` and, for [`GrowthPolicy::Geometric`],
    /// `>= 1` even from an empty buffer.
    pub fn next_capacity(self, current: usize, required: usize) -> usize {
        match self {
            Self::Geometric => required.max(current.saturating_mul(2)).max(1),
            Self::Exact => required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn geometric_doubles_from_nonzero() {
        assert_eq!(GrowthPolicy::Geometric.next_capacity(4, 5), 8);
        assert_eq!(GrowthPolicy::Geometric.next_capacity(8, 9), 16);
    }

    #[test]
    fn geometric_grows_empty_buffer_to_one() {
        assert_eq!(GrowthPolicy::Geometric.next_capacity(0, 1), 1);
    }

    #[test]
    fn geometric_honours_large_requirements() {
        // A bulk append can need more than double.
        assert_eq!(GrowthPolicy::Geometric.next_capacity(4, 100), 100);
    }

    #[test]
    fn exact_returns_requirement_untouched() {
        assert_eq!(GrowthPolicy::Exact.next_capacity(4, 5), 5);
        assert_eq!(GrowthPolicy::Exact.next_capacity(0, 1), 1);
    }

    #[test]
    fn geometric_saturates_instead_of_overflowing() {
        let cap = GrowthPolicy::Geometric.next_capacity(usize::MAX, usize::MAX);
        assert_eq!(cap, usize::MAX);
    }

    proptest! {
        #[test]
        fn next_capacity_always_covers_requirement(
            current in 0usize..1 << 40,
            required in 0usize..1 << 40,
        ) {
            for policy in [GrowthPolicy::Geometric, GrowthPolicy::Exact] {
                prop_assert!(policy.next_capacity(current, required) >= required);
            }
        }
    }
}
