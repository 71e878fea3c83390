//! Properties of the structural operations from the design contract:
//! split followed by append restores the original sequence, cloning
//! round-trips every live element, ordered removal preserves relative
//! order while swap-removal preserves the multiset.

use bytevec::{Array, RawArray};
use proptest::prelude::*;

fn build(values: &[u32]) -> RawArray {
    let mut arr = RawArray::new(4);
    for v in values {
        arr.push(&v.to_le_bytes()).unwrap();
    }
    arr
}

fn contents(arr: &RawArray) -> Vec<u32> {
    arr.as_bytes()
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
        .collect()
}

proptest! {
    #[test]
    fn split_then_append_is_identity(
        values in proptest::collection::vec(any::<u32>(), 1..64),
        split in any::<proptest::sample::Index>(),
    ) {
        let k = split.index(values.len());
        let mut arr = build(&values);
        let mut tail = arr.split_off(k).unwrap();

        prop_assert_eq!(contents(&arr), &values[..k]);
        prop_assert_eq!(contents(&tail), &values[k..]);

        arr.append(&mut tail).unwrap();
        prop_assert_eq!(contents(&arr), values);
        prop_assert_eq!(tail.len(), 0);
        prop_assert_eq!(tail.capacity(), 0);
    }

    #[test]
    fn try_clone_round_trips_every_element(
        values in proptest::collection::vec(any::<u32>(), 0..64),
    ) {
        let arr = build(&values);
        let copy = arr.try_clone().unwrap();
        prop_assert_eq!(copy.len(), arr.len());
        for i in 0..arr.len() {
            prop_assert_eq!(copy.get(i), arr.get(i));
        }
    }

    #[test]
    fn remove_preserves_relative_order(
        values in proptest::collection::vec(any::<u32>(), 1..64),
        victim in any::<proptest::sample::Index>(),
    ) {
        let i = victim.index(values.len());
        let mut arr = Array::from_slice(&values).unwrap();
        let removed = arr.remove(i);

        prop_assert_eq!(removed, values[i]);
        let mut expected = values.clone();
        expected.remove(i);
        prop_assert_eq!(arr.to_vec(), expected);
    }

    #[test]
    fn swap_remove_preserves_the_multiset(
        values in proptest::collection::vec(any::<u32>(), 1..64),
        victim in any::<proptest::sample::Index>(),
    ) {
        let i = victim.index(values.len());
        let mut arr = Array::from_slice(&values).unwrap();
        let removed = arr.swap_remove(i);

        prop_assert_eq!(removed, values[i]);
        let mut remaining = arr.to_vec();
        remaining.push(removed);
        remaining.sort_unstable();
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn clone_range_matches_the_slice(
        values in proptest::collection::vec(any::<u32>(), 1..64),
        bounds in any::<(proptest::sample::Index, proptest::sample::Index)>(),
    ) {
        let a = bounds.0.index(values.len());
        let b = bounds.1.index(values.len());
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        let arr = build(&values);
        let sub = arr.clone_range(start, end).unwrap();
        prop_assert_eq!(contents(&sub), &values[start..end]);
    }
}
