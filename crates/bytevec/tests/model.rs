//! Model-based invariant test: arbitrary operation sequences applied in
//! lockstep to a `RawArray` of 4-byte elements and to a plain `Vec<u32>`
//! model. After every operation the array must agree with the model
//! element-for-element and its structural invariants must hold:
//! `len <= capacity` and the backing buffer sized at exactly
//! `capacity * elem_size` bytes.

use bytevec::{GrowthPolicy, RawArray};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(u32),
    Insert(usize, u32),
    Pop,
    Delete(usize),
    SwapDelete(usize),
    Swap(usize, usize),
    Reverse,
    Truncate(usize),
    Reserve(usize),
    EnsureCapacity(usize),
    ShrinkToFit,
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Push),
        (0usize..64, any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        Just(Op::Pop),
        (0usize..64).prop_map(Op::Delete),
        (0usize..64).prop_map(Op::SwapDelete),
        (0usize..64, 0usize..64).prop_map(|(i, j)| Op::Swap(i, j)),
        Just(Op::Reverse),
        (0usize..64).prop_map(Op::Truncate),
        (0usize..16).prop_map(Op::Reserve),
        (0usize..64).prop_map(Op::EnsureCapacity),
        Just(Op::ShrinkToFit),
        Just(Op::Clear),
    ]
}

fn contents(arr: &RawArray) -> Vec<u32> {
    arr.as_bytes()
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
        .collect()
}

/// Apply one op to both array and model. Raw indices are folded into
/// bounds so every generated op is a valid call.
fn apply(op: &Op, arr: &mut RawArray, model: &mut Vec<u32>) {
    match *op {
        Op::Push(v) => {
            arr.push(&v.to_le_bytes()).unwrap();
            model.push(v);
        }
        Op::Insert(i, v) => {
            let i = i % (model.len() + 1);
            arr.insert(i, &v.to_le_bytes()).unwrap();
            model.insert(i, v);
        }
        Op::Pop => {
            let mut out = [0u8; 4];
            let popped = arr.pop_into(&mut out);
            let expected = model.pop();
            assert_eq!(popped, expected.is_some());
            if let Some(v) = expected {
                assert_eq!(u32::from_le_bytes(out), v);
            }
        }
        Op::Delete(i) => {
            if !model.is_empty() {
                let i = i % model.len();
                arr.delete(i);
                model.remove(i);
            }
        }
        Op::SwapDelete(i) => {
            if !model.is_empty() {
                let i = i % model.len();
                arr.swap_delete(i);
                model.swap_remove(i);
            }
        }
        Op::Swap(i, j) => {
            if !model.is_empty() {
                let (i, j) = (i % model.len(), j % model.len());
                arr.swap(i, j);
                model.swap(i, j);
            }
        }
        Op::Reverse => {
            arr.reverse();
            model.reverse();
        }
        Op::Truncate(n) => {
            arr.truncate(n).unwrap();
            model.truncate(n);
        }
        Op::Reserve(n) => {
            arr.reserve(n).unwrap();
        }
        Op::EnsureCapacity(n) => {
            if n >= model.len() {
                arr.ensure_capacity(n).unwrap();
            }
        }
        Op::ShrinkToFit => {
            arr.shrink_to_fit().unwrap();
        }
        Op::Clear => {
            arr.clear();
            model.clear();
        }
    }
}

fn check_invariants(arr: &RawArray, model: &[u32]) {
    assert!(arr.len() <= arr.capacity());
    assert_eq!(arr.len(), model.len());
    assert_eq!(arr.as_bytes().len(), arr.len() * arr.elem_size());
    assert_eq!(contents(arr), model);
}

proptest! {
    #[test]
    fn geometric_array_tracks_the_model(ops in proptest::collection::vec(arb_op(), 0..200)) {
        let mut arr = RawArray::new(4);
        let mut model: Vec<u32> = Vec::new();
        for op in &ops {
            apply(op, &mut arr, &mut model);
            check_invariants(&arr, &model);
        }
    }

    #[test]
    fn exact_array_tracks_the_model(ops in proptest::collection::vec(arb_op(), 0..200)) {
        let mut arr = RawArray::new(4).with_growth_policy(GrowthPolicy::Exact);
        let mut model: Vec<u32> = Vec::new();
        for op in &ops {
            apply(op, &mut arr, &mut model);
            check_invariants(&arr, &model);
        }
    }

    #[test]
    fn clear_always_releases_the_buffer(
        values in proptest::collection::vec(any::<u32>(), 0..64),
    ) {
        let mut arr = RawArray::new(4);
        for v in &values {
            arr.push(&v.to_le_bytes()).unwrap();
        }
        arr.clear();
        prop_assert_eq!(arr.len(), 0);
        prop_assert_eq!(arr.capacity(), 0);
    }
}
