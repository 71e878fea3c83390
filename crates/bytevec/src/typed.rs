//! Statically typed adapter over the erased engine.
//!
//! [`Array<T>`] fixes the element type at compile time instead of by a
//! runtime byte count, so element-size consistency is enforced by the
//! type system: pushing the wrong type, or appending arrays of
//! different types, cannot get past the compiler.
//!
//! The bound is [`bytemuck::Pod`]: plain-old-data with no padding and
//! no invalid bit patterns, so elements round-trip through the byte
//! buffer exactly and byte-wise equality coincides with value equality.
//! Because the buffer carries no alignment guarantee for `T`, reads
//! come back by value (`pod_read_unaligned`), never as `&T`.

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use bytemuck::Pod;
use bytevec_core::{ArrayError, GrowthPolicy};

use crate::raw::RawArray;

/// A growable contiguous container with a compile-time element type.
///
/// A zero-cost wrapper over [`RawArray`] with
/// `elem_size == size_of::<T>()`. All capacity, growth, and mutation
/// semantics are the engine's; only the element boundary is typed.
pub struct Array<T: Pod> {
    raw: RawArray,
    _marker: PhantomData<T>,
}

impl<T: Pod> Array<T> {
    /// Create an empty array. Does not allocate until the first growing
    /// mutation.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn new() -> Self {
        Self {
            raw: RawArray::new(mem::size_of::<T>()),
            _marker: PhantomData,
        }
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            raw: RawArray::with_capacity(capacity, mem::size_of::<T>())?,
            _marker: PhantomData,
        })
    }

    /// Create an array of `count` copies of `value`.
    pub fn filled(value: T, count: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            raw: RawArray::filled(bytemuck::bytes_of(&value), count)?,
            _marker: PhantomData,
        })
    }

    /// Create an array holding a copy of each element of `slice`.
    pub fn from_slice(slice: &[T]) -> Result<Self, ArrayError> {
        let mut arr = Self::with_capacity(slice.len())?;
        for value in slice {
            // Capacity is already reserved; pushes cannot fail.
            arr.raw.push(bytemuck::bytes_of(value))?;
        }
        Ok(arr)
    }

    /// Replace the growth policy, returning the array (builder style).
    pub fn with_growth_policy(mut self, growth: GrowthPolicy) -> Self {
        self.raw.set_growth_policy(growth);
        self
    }

    /// Borrow the underlying erased engine.
    pub fn as_raw(&self) -> &RawArray {
        &self.raw
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// The element at `index`, by value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> T {
        bytemuck::pod_read_unaligned(self.raw.get(index))
    }

    /// Overwrite the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) {
        self.raw.get_mut(index).copy_from_slice(bytemuck::bytes_of(&value));
    }

    /// Whether any live element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.raw.contains(bytemuck::bytes_of(value))
    }

    /// Index of the first live element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.raw.position(bytemuck::bytes_of(value))
    }

    /// Grow the buffer to hold at least `new_capacity` elements.
    pub fn ensure_capacity(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        self.raw.ensure_capacity(new_capacity)
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        self.raw.reserve(additional)
    }

    /// Reallocate down so that capacity equals the live length.
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        self.raw.shrink_to_fit()
    }

    /// Drop all elements and release the buffer.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Cut down to `new_len` elements in a minimum-size buffer.
    pub fn truncate(&mut self, new_len: usize) -> Result<(), ArrayError> {
        self.raw.truncate(new_len)
    }

    /// Append an element, growing the buffer if full.
    pub fn push(&mut self, value: T) -> Result<(), ArrayError> {
        self.raw.push(bytemuck::bytes_of(&value))
    }

    /// Insert an element at `index`, shifting the tail right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.raw.insert(index, bytemuck::bytes_of(&value))
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let mut value = T::zeroed();
        self.raw
            .pop_into(bytemuck::bytes_of_mut(&mut value))
            .then_some(value)
    }

    /// Drop the element at `index`, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn delete(&mut self, index: usize) {
        self.raw.delete(index);
    }

    /// Remove and return the element at `index`, preserving order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        let mut value = T::zeroed();
        self.raw.remove_into(index, bytemuck::bytes_of_mut(&mut value));
        value
    }

    /// Drop the element at `index` in O(1) by moving the last element
    /// into its slot. Order is not preserved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_delete(&mut self, index: usize) {
        self.raw.swap_delete(index);
    }

    /// Remove and return the element at `index` in O(1). Order is not
    /// preserved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let mut value = T::zeroed();
        self.raw
            .swap_remove_into(index, bytemuck::bytes_of_mut(&mut value));
        value
    }

    /// Move all of `other`'s elements after this array's last, leaving
    /// `other` empty with its buffer released.
    pub fn append(&mut self, other: &mut Array<T>) -> Result<(), ArrayError> {
        self.raw.append(&mut other.raw)
    }

    /// Move elements `[index, len)` into a new array, keeping
    /// `[0, index)` here.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn split_off(&mut self, index: usize) -> Result<Array<T>, ArrayError> {
        Ok(Self {
            raw: self.raw.split_off(index)?,
            _marker: PhantomData,
        })
    }

    /// Exchange the elements at `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.raw.swap(i, j);
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        self.raw.reverse();
    }

    /// Fallible deep copy.
    pub fn try_clone(&self) -> Result<Array<T>, ArrayError> {
        Ok(Self {
            raw: self.raw.try_clone()?,
            _marker: PhantomData,
        })
    }

    /// Copy the live elements into an owned `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

impl<T: Pod> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod> Clone for Array<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len()).map(|i| self.get(i)))
            .finish()
    }
}
