//! The type-erased array engine.
//!
//! [`RawArray`] owns one contiguous byte buffer and three scalars: the
//! live element count, the allocated slot count, and the fixed byte
//! width of one element. Elements are opaque byte blocks; every
//! operation is plain byte copying at computed offsets.
//!
//! # Memory model
//!
//! The backing storage is a `Vec<u8>` whose length is always exactly
//! `capacity * elem_size` bytes. An empty `Vec` does not allocate, so a
//! zero-capacity array holds no buffer at all. Bytes in
//! `[0, len * elem_size)` are the live elements in index order; bytes
//! beyond that are slack — stale or zeroed, never read as live data.
//!
//! # Error channels
//!
//! Allocation failures are recoverable and surface as
//! [`ArrayError`]; the array is left untouched when one is returned.
//! Contract violations — an out-of-bounds index, a zero element size, a
//! wrong-width element slice, mixing arrays of different element sizes —
//! panic immediately without mutating or releasing anything.

use std::fmt;
use std::num::NonZeroUsize;

use bytevec_core::{ArrayError, GrowthPolicy};

/// A growable contiguous container over fixed-size opaque byte blocks.
///
/// The element type is fixed at construction by its byte size alone.
/// For a statically checked element type, wrap this in
/// [`Array`](crate::Array).
pub struct RawArray {
    /// Backing storage. Always exactly `capacity * elem_size` bytes long.
    buf: Vec<u8>,
    /// Live element count. `len <= capacity`.
    len: usize,
    /// Byte width of one element. Immutable after construction.
    elem: NonZeroUsize,
    /// Capacity strategy applied when a mutation outgrows the buffer.
    growth: GrowthPolicy,
}

impl RawArray {
    // ── Construction ────────────────────────────────────────────────

    /// Create an empty array for elements of `elem_size` bytes.
    ///
    /// Does not allocate until the first growing mutation.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size` is 0.
    pub fn new(elem_size: usize) -> Self {
        Self {
            buf: Vec::new(),
            len: 0,
            elem: Self::check_elem_size(elem_size),
            growth: GrowthPolicy::default(),
        }
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// A `capacity` of 0 behaves exactly like [`RawArray::new`].
    ///
    /// # Panics
    ///
    /// Panics if `elem_size` is 0.
    pub fn with_capacity(capacity: usize, elem_size: usize) -> Result<Self, ArrayError> {
        let mut arr = Self::new(elem_size);
        if capacity > 0 {
            arr.grow_exact(capacity)?;
        }
        Ok(arr)
    }

    /// Create an array of `count` copies of `value`.
    ///
    /// The element size is `value.len()`; length and capacity are both
    /// `count`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is empty.
    pub fn filled(value: &[u8], count: usize) -> Result<Self, ArrayError> {
        let mut arr = Self::new(value.len());
        arr.grow_exact(count)?;
        for slot in arr.buf.chunks_exact_mut(value.len()) {
            slot.copy_from_slice(value);
        }
        arr.len = count;
        Ok(arr)
    }

    /// Adopt an already-filled byte buffer as an array of live elements.
    ///
    /// The array takes ownership of `buf`; length and capacity are both
    /// `buf.len() / elem_size`.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size` is 0 or `buf.len()` is not a multiple of
    /// `elem_size`.
    pub fn from_bytes(buf: Vec<u8>, elem_size: usize) -> Self {
        let elem = Self::check_elem_size(elem_size);
        assert!(
            buf.len() % elem_size == 0,
            "adopted buffer of {} bytes is not a whole number of {}-byte elements",
            buf.len(),
            elem_size
        );
        Self {
            len: buf.len() / elem_size,
            buf,
            elem,
            growth: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy, returning the array (builder style).
    pub fn with_growth_policy(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Replace the growth policy in place.
    ///
    /// Takes effect on the next implicit growth; existing capacity is
    /// untouched.
    pub fn set_growth_policy(&mut self, growth: GrowthPolicy) {
        self.growth = growth;
    }

    // ── Inspection ──────────────────────────────────────────────────

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.buf.len() / self.elem.get()
    }

    /// Byte width of one element.
    pub fn elem_size(&self) -> usize {
        self.elem.get()
    }

    /// The growth policy applied on implicit reallocation.
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth
    }

    /// The live region as raw bytes: `len * elem_size` bytes in index
    /// order. Slack slots are not included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.offset(self.len)]
    }

    /// Read-view of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> &[u8] {
        self.check_index(index);
        let off = self.offset(index);
        &self.buf[off..off + self.elem.get()]
    }

    /// Mutable view of the element at `index`.
    ///
    /// Writing through this view is the caller's responsibility; the
    /// array only guarantees the slot stays `elem_size` bytes wide.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> &mut [u8] {
        self.check_index(index);
        let off = self.offset(index);
        let elem = self.elem.get();
        &mut self.buf[off..off + elem]
    }

    /// Whether any live element equals `value`, by byte comparison.
    ///
    /// Byte equality is exact only for element types without padding or
    /// pointer-identity semantics; that limitation is inherent to the
    /// erased representation.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not `elem_size` bytes wide.
    pub fn contains(&self, value: &[u8]) -> bool {
        self.position(value).is_some()
    }

    /// Index of the first live element equal to `value`, by byte
    /// comparison. See [`RawArray::contains`] for the equality caveat.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not `elem_size` bytes wide.
    pub fn position(&self, value: &[u8]) -> Option<usize> {
        self.check_elem_width(value);
        self.as_bytes()
            .chunks_exact(self.elem.get())
            .position(|slot| slot == value)
    }

    // ── Capacity management ─────────────────────────────────────────

    /// Grow the buffer to hold at least `new_capacity` elements.
    ///
    /// A no-op when the capacity is already sufficient. Existing
    /// elements keep their indices byte-for-byte. Fails with
    /// [`ArrayError::CapacityBelowLength`] when `new_capacity` would
    /// undercut live data (shrinking is [`RawArray::truncate`]'s job),
    /// and with [`ArrayError::AllocFailed`] when the allocator refuses —
    /// in both cases the array is untouched.
    pub fn ensure_capacity(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity < self.len {
            return Err(ArrayError::CapacityBelowLength {
                requested: new_capacity,
                len: self.len,
            });
        }
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.grow_exact(new_capacity)
    }

    /// Reserve room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        let target = self
            .capacity()
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow)?;
        self.ensure_capacity(target)
    }

    /// Reallocate down so that capacity equals the live length.
    ///
    /// Implemented as a copy into a fresh minimum-size buffer: if the
    /// allocation fails the original buffer is still intact and the
    /// array is fully usable.
    pub fn shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        if self.capacity() == self.len {
            return Ok(());
        }
        if self.len == 0 {
            self.buf = Vec::new();
            return Ok(());
        }
        self.buf = Self::copy_bytes(&self.buf[..self.offset(self.len)])?;
        Ok(())
    }

    /// Drop all elements **and release the buffer**.
    ///
    /// Length and capacity both become 0 and the formerly-live bytes are
    /// returned to the allocator rather than retained. Refilling after
    /// `clear` therefore reallocates; callers wanting zero-allocation
    /// reuse should follow with [`RawArray::ensure_capacity`].
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf = Vec::new();
    }

    /// Cut the array down to `new_len` elements in a minimum-size buffer.
    ///
    /// `truncate(0)` behaves like [`RawArray::clear`]; `new_len >= len`
    /// is a no-op. Otherwise the first `new_len` elements move into a
    /// fresh buffer with `capacity == len == new_len` — a combined
    /// shrink and cut. On allocation failure the array is untouched.
    pub fn truncate(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len == 0 {
            self.clear();
            return Ok(());
        }
        if new_len >= self.len {
            return Ok(());
        }
        self.buf = Self::copy_bytes(&self.buf[..self.offset(new_len)])?;
        self.len = new_len;
        Ok(())
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Append an element, growing the buffer if full.
    ///
    /// # Panics
    ///
    /// Panics if `elem` is not `elem_size` bytes wide.
    pub fn push(&mut self, elem: &[u8]) -> Result<(), ArrayError> {
        self.check_elem_width(elem);
        if self.len == self.capacity() {
            let required = self.len.checked_add(1).ok_or(ArrayError::CapacityOverflow)?;
            self.grow_for(required)?;
        }
        let off = self.offset(self.len);
        self.buf[off..off + elem.len()].copy_from_slice(elem);
        self.len += 1;
        Ok(())
    }

    /// Insert an element at `index`, shifting `[index, len)` right by
    /// one slot. `index == len` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or `elem` is not `elem_size` bytes wide.
    pub fn insert(&mut self, index: usize, elem: &[u8]) -> Result<(), ArrayError> {
        self.check_elem_width(elem);
        assert!(
            index <= self.len,
            "insertion index out of bounds: len is {} but index is {}",
            self.len,
            index
        );
        if self.len == self.capacity() {
            let required = self.len.checked_add(1).ok_or(ArrayError::CapacityOverflow)?;
            self.grow_for(required)?;
        }
        let width = self.elem.get();
        let off = self.offset(index);
        let end = self.offset(self.len);
        self.buf.copy_within(off..end, off + width);
        self.buf[off..off + width].copy_from_slice(elem);
        self.len += 1;
        Ok(())
    }

    /// Copy the last element into `out` and drop it from the array.
    ///
    /// Returns `false` on an empty array. Capacity is unchanged and the
    /// popped slot's bytes are not erased.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not `elem_size` bytes wide.
    pub fn pop_into(&mut self, out: &mut [u8]) -> bool {
        self.check_elem_width(out);
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        let off = self.offset(self.len);
        out.copy_from_slice(&self.buf[off..off + out.len()]);
        true
    }

    /// Drop the element at `index`, shifting `[index + 1, len)` left by
    /// one slot. Order-preserving, O(len - index).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn delete(&mut self, index: usize) {
        self.check_index(index);
        let width = self.elem.get();
        let off = self.offset(index);
        let end = self.offset(self.len);
        self.buf.copy_within(off + width..end, off);
        self.len -= 1;
    }

    /// Copy the element at `index` into `out`, then drop it as
    /// [`RawArray::delete`] does.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len` or `out` is not `elem_size` bytes wide.
    pub fn remove_into(&mut self, index: usize, out: &mut [u8]) {
        self.check_elem_width(out);
        self.check_index(index);
        let off = self.offset(index);
        out.copy_from_slice(&self.buf[off..off + out.len()]);
        self.delete(index);
    }

    /// Drop the element at `index` by overwriting it with the last live
    /// element. O(1); does not preserve element order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn swap_delete(&mut self, index: usize) {
        self.check_index(index);
        let width = self.elem.get();
        let off = self.offset(index);
        let last = self.offset(self.len - 1);
        self.buf.copy_within(last..last + width, off);
        self.len -= 1;
    }

    /// Copy the element at `index` into `out`, then drop it as
    /// [`RawArray::swap_delete`] does.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len` or `out` is not `elem_size` bytes wide.
    pub fn swap_remove_into(&mut self, index: usize, out: &mut [u8]) {
        self.check_elem_width(out);
        self.check_index(index);
        let off = self.offset(index);
        out.copy_from_slice(&self.buf[off..off + out.len()]);
        self.swap_delete(index);
    }

    /// Move all of `other`'s live elements after this array's last,
    /// growing if needed, then clear `other` (its buffer is released,
    /// per the [`RawArray::clear`] contract).
    ///
    /// On allocation failure both arrays are untouched.
    ///
    /// # Panics
    ///
    /// Panics if the two arrays have different element sizes.
    pub fn append(&mut self, other: &mut RawArray) -> Result<(), ArrayError> {
        assert!(
            self.elem == other.elem,
            "element size mismatch: self stores {}-byte elements but other stores {}-byte elements",
            self.elem,
            other.elem
        );
        let total = self
            .len
            .checked_add(other.len)
            .ok_or(ArrayError::CapacityOverflow)?;
        if total > self.capacity() {
            self.grow_for(total)?;
        }
        let off = self.offset(self.len);
        let incoming = other.offset(other.len);
        self.buf[off..off + incoming].copy_from_slice(&other.buf[..incoming]);
        self.len = total;
        other.clear();
        Ok(())
    }

    /// Move elements `[index, len)` into a newly allocated array,
    /// keeping `[0, index)` here. The returned tail inherits this
    /// array's element size and growth policy.
    ///
    /// On allocation failure this array is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn split_off(&mut self, index: usize) -> Result<RawArray, ArrayError> {
        self.check_index(index);
        let mut tail = Self::new(self.elem.get()).with_growth_policy(self.growth);
        let start = self.offset(index);
        let end = self.offset(self.len);
        tail.buf = Self::copy_bytes(&self.buf[start..end])?;
        tail.len = self.len - index;
        self.len = index;
        Ok(tail)
    }

    /// Exchange the elements at `i` and `j` byte-for-byte. No
    /// allocation.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.check_index(i);
        self.check_index(j);
        if i == j {
            return;
        }
        let width = self.elem.get();
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let lo_off = self.offset(lo);
        let hi_off = self.offset(hi);
        let (head, tail) = self.buf.split_at_mut(hi_off);
        head[lo_off..lo_off + width].swap_with_slice(&mut tail[..width]);
    }

    /// Reverse the element order in place by pairwise swaps.
    pub fn reverse(&mut self) {
        for i in 0..self.len / 2 {
            self.swap(i, self.len - 1 - i);
        }
    }

    // ── Copying ─────────────────────────────────────────────────────

    /// Fallible deep copy: a new array with the same element size,
    /// growth policy, length, and capacity, and equal live bytes.
    pub fn try_clone(&self) -> Result<RawArray, ArrayError> {
        Ok(Self {
            buf: Self::copy_bytes(&self.buf)?,
            len: self.len,
            elem: self.elem,
            growth: self.growth,
        })
    }

    /// Deep copy of elements `[start, end)` into a fresh array.
    ///
    /// The result has `len == capacity == end - start`. An empty range
    /// (`start == end`) yields an empty array without allocating.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len`.
    pub fn clone_range(&self, start: usize, end: usize) -> Result<RawArray, ArrayError> {
        assert!(
            start <= end && end <= self.len,
            "range {start}..{end} out of bounds for len {}",
            self.len
        );
        let mut out = Self::new(self.elem.get()).with_growth_policy(self.growth);
        out.buf = Self::copy_bytes(&self.buf[self.offset(start)..self.offset(end)])?;
        out.len = end - start;
        Ok(out)
    }

    // ── Internals ───────────────────────────────────────────────────

    /// Byte offset of the slot at `index`. Callers guarantee bounds.
    fn offset(&self, index: usize) -> usize {
        index * self.elem.get()
    }

    fn check_elem_size(elem_size: usize) -> NonZeroUsize {
        NonZeroUsize::new(elem_size).expect("element size of a RawArray cannot be 0")
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.len,
            "index out of bounds: len is {} but index is {}",
            self.len,
            index
        );
    }

    fn check_elem_width(&self, elem: &[u8]) {
        assert!(
            elem.len() == self.elem.get(),
            "element width mismatch: array stores {}-byte elements, got {} bytes",
            self.elem,
            elem.len()
        );
    }

    /// Grow for an implicit mutation: the policy picks the new capacity.
    ///
    /// If the policy's choice overflows the byte count (a saturated
    /// geometric step can), falls back to the exact requirement.
    fn grow_for(&mut self, min_capacity: usize) -> Result<(), ArrayError> {
        let target = self.growth.next_capacity(self.capacity(), min_capacity);
        match self.grow_exact(target) {
            Err(ArrayError::CapacityOverflow) if target > min_capacity => {
                self.grow_exact(min_capacity)
            }
            other => other,
        }
    }

    /// Extend the buffer to exactly `new_capacity` slots, zero-filling
    /// the new slack. Callers guarantee `new_capacity >= capacity`.
    fn grow_exact(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let new_bytes = new_capacity
            .checked_mul(self.elem.get())
            .ok_or(ArrayError::CapacityOverflow)?;
        let additional = new_bytes - self.buf.len();
        self.buf
            .try_reserve_exact(additional)
            .map_err(|_| ArrayError::AllocFailed {
                requested: new_bytes,
            })?;
        self.buf.resize(new_bytes, 0);
        Ok(())
    }

    /// Fallibly allocate a fresh `Vec` holding exactly `bytes`.
    fn copy_bytes(bytes: &[u8]) -> Result<Vec<u8>, ArrayError> {
        let mut fresh = Vec::new();
        fresh
            .try_reserve_exact(bytes.len())
            .map_err(|_| ArrayError::AllocFailed {
                requested: bytes.len(),
            })?;
        fresh.extend_from_slice(bytes);
        Ok(fresh)
    }
}

impl Clone for RawArray {
    /// Deep copy. Unlike [`RawArray::try_clone`] this aborts on
    /// allocation failure, as `Vec` cloning does.
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
            elem: self.elem,
            growth: self.growth,
        }
    }
}

impl fmt::Debug for RawArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Elements<'a> {
            bytes: &'a [u8],
            width: usize,
        }
        impl fmt::Debug for Elements<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list()
                    .entries(self.bytes.chunks_exact(self.width))
                    .finish()
            }
        }
        f.debug_struct("RawArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elem_size", &self.elem.get())
            .field(
                "elements",
                &Elements {
                    bytes: self.as_bytes(),
                    width: self.elem.get(),
                },
            )
            .finish()
    }
}
