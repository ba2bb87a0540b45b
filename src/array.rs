use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::error::{IndexOutOfRange, Operation};
use crate::growth;
use crate::raw::{self, RawBuffer};
use crate::Result;

/// A growable, index-addressable sequence backed by one owned buffer.
///
/// Appends are amortized O(1). Every index-taking operation is bounds-checked
/// against the logical length and returns [`IndexOutOfRange`] instead of
/// touching storage. Capacity only ever grows: removing elements, or
/// clearing, leaves the allocation in place.
///
/// Rendering through [`Display`](std::fmt::Display) produces `[a, b, c]`,
/// recursing into elements that are themselves collections.
pub struct DynamicArray<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Always `>= len()`, never decreases.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Makes sure at least `additional` more elements fit without another
    /// reallocation, growing by the usual policy if they don't.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize` or the byte size
    /// exceeds `isize::MAX`.
    pub fn reserve(&mut self, additional: usize) {
        let Some(required) = self.len.checked_add(additional) else {
            raw::capacity_overflow();
        };
        if let Some(new_cap) = growth::next_capacity(self.buf.capacity(), required) {
            tracing::trace!(len = self.len, required, "reserve");
            self.buf.grow_to(new_cap);
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or_else(|| IndexOutOfRange::new(Operation::Get, index, len))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| IndexOutOfRange::new(Operation::Get, index, len))
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        let slot = self
            .as_mut_slice()
            .get_mut(index)
            .ok_or_else(|| IndexOutOfRange::new(Operation::Set, index, len))?;
        Ok(mem::replace(slot, value))
    }

    /// Appends `item` at the end.
    pub fn add(&mut self, item: T) {
        if self.len == self.buf.capacity() {
            self.reserve(1);
        }
        // SAFETY: capacity > len after the reserve above, and slot `len` is
        // unused.
        unsafe {
            ptr::write(self.buf.ptr().add(self.len), item);
        }
        // Only count the slot once the write has happened.
        self.len += 1;
    }

    /// Appends every item of `items`, preserving their order.
    ///
    /// Room for the iterator's lower size hint is reserved up front, so an
    /// exact-size input reallocates at most once.
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = items.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.add(item);
        }
    }

    /// Inserts `item` at `index`, shifting everything from `index` onwards up
    /// by one. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] if `index > len()`.
    pub fn insert_at(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.len {
            return Err(IndexOutOfRange::new(Operation::InsertAt, index, self.len));
        }
        self.reserve(1);
        // SAFETY: index <= len < capacity. The tail `index..len` moves one slot
        // up into reserved space before the hole is filled.
        unsafe {
            let p = self.buf.ptr().add(index);
            ptr::copy(p, p.add(1), self.len - index);
            ptr::write(p, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it down by one. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(IndexOutOfRange::new(Operation::RemoveAt, index, self.len));
        }
        // SAFETY: index < len, so the slot is initialized. After the read it is
        // logically moved out and immediately overwritten by the shifted tail.
        unsafe {
            let p = self.buf.ptr().add(index);
            let removed = ptr::read(p);
            ptr::copy(p.add(1), p, self.len - index - 1);
            self.len -= 1;
            Ok(removed)
        }
    }

    /// Swaps the elements at `i` and `j`. `i == j` is a no-op.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfRange`] for the first of `i`, `j` that is `>= len()`.
    pub fn exchange(&mut self, i: usize, j: usize) -> Result<()> {
        for index in [i, j] {
            if index >= self.len {
                return Err(IndexOutOfRange::new(Operation::Exchange, index, self.len));
            }
        }
        self.as_mut_slice().swap(i, j);
        Ok(())
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialized and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Drops every element. The allocation is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        // Forget the elements first so a panicking destructor can't cause a
        // double drop.
        self.len = 0;
        // SAFETY: `0..len` were the initialized slots.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), len));
        }
        tracing::trace!(dropped = len, capacity = self.buf.capacity(), "cleared");
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `0..len` are initialized; the pointer is non-null and aligned
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, plus `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Hands the buffer and live length to an owning iterator without running
    /// `Drop` on `self`.
    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let me = mem::ManuallyDrop::new(self);
        // SAFETY: `me` is never used again and never dropped, so the buffer is
        // moved out exactly once.
        let buf = unsafe { ptr::read(&me.buf) };
        (buf, me.len)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: drop the live prefix; `RawBuffer` frees the memory after.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.add_range(self.iter().cloned());
        copy
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
