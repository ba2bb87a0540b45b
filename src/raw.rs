use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Owned, reallocatable storage for `cap` slots of `T`.
///
/// Tracks only the allocation. Which slots hold live values is the caller's
/// business; dropping a `RawBuffer` frees memory without dropping any `T`.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the buffer uniquely owns its allocation, so it can move between
// threads whenever `T` can.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Empty buffer, no allocation.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self::new();
        if capacity > 0 {
            buf.grow_to(capacity);
        }
        buf
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Reallocate to exactly `new_cap` slots, keeping the existing contents.
    ///
    /// `new_cap` must be strictly greater than the current capacity.
    pub(crate) fn grow_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap > self.cap, "RawBuffer never shrinks");

        tracing::trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "growing buffer"
        );

        if Self::IS_ZST {
            self.cap = new_cap;
            return;
        }

        let Ok(new_layout) = Layout::array::<T>(new_cap) else {
            capacity_overflow();
        };

        let new_ptr = if self.cap == 0 {
            // SAFETY: `new_layout` has a non-zero size (non-ZST, new_cap > 0).
            unsafe { alloc::alloc(new_layout) }
        } else {
            // SAFETY: `self.ptr` was allocated with `current_layout()` and the
            // new size was validated by `Layout::array`.
            unsafe { alloc::realloc(self.ptr.as_ptr().cast::<u8>(), self.current_layout(), new_layout.size()) }
        };

        self.ptr = match NonNull::new(new_ptr.cast::<T>()) {
            Some(p) => p,
            None => alloc::handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }

    fn current_layout(&self) -> Layout {
        // SAFETY: this exact layout was produced by `Layout::array` when the
        // current allocation was made.
        unsafe { Layout::from_size_align_unchecked(mem::size_of::<T>() * self.cap, mem::align_of::<T>()) }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if !Self::IS_ZST && self.cap != 0 {
            // SAFETY: allocated by `grow_to` with this layout and not yet freed.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), self.current_layout()) }
        }
    }
}

#[cold]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
