use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The raw storage behind a [`Vector`](super::Vector): an allocation with room for `cap` values of
/// `T`, none of which are tracked as initialized. A Buffer never reads, writes or drops its slots;
/// that is entirely the responsibility of its owner.
///
/// In terms of raw positions, `ptr` is the start of storage and `ptr + cap` is the end of storage.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with capacity 0, without allocating.
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a Buffer with capacity for exactly `cap` values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn with_cap(cap: usize) -> Buffer<T> {
        let mut buf = Buffer::new();
        buf.realloc(cap);
        buf
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// The largest capacity that a Buffer of `T` can have.
    pub(crate) const fn max_cap() -> usize {
        match size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be `<= cap`, so that the resulting pointer is in bounds of (or one past) the
    /// allocation.
    pub(crate) const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that index is within the allocated range, which can't have
        // a size greater than isize::MAX.
        unsafe { self.ptr.as_ptr().add(index).cast() }
    }

    /// A helper function to create a [`Layout`] for `cap` values of `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn make_layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow).throw()
    }

    /// Reallocates the Buffer to have room for exactly `new_cap` values. Slots below
    /// `min(cap, new_cap)` keep their contents; anything initialized at or above `new_cap` must
    /// already have been moved out or dropped by the caller.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_cap: usize) {
        let new_ptr = match (self.cap, new_cap) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized values don't need storage. The dangling pointer is already valid for
                // every read and write, so only the capacity changes.
                if new_cap > Self::max_cap() {
                    Err(CapacityOverflow).throw()
                }
                self.ptr
            },
            (old, new) if old == new => return,
            (0, _) => {
                let layout = Self::make_layout(new_cap);

                // SAFETY: The layout has a non-zero size because both zero capacities and
                // zero-sized types are guarded against.
                let raw_ptr: *mut MaybeUninit<T> = unsafe { alloc::alloc(layout).cast() };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(layout))
            },
            (_, 0) => {
                // SAFETY: The allocation was made with the layout for the current capacity.
                unsafe { self.dealloc() };
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(self.cap);
                let new_layout = Self::make_layout(new_cap);

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size(),
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Releases the allocation without touching the capacity.
    ///
    /// # Safety
    /// The Buffer must not be used again until its pointer and capacity have been replaced.
    unsafe fn dealloc(&mut self) {
        let layout = Self::make_layout(self.cap);

        if layout.size() != 0 {
            // SAFETY: ptr was allocated in the global allocator with this layout. Zero-sized
            // layouts are never allocated and are guarded against deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // SAFETY: The Buffer is being dropped and won't be used again.
        unsafe { self.dealloc() }
    }
}

// SAFETY: A Buffer uniquely owns its allocation, like a Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for Buffer<T> {}
// SAFETY: A Buffer provides no shared mutation of its contents.
unsafe impl<T: Sync> Sync for Buffer<T> {}
