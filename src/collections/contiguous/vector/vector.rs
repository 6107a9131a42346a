use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::collections::behavior::{Behavior, Duplicate, Natural, Render};
use crate::collections::contiguous::buffer::Buffer;
use crate::util::error::{CapacityOverflow, ReserveTooSmall};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection whose element semantics come from a behavior descriptor
/// `B`. See the [`behavior`](crate::collections::behavior) module for the descriptor itself; when
/// none is given, [`Natural`] is used.
///
/// Every element that the Vector discards (through [`pop_back`](Vector::pop_back),
/// [`erase`](Vector::erase), [`clear`](Vector::clear), shrinking or dropping the Vector) is passed
/// to [`Behavior::destroy`], every element it duplicates goes through [`Duplicate::copy`] and every
/// relocation inside the buffer is performed with [`Behavior::swap`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `k`: The number of items inserted or erased.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `insert_n` | `O(n-i+k)` |
/// | `erase` | `O(n-i)` |
/// | `erase_range` | `O(n-i)` |
/// | `replace_at` | `O(1)` |
/// | `reserve` | `O(n)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `merge` | `O(n+m)` |
/// | `find` | `O(n)` |
/// | `sort` | `O(n log n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
pub struct Vector<T, B: Behavior<T> = Natural> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
    pub(crate) behavior: B,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
            behavior: Natural,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector::with_cap_and_behavior(cap, Natural)
    }

    /// Creates a Vector holding `count` copies of `value`.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let vec = Vector::from_elem('x', 3);
    /// assert_eq!(&*vec, &['x', 'x', 'x']);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn from_elem(value: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        let mut vec = Vector::with_cap(count);
        vec.assign_fill(count, value);
        vec
    }

    /// Creates a Vector holding a copy of every element in `items`.
    pub fn from_slice(items: &[T]) -> Vector<T>
    where
        T: Clone,
    {
        let mut vec = Vector::with_cap(items.len());
        vec.extend(items.iter().cloned());
        vec
    }
}

impl<T, B: Behavior<T>> Vector<T, B> {
    /// Creates a new, empty Vector that uses the provided behavior descriptor.
    pub const fn with_behavior(behavior: B) -> Vector<T, B> {
        Vector {
            buf: Buffer::new(),
            len: 0,
            behavior,
        }
    }

    /// Creates a new, empty Vector with capacity `cap` that uses the provided behavior descriptor.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap_and_behavior(cap: usize, behavior: B) -> Vector<T, B> {
        Vector {
            buf: Buffer::with_cap(cap),
            len: 0,
            behavior,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the largest number of elements any Vector of `T` could hold.
    pub const fn max_len(&self) -> usize {
        Buffer::<T>::max_cap()
    }

    /// Returns the behavior descriptor this Vector was built with.
    pub const fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Returns a pointer to the start of the buffer.
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr.as_ptr().cast_const().cast()
    }

    /// Returns a pointer to the first unoccupied slot, one past the last element.
    pub const fn finish_ptr(&self) -> *const T {
        // SAFETY: len <= cap, so the pointer is in bounds of or one past the allocation.
        unsafe { self.buf.slot(self.len).cast_const() }
    }

    /// Returns a pointer one past the last allocated slot.
    pub const fn storage_end_ptr(&self) -> *const T {
        // SAFETY: The pointer is one past the end of the allocation.
        unsafe { self.buf.slot(self.buf.cap()).cast_const() }
    }

    /// Returns a reference to the first element, if there is one.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, if there is one.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::with_cap(16);
    /// for i in 0..17 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(vec.len(), 17);
    /// assert_eq!(vec.cap(), 32);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow_for(1);
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.buf.slot(self.len).write(value) }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning it to the caller rather than
    /// destroying it.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;

            // SAFETY: len has just been decremented and the slot at len is still initialized. We
            // make a bitwise copy and then consider the slot uninitialized, which moves the value
            // out of the buffer.
            Some(unsafe { self.buf.slot(self.len).read() })
        }
    }

    /// Removes the last element and destroys it with the behavior descriptor. Does nothing if the
    /// Vector is empty.
    pub fn pop_back(&mut self) {
        if let Some(value) = self.pop() {
            self.behavior.destroy(value);
        }
    }

    /// Shortens the Vector to `new_len`, destroying the elements past it. Does nothing if the
    /// Vector is already no longer than `new_len`.
    pub fn truncate(&mut self, new_len: usize) {
        while self.len > new_len {
            self.pop_back();
        }
    }

    /// Destroys every element, leaving the capacity untouched.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Requests that the capacity become exactly `new_cap`, which must be greater than the current
    /// capacity.
    ///
    /// # Errors
    /// Returns [`ReserveTooSmall`] without changing anything if `new_cap` doesn't exceed the current
    /// capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveTooSmall> {
        if new_cap <= self.cap() {
            return Err(ReserveTooSmall {
                requested: new_cap,
                cap: self.cap(),
            });
        }

        self.buf.realloc(new_cap);
        Ok(())
    }

    /// Requests that the capacity become exactly `new_cap`. Requests that don't exceed the current
    /// capacity are reported and ignored.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).reported();
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.buf.realloc(self.len);
    }

    /// Adjusts the capacity of the Vector to `new_cap`, destroying elements that no longer fit
    /// before the buffer is resized.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn adjust_cap(&mut self, new_cap: usize) {
        self.truncate(new_cap);
        self.buf.realloc(new_cap);
    }

    /// Resizes the Vector to `new_len`, either destroying the elements past it or filling the new
    /// slots with copies of `value`.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.resize(4, 0);
    /// assert_eq!(&*vec, &[1, 2, 0, 0]);
    /// vec.resize(1, 0);
    /// assert_eq!(&*vec, &[1]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        B: Duplicate<T>,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            self.behavior.destroy(value);
        } else {
            self.fill_back(new_len - self.len, value);
        }
    }

    /// Clears the Vector and refills it with `count` copies of `value`.
    pub fn assign_fill(&mut self, count: usize, value: T)
    where
        B: Duplicate<T>,
    {
        self.clear();
        if count == 0 {
            self.behavior.destroy(value);
        } else {
            self.fill_back(count, value);
        }
    }

    /// Clears the Vector and refills it with the contents of `items`.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([9, 9, 9, 9]);
    /// vec.assign_range(1..=2);
    /// assert_eq!(&*vec, &[1, 2]);
    /// ```
    pub fn assign_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.clear();
        self.extend(items);
    }

    /// Moves the contents of this Vector into a new one, leaving this Vector empty with capacity 0
    /// and the same behavior descriptor.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut src = Vector::from([1, 2, 3]);
    /// let dst = src.take();
    /// assert_eq!(&*dst, &[1, 2, 3]);
    /// assert!(src.is_empty());
    /// assert_eq!(src.cap(), 0);
    /// ```
    pub fn take(&mut self) -> Vector<T, B>
    where
        B: Clone,
    {
        let fresh = Vector::with_behavior(self.behavior.clone());
        mem::replace(self, fresh)
    }

    /// Exchanges the contents, capacities and descriptors of two Vectors.
    pub fn swap_with(&mut self, other: &mut Vector<T, B>) {
        mem::swap(self, other);
    }

    /// Writes every element, rendered by the behavior descriptor, into `sink` as a bracketed,
    /// comma separated list.
    pub fn write_to<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result
    where
        B: Render<T>,
    {
        sink.write_char('[')?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                sink.write_str(", ")?;
            }
            self.behavior.print(item, sink)?;
        }
        sink.write_char(']')
    }

    /// Pushes `count` elements to the back: `count - 1` copies of `value` followed by `value`
    /// itself.
    pub(crate) fn fill_back(&mut self, count: usize, value: T)
    where
        B: Duplicate<T>,
    {
        if count == 0 {
            self.behavior.destroy(value);
            return;
        }

        self.grow_for(count);
        for _ in 1..count {
            let copy = self.behavior.copy(&value);
            // SAFETY: grow_for has made room for count new elements.
            unsafe { self.push_unchecked(copy) }
        }
        // SAFETY: As above, this is the last of the count elements.
        unsafe { self.push_unchecked(value) }
    }

    /// Splits the Vector into its live elements and its behavior descriptor, so that the descriptor
    /// can operate on the elements.
    pub(crate) fn parts_mut(&mut self) -> (&mut [T], &B) {
        // SAFETY: All values below len are initialized and the range lies within the allocation.
        // The descriptor is a different field, so the two borrows don't overlap.
        let items = unsafe { slice::from_raw_parts_mut(self.buf.slot(0), self.len) };
        (items, &self.behavior)
    }

    /// Grows the buffer so that at least `additional` more elements fit, doubling the capacity
    /// (starting from a minimum of 1) until they do. Does nothing if they already fit.
    ///
    /// # Panics
    /// Panics if the required capacity exceeds the maximum for `T`.
    pub(crate) fn grow_for(&mut self, additional: usize) {
        let required = self.len.checked_add(additional)
            .filter(|required| *required <= Buffer::<T>::max_cap())
            .ok_or(CapacityOverflow)
            .throw();

        if required <= self.cap() {
            return;
        }

        let mut new_cap = cmp::max(self.cap(), MIN_CAP);
        while new_cap < required {
            // If doubling would pass the maximum capacity, the maximum is still enough.
            new_cap = new_cap.checked_mul(GROWTH_FACTOR)
                .map_or(Buffer::<T>::max_cap(), |cap| cmp::min(cap, Buffer::<T>::max_cap()));
        }

        self.buf.realloc(new_cap);
    }
}

impl<T, B: Behavior<T>> Extend<T> for Vector<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.grow_for(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T, B: Behavior<T> + Default> FromIterator<T> for Vector<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Vector::with_cap_and_behavior(iter.size_hint().0, B::default());

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);
        vec.extend(value);
        vec
    }
}

impl<T, B: Behavior<T> + Default> Default for Vector<T, B> {
    fn default() -> Self {
        Self::with_behavior(B::default())
    }
}

impl<T, B: Behavior<T>> Drop for Vector<T, B> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);

        for i in 0..len {
            // SAFETY: All values below the old len are initialized. len has already been reset, so
            // each value is read exactly once.
            let value = unsafe { self.buf.slot(i).read() };
            self.behavior.destroy(value);
        }

        // Implicitly drop self.buf, which deallocates without touching any slots.
    }
}

impl<T, B: Behavior<T>> Deref for Vector<T, B> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }
}

impl<T, B: Behavior<T>> DerefMut for Vector<T, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.parts_mut().0
    }
}

impl<T, B: Behavior<T>> AsRef<[T]> for Vector<T, B> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, B: Behavior<T>> AsMut<[T]> for Vector<T, B> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, B: Behavior<T>> Borrow<[T]> for Vector<T, B> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, B: Behavior<T>> BorrowMut<[T]> for Vector<T, B> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, B: Duplicate<T> + Clone> Clone for Vector<T, B> {
    /// Copies every element with the behavior descriptor, which makes this a deep copy whenever the
    /// descriptor's copy is one. The capacity of the clone matches the original.
    fn clone(&self) -> Self {
        let mut vec = Vector::with_cap_and_behavior(self.cap(), self.behavior.clone());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which is at least self.len.
            unsafe { vec.push_unchecked(self.behavior.copy(value)) }
        }

        vec
    }
}

impl<T, B, B2> PartialEq<Vector<T, B2>> for Vector<T, B>
where
    T: PartialEq,
    B: Behavior<T>,
    B2: Behavior<T>,
{
    fn eq(&self, other: &Vector<T, B2>) -> bool {
        **self == **other
    }
}

impl<T: Eq, B: Behavior<T>> Eq for Vector<T, B> {}

impl<T: Hash, B: Behavior<T>> Hash for Vector<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug, B: Behavior<T>> Debug for Vector<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T, B: Render<T>> Display for Vector<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
