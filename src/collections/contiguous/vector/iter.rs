use std::iter::FusedIterator;
use std::mem::{self, ManuallyDrop};
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::behavior::Behavior;
use crate::collections::contiguous::buffer::Buffer;
use crate::collections::cursor::Traverse;

impl<T, B: Behavior<T>> Traverse for Vector<T, B> {
    type Item = T;
    type Behavior = B;

    fn slot_count(&self) -> usize {
        self.len
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn behavior(&self) -> &B {
        &self.behavior
    }
}

impl<T, B: Behavior<T>> IntoIterator for Vector<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);

        // SAFETY: vec is never dropped, so both fields are moved out of it exactly once.
        let (buf, behavior) = unsafe { (ptr::read(&vec.buf), ptr::read(&vec.behavior)) };

        IntoIter {
            buf,
            behavior,
            front: 0,
            back: vec.len,
        }
    }
}

impl<'a, T, B: Behavior<T>> IntoIterator for &'a Vector<T, B> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, B: Behavior<T>> IntoIterator for &'a mut Vector<T, B> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. Elements that are never yielded are destroyed
/// with the Vector's behavior descriptor when the iterator is dropped.
pub struct IntoIter<T, B: Behavior<T>> {
    pub(crate) buf: Buffer<T>,
    pub(crate) behavior: B,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T, B: Behavior<T>> Drop for IntoIter<T, B> {
    fn drop(&mut self) {
        let (front, back) = (self.front, mem::replace(&mut self.back, self.front));

        for i in front..back {
            // SAFETY: Slots in front..back are initialized and haven't been yielded. back has been
            // reset, so each is read exactly once.
            let value = unsafe { self.buf.slot(i).read() };
            self.behavior.destroy(value);
        }
    }
}

impl<T, B: Behavior<T>> Iterator for IntoIter<T, B> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            // SAFETY: The slot is initialized and front is incremented straight after, so the value
            // is effectively moved out of the buffer.
            let value = unsafe { self.buf.slot(self.front).read() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T, B: Behavior<T>> DoubleEndedIterator for IntoIter<T, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: The slot at the newly decremented back is initialized and no longer tracked.
            Some(unsafe { self.buf.slot(self.back).read() })
        } else {
            None
        }
    }
}

impl<T, B: Behavior<T>> FusedIterator for IntoIter<T, B> {}

impl<T, B: Behavior<T>> ExactSizeIterator for IntoIter<T, B> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

// Just use the iter and iter_mut definitions provided by Deref<Target = [T]>.
