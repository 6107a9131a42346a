use std::iter::FusedIterator;

use super::Traverse;

/// A borrowed iterator over a range of positions in any [`Traverse`] collection. See
/// [`Cursor::iter`](super::Cursor::iter).
pub struct Iter<'a, C: ?Sized> {
    pub(crate) container: &'a C,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<'a, C: Traverse + ?Sized> Iter<'a, C> {
    pub(crate) const fn new(container: &'a C, front: usize, back: usize) -> Iter<'a, C> {
        Iter {
            container,
            front,
            back,
        }
    }
}

impl<'a, C: Traverse + ?Sized> Iterator for Iter<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let item = self.container.slot(self.front);
            self.front += 1;
            item
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<C: Traverse + ?Sized> DoubleEndedIterator for Iter<'_, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.container.slot(self.back)
        } else {
            None
        }
    }
}

impl<C: Traverse + ?Sized> FusedIterator for Iter<'_, C> {}

impl<C: Traverse + ?Sized> ExactSizeIterator for Iter<'_, C> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<C: ?Sized> Clone for Iter<'_, C> {
    fn clone(&self) -> Self {
        Iter {
            container: self.container,
            front: self.front,
            back: self.back,
        }
    }
}
