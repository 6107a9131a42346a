use std::mem;

use super::Vector;
use crate::collections::behavior::{Behavior, Duplicate};
use crate::collections::cursor::Position;
use crate::util::error::{IndexOutOfBounds, InvertedRange, VectorError, ZeroCount};
use crate::util::result::ResultExtension;

// Positional edits never shift elements with a bulk memory move. New elements are pushed past the
// end and then carried to their position by a chain of pairwise exchanges; erased elements are
// carried to the end the same way and popped from there. Every exchange goes through the behavior
// descriptor's swap.

impl<T, B: Behavior<T>> Vector<T, B> {
    /// Inserts `value` before `pos`, returning the position of the inserted element. Inserting at
    /// or past the end is a push, so a position left over from a longer Vector still appends.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// # use generic_containers::collections::cursor::{Position, Traverse};
    /// let mut vec = Vector::from([1, 2, 4]);
    /// let pos = vec.begin().next_n(2).position();
    /// let pos = vec.insert(pos, 3);
    /// assert_eq!(vec.cursor_at(pos).and_then(|c| c.curr().copied()), Some(3));
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    ///
    /// assert_eq!(vec.insert(Position::new(10), 5), Position::new(4));
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert(&mut self, pos: Position, value: T) -> Position {
        let index = self.clamp_position(pos);

        self.push(value);
        self.carry_back(index, 1);

        Position::new(index)
    }

    /// Inserts `count` copies of `value` before `pos`, returning the position of the first inserted
    /// element. Positions at or past the end append.
    ///
    /// # Errors
    /// Returns [`ZeroCount`] if `count` is zero, in which case the Vector is unchanged and `value` is
    /// destroyed.
    pub fn try_insert_n(
        &mut self,
        pos: Position,
        count: usize,
        value: T,
    ) -> Result<Position, ZeroCount>
    where
        B: Duplicate<T>,
    {
        match count {
            0 => {
                self.behavior.destroy(value);
                Err(ZeroCount)
            },
            1 => Ok(self.insert(pos, value)),
            _ => {
                let index = self.clamp_position(pos);

                self.fill_back(count, value);
                self.carry_back(index, count);

                Ok(Position::new(index))
            },
        }
    }

    /// Inserts `count` copies of `value` before `pos`. A count of zero is reported and `pos` is
    /// returned unchanged.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// # use generic_containers::collections::cursor::Position;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.insert_n(Position::new(1), 3, 0);
    /// assert_eq!(&*vec, &[1, 0, 0, 0, 2]);
    /// ```
    pub fn insert_n(&mut self, pos: Position, count: usize, value: T) -> Position
    where
        B: Duplicate<T>,
    {
        self.try_insert_n(pos, count, value).reported().unwrap_or(pos)
    }

    /// Inserts every element of `items`, in order, before `pos`, returning the position of the first
    /// inserted element. Positions at or past the end append.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// # use generic_containers::collections::cursor::Position;
    /// let mut vec = Vector::from(['a', 'e']);
    /// vec.insert_range(Position::new(1), "bcd".chars());
    /// assert_eq!(&*vec, &['a', 'b', 'c', 'd', 'e']);
    /// ```
    pub fn insert_range<I: IntoIterator<Item = T>>(&mut self, pos: Position, items: I) -> Position {
        let index = self.clamp_position(pos);

        let old_len = self.len;
        self.extend(items);
        self.carry_back(index, self.len - old_len);

        Position::new(index)
    }

    /// Inserts `value` at `index`, shifting every following element back by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, in which case the Vector is unchanged and
    /// `value` is destroyed.
    pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if let Err(err) = self.check_position(index) {
            self.behavior.destroy(value);
            return Err(err);
        }

        self.insert(Position::new(index), value);
        Ok(())
    }

    /// Inserts `value` at `index`, shifting every following element back by one. An out of bounds
    /// index is reported and ignored.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(8);
    /// vec.extend([1, 2, 3, 4, 5]);
    /// vec.insert_at(2, 99);
    /// assert_eq!(&*vec, &[1, 2, 99, 3, 4, 5]);
    /// vec.erase_at(2);
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) {
        self.try_insert_at(index, value).reported();
    }

    /// Erases the element at `pos`, destroying it, and returns the position of the element that
    /// followed it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if there is no element at `pos`.
    pub fn try_erase(&mut self, pos: Position) -> Result<Position, IndexOutOfBounds> {
        self.check_index(pos.index())?;

        self.carry_to_end(pos.index(), 1);
        self.pop_back();

        Ok(pos)
    }

    /// Erases the element at `pos`, destroying it, and returns the position of the element that
    /// followed it. An invalid position is reported and returned unchanged.
    pub fn erase(&mut self, pos: Position) -> Position {
        self.try_erase(pos).reported().unwrap_or(pos)
    }

    /// Erases every element in `first..last`, destroying them, and returns the position of the
    /// element that followed the range. An empty range erases nothing.
    ///
    /// # Errors
    /// Returns [`VectorError::InvertedRange`] if `first` is after `last` or
    /// [`VectorError::IndexOutOfBounds`] if `last` is past the end.
    pub fn try_erase_range(
        &mut self,
        first: Position,
        last: Position,
    ) -> Result<Position, VectorError> {
        let (start, end) = (first.index(), last.index());

        if start > end {
            Err(InvertedRange { start, end })?
        }
        self.check_position(end)?;

        let count = end - start;
        if count > 0 {
            self.carry_to_end(start, count);
            self.truncate(self.len - count);
        }

        Ok(first)
    }

    /// Erases every element in `first..last`, destroying them, and returns the position of the
    /// element that followed the range. An invalid range is reported and `first` is returned.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// # use generic_containers::collections::cursor::Position;
    /// let mut vec = Vector::from([0, 1, 2, 3, 4, 5]);
    /// vec.erase_range(Position::new(1), Position::new(4));
    /// assert_eq!(&*vec, &[0, 4, 5]);
    /// ```
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        self.try_erase_range(first, last).reported().unwrap_or(first)
    }

    /// Erases the element at `index`, destroying it.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_erase_at(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        self.try_erase(Position::new(index)).map(|_| ())
    }

    /// Erases the element at `index`, destroying it. An out of bounds index is reported and ignored.
    pub fn erase_at(&mut self, index: usize) {
        self.try_erase_at(index).reported();
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, in which case `value` is destroyed.
    pub fn try_replace_at(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        match self.check_index(index) {
            Ok(()) => Ok(mem::replace(&mut self[index], value)),
            Err(err) => {
                self.behavior.destroy(value);
                Err(err)
            },
        }
    }

    /// Replaces the element at `index` with `value`, destroying the old element. An out of bounds
    /// index is reported and ignored.
    pub fn replace_at(&mut self, index: usize, value: T) {
        if let Some(old) = self.try_replace_at(index, value).reported() {
            self.behavior.destroy(old);
        }
    }

    /// Removes the element at `index` and returns it rather than destroying it, shifting every
    /// following element forward by one. Returns [`None`] if there is no element at `index`.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.take_at(1), Some('e'));
    /// assert_eq!(vec.take_at(4), Some(' '));
    /// assert_eq!(vec.take_at(10), None);
    /// assert_eq!(vec.iter().collect::<String>(), "Hlloworld!");
    /// ```
    pub fn take_at(&mut self, index: usize) -> Option<T> {
        self.check_index(index).ok()?;
        self.carry_to_end(index, 1);
        self.pop()
    }

    /// Erases every element matching `pred`, returning how many were erased. The scan resumes at the
    /// same index after each erase, because everything after it has shifted forward.
    pub fn remove_if<P: FnMut(&T) -> bool>(&mut self, mut pred: P) -> usize {
        let mut index = 0;
        let mut removed = 0;

        while index < self.len {
            if pred(&self[index]) {
                self.carry_to_end(index, 1);
                self.pop_back();
                removed += 1;
            } else {
                index += 1;
            }
        }

        removed
    }

    /// Exchanges the elements at `a` and `b` through the behavior descriptor.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn swap_at(&mut self, a: usize, b: usize) {
        self.check_index(a).throw();
        self.check_index(b).throw();
        self.exchange(a, b);
    }

    /// Reverses the elements in `start..end` by exchanging symmetric pairs.
    pub(crate) fn reverse_range(&mut self, mut start: usize, mut end: usize) {
        while start + 1 < end {
            end -= 1;
            self.exchange(start, end);
            start += 1;
        }
    }

    /// Moves the last `count` elements so that they start at `index`, keeping their order and the
    /// order of the elements they pass.
    fn carry_back(&mut self, index: usize, count: usize) {
        let end = self.len;
        if count == 0 || index + count >= end {
            // Nothing to pass: the elements are already in place.
            return;
        }

        if count == 1 {
            for i in (index..end - 1).rev() {
                self.exchange(i, i + 1);
            }
        } else {
            self.rotate(index, end - count, end);
        }
    }

    /// Moves the `count` elements starting at `index` to the end, keeping their order and the order
    /// of the elements they pass.
    fn carry_to_end(&mut self, index: usize, count: usize) {
        let end = self.len;
        if count == 0 || index + count >= end {
            return;
        }

        if count == 1 {
            for i in index..end - 1 {
                self.exchange(i, i + 1);
            }
        } else {
            self.rotate(index, index + count, end);
        }
    }

    /// Swaps the runs `start..mid` and `mid..end` by three reversals.
    fn rotate(&mut self, start: usize, mid: usize, end: usize) {
        self.reverse_range(start, mid);
        self.reverse_range(mid, end);
        self.reverse_range(start, end);
    }

    /// The relocation primitive: exchanges the live elements at `a` and `b` with the behavior
    /// descriptor's swap.
    pub(crate) fn exchange(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        let (lo, hi) = (a.min(b), a.max(b));
        let (items, behavior) = self.parts_mut();
        let (head, tail) = items.split_at_mut(hi);
        behavior.swap(&mut head[lo], &mut tail[0]);
    }

    /// Resolves `pos` for insertion: anything past the end means the end.
    const fn clamp_position(&self, pos: Position) -> usize {
        if pos.index() > self.len {
            self.len
        } else {
            pos.index()
        }
    }

    /// Checks that `index` refers to an element.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// Checks that `index` is a valid position, which includes the end.
    pub(crate) const fn check_position(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}
