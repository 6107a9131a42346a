use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::{Iter, Traverse};
use crate::collections::behavior::Compare;
use crate::util::error::{CursorOutOfRange, ForeignCursor};
use crate::util::result::ResultExtension;

/// A detached position within a collection. Unlike a [`Cursor`], a Position doesn't borrow the
/// collection it came from, so it can be handed to mutating methods and survives reallocation: it
/// is resolved against the live buffer every time it's used.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    pub const fn new(index: usize) -> Position {
        Position(index)
    }

    /// Returns the offset of this position from the start of its collection.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Position {
    fn from(value: usize) -> Self {
        Position(value)
    }
}

/// A non-owning, position-tracking view into a single collection, for any collection that
/// implements [`Traverse`]. See [`Traverse::begin`] and [`Traverse::end`] to create one.
///
/// A Cursor borrows its collection immutably, so the collection can't be restructured (and the
/// cursor left dangling) while the cursor is alive. Convert to a [`Position`] to address mutating
/// methods.
///
/// Moves that would take a cursor outside of `0..=len` are refused. The `try_` methods return the
/// reason, while the lenient methods report it as a diagnostic and leave the cursor where it was.
///
/// # Examples
/// ```
/// # use generic_containers::collections::contiguous::Vector;
/// # use generic_containers::collections::cursor::Traverse;
/// let vec = Vector::from([10, 20, 30, 40]);
/// let mut cursor = vec.begin();
///
/// cursor.advance(2);
/// assert_eq!(cursor.curr(), Some(&30));
/// assert_eq!(cursor.index(), 2);
///
/// // Refused: there is no position before the start.
/// assert!(cursor.prev_n(3).try_prev_n(3).is_err());
/// assert_eq!(vec.end().distance_to(&cursor), Some(-2));
/// ```
pub struct Cursor<'a, C: ?Sized> {
    pub(crate) container: &'a C,
    pub(crate) pos: usize,
}

impl<'a, C: Traverse + ?Sized> Cursor<'a, C> {
    pub(crate) const fn new(container: &'a C, pos: usize) -> Cursor<'a, C> {
        Cursor { container, pos }
    }

    /// Returns the collection that this cursor refers to.
    pub const fn container(&self) -> &'a C {
        self.container
    }

    /// Detaches the cursor from its collection.
    pub const fn position(&self) -> Position {
        Position(self.pos)
    }

    /// Returns the offset of this cursor from the start of its collection.
    pub const fn index(&self) -> usize {
        self.pos
    }

    /// Returns true if the cursor is at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.pos == self.container.slot_count()
    }

    fn offset(&self, offset: isize) -> Result<usize, CursorOutOfRange> {
        let len = self.container.slot_count();
        self.pos.checked_add_signed(offset)
            .filter(|new_pos| *new_pos <= len)
            .ok_or(CursorOutOfRange {
                from: self.pos,
                offset,
                len,
            })
    }

    /// Returns a new cursor `n` positions forward, or an error if it would pass the end sentinel.
    pub fn try_next_n(&self, n: usize) -> Result<Self, CursorOutOfRange> {
        let offset = isize::try_from(n).unwrap_or(isize::MAX);
        Ok(Cursor::new(self.container, self.offset(offset)?))
    }

    /// Returns a new cursor `n` positions forward. If that isn't possible, a copy of this cursor is
    /// returned instead.
    pub fn next_n(&self, n: usize) -> Self {
        self.try_next_n(n).reported().unwrap_or(*self)
    }

    pub fn try_next(&self) -> Result<Self, CursorOutOfRange> {
        self.try_next_n(1)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Self {
        self.next_n(1)
    }

    /// Returns a new cursor `n` positions back, or an error if it would pass the start.
    pub fn try_prev_n(&self, n: usize) -> Result<Self, CursorOutOfRange> {
        let offset = isize::try_from(n).map_or(isize::MIN, |n| -n);
        Ok(Cursor::new(self.container, self.offset(offset)?))
    }

    /// Returns a new cursor `n` positions back. If that isn't possible, a copy of this cursor is
    /// returned instead.
    pub fn prev_n(&self, n: usize) -> Self {
        self.try_prev_n(n).reported().unwrap_or(*self)
    }

    pub fn try_prev(&self) -> Result<Self, CursorOutOfRange> {
        self.try_prev_n(1)
    }

    pub fn prev(&self) -> Self {
        self.prev_n(1)
    }

    /// Moves the cursor by `n` positions in place, backwards for negative values.
    pub fn try_advance(&mut self, n: isize) -> Result<&mut Self, CursorOutOfRange> {
        self.pos = self.offset(n)?;
        Ok(self)
    }

    /// Moves the cursor by `n` positions in place, backwards for negative values. The cursor is left
    /// where it is if the move isn't possible.
    pub fn advance(&mut self, n: isize) -> &mut Self {
        if let Some(pos) = self.offset(n).reported() {
            self.pos = pos;
        }
        self
    }

    pub fn incr(&mut self) -> &mut Self {
        self.advance(1)
    }

    pub fn decr(&mut self) -> &mut Self {
        self.advance(-1)
    }

    /// Returns the element under the cursor, or [`None`] at the end sentinel.
    pub fn curr(&self) -> Option<&'a C::Item> {
        self.container.slot(self.pos)
    }

    /// Returns the first element of the collection.
    pub fn first(&self) -> Option<&'a C::Item> {
        self.container.slot(0)
    }

    /// Returns the last element of the collection.
    pub fn last(&self) -> Option<&'a C::Item> {
        self.container.slot_count()
            .checked_sub(1)
            .and_then(|index| self.container.slot(index))
    }

    /// Returns the signed number of positions from this cursor to `other`, which is the length of
    /// the range `self..other` when `other` isn't behind this cursor.
    pub fn try_distance_to(&self, other: &Cursor<'_, C>) -> Result<isize, ForeignCursor> {
        if !ptr::eq(self.container, other.container) {
            return Err(ForeignCursor);
        }

        // Collections of zero-sized values can hold more than isize::MAX slots, so the distance
        // saturates rather than wrapping.
        let distance = match other.pos.checked_sub(self.pos) {
            Some(forward) => isize::try_from(forward).unwrap_or(isize::MAX),
            None => isize::try_from(self.pos - other.pos).map_or(isize::MIN, |back| -back),
        };
        Ok(distance)
    }

    pub fn distance_to(&self, other: &Cursor<'_, C>) -> Option<isize> {
        self.try_distance_to(other).reported()
    }

    /// Returns true if there is an element one position forward.
    pub fn has_next(&self) -> bool {
        self.pos < self.container.slot_count().saturating_sub(1)
    }

    /// Returns true if there is an element one position back.
    pub const fn has_prev(&self) -> bool {
        self.pos > 0
    }

    /// Returns the behavior descriptor of the collection.
    pub fn behavior(&self) -> &'a C::Behavior {
        self.container.behavior()
    }

    /// Returns an iterator over the elements from this cursor to the end of the collection.
    pub fn iter(&self) -> Iter<'a, C> {
        Iter::new(self.container, self.pos, self.container.slot_count())
    }

    /// Scans forward from this cursor for the first element equal to `value` according to the
    /// collection's comparator, returning a cursor to it.
    pub fn find(&self, value: &C::Item) -> Option<Cursor<'a, C>>
    where
        C::Behavior: Compare<C::Item>,
    {
        let behavior = self.behavior();
        let mut cursor = *self;

        while let Some(item) = cursor.curr() {
            if behavior.equal(item, value) {
                return Some(cursor);
            }
            cursor.pos += 1;
        }

        None
    }

    /// Scans forward from this cursor for the first element matching `pred`.
    pub fn find_if<P: FnMut(&C::Item) -> bool>(&self, mut pred: P) -> Option<Cursor<'a, C>> {
        let mut cursor = *self;

        while let Some(item) = cursor.curr() {
            if pred(item) {
                return Some(cursor);
            }
            cursor.pos += 1;
        }

        None
    }
}

impl<C: ?Sized> Clone for Cursor<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Cursor<'_, C> {}

impl<C: ?Sized> PartialEq for Cursor<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.container, other.container) && self.pos == other.pos
    }
}

impl<C: ?Sized> Eq for Cursor<'_, C> {}

impl<'a, C: Traverse + ?Sized> From<Cursor<'a, C>> for Position {
    fn from(value: Cursor<'a, C>) -> Self {
        value.position()
    }
}

impl<C: ?Sized> Debug for Cursor<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("container", &ptr::from_ref(self.container).cast::<()>())
            .field("pos", &self.pos)
            .finish()
    }
}
