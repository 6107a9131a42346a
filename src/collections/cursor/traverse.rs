use super::{Cursor, Position};
use crate::collections::behavior::{NATURAL, Natural};

/// The cursor table: the operations a collection kind supplies once so that [`Cursor`]s, and
/// anything written against them, can traverse it without knowing what it is.
///
/// Only the first three items need to be implemented. A collection exposes its elements as a run of
/// `slot_count` addressable slots; positions range over `0..=slot_count`, with `slot_count` itself
/// acting as the end sentinel that is never dereferenced.
///
/// The remaining operations of the table live on [`Cursor`], in this order: `next`, `next_n`,
/// `prev`, `prev_n`, `advance`, `incr`, `decr`, `curr`, `first`, `last`, `index` /
/// `distance_to`, `has_next`, `has_prev` and `behavior`.
pub trait Traverse {
    /// The element type.
    type Item;
    /// The behavior descriptor that the collection was built with.
    type Behavior;

    /// Returns the number of dereferenceable positions.
    fn slot_count(&self) -> usize;

    /// Returns the element at `index`, if there is one.
    fn slot(&self, index: usize) -> Option<&Self::Item>;

    /// Returns the collection's behavior descriptor.
    fn behavior(&self) -> &Self::Behavior;

    /// Returns a cursor at the first element, which is the end sentinel for an empty collection.
    fn begin(&self) -> Cursor<'_, Self> {
        Cursor::new(self, 0)
    }

    /// Returns a cursor at the end sentinel, one past the last element.
    fn end(&self) -> Cursor<'_, Self> {
        Cursor::new(self, self.slot_count())
    }

    /// Resolves a detached [`Position`] against the collection as it is now. Returns [`None`] if the
    /// collection has shrunk so that the position no longer exists.
    fn cursor_at(&self, pos: Position) -> Option<Cursor<'_, Self>> {
        if pos.index() <= self.slot_count() {
            Some(Cursor::new(self, pos.index()))
        } else {
            None
        }
    }
}

impl<T> Traverse for [T] {
    type Item = T;
    type Behavior = Natural;

    fn slot_count(&self) -> usize {
        self.len()
    }

    fn slot(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn behavior(&self) -> &Natural {
        &NATURAL
    }
}
