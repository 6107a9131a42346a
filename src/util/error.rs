use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A request to reserve a capacity that the collection already has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveTooSmall {
    pub requested: usize,
    pub cap: usize,
}

impl Display for ReserveTooSmall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Can't reserve capacity {} for collection with capacity {}!",
            self.requested, self.cap
        )
    }
}

impl Error for ReserveTooSmall {}

/// A request to insert zero copies of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCount;

impl Display for ZeroCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Can't insert zero copies of an element!")
    }
}

impl Error for ZeroCount {}

/// A cursor move that would leave the range `0..=len` of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorOutOfRange {
    pub from: usize,
    pub offset: isize,
    pub len: usize,
}

impl Display for CursorOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.offset < 0 {
            write!(
                f,
                "Can't retract cursor at {} by {} in collection with {} elements!",
                self.from, self.offset.unsigned_abs(), self.len
            )
        } else {
            write!(
                f,
                "Can't advance cursor at {} by {} in collection with {} elements!",
                self.from, self.offset, self.len
            )
        }
    }
}

impl Error for CursorOutOfRange {}

/// Two cursors that were expected to refer to the same container don't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignCursor;

impl Display for ForeignCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursors refer to different collections!")
    }
}

impl Error for ForeignCursor {}

/// A range whose start lies after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedRange {
    pub start: usize,
    pub end: usize,
}

impl Display for InvertedRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Range start {} is after range end {}!", self.start, self.end)
    }
}

impl Error for InvertedRange {}

/// Every recoverable error a [`Vector`](crate::collections::contiguous::Vector) can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum VectorError {
    IndexOutOfBounds(IndexOutOfBounds),
    InvertedRange(InvertedRange),
    ReserveTooSmall(ReserveTooSmall),
}
