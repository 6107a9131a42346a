//! The error types reported by this crate's collections.

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, CursorOutOfRange, ForeignCursor, IndexOutOfBounds, InvertedRange,
    ReserveTooSmall, VectorError, ZeroCount,
};
