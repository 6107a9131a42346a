//! The cursor protocol, which lets algorithms traverse any collection the same way.
//!
//! A collection kind implements [`Traverse`] once. Any [`Cursor`] into it then supports the whole
//! protocol: begin / end, stepping by one or by `n` in either direction (as new cursors or in
//! place), dereferencing, index and distance queries, lookahead and access to the collection's
//! behavior descriptor.
//!
//! Cursors borrow their collection. When a position needs to outlive a borrow, for example to be
//! handed to a mutating method, it is detached as a [`Position`] and later resolved again with
//! [`Traverse::cursor_at`].

mod cursor;
mod iter;
mod traverse;

pub use cursor::*;
pub use iter::*;
pub use traverse::*;
