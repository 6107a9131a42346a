//! A module containing [`Vector`] and associated types.
//!
//! The engine is split by concern: construction, capacity and element access in the main module,
//! positional insertion and erasure in `edit`, and searching, sorting and merging in `algo`. Owned
//! iteration is provided by [`IntoIter`]; [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration, and the
//! [`Traverse`](crate::collections::cursor::Traverse) implementation provides cursors.
//!
//! [`Vector`] is also re-exported under the parent module.

mod algo;
mod edit;
mod iter;
mod vector;

pub use iter::*;
pub use vector::*;

#[cfg(test)]
mod tests;
