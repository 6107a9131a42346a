//! The collection types and the two abstractions they are built on.
//!
//! # Purpose
//! [`Vector`](contiguous::Vector) is written once, generic over its element type. What would
//! otherwise have to be written separately for every element type (how to copy, destroy, relocate,
//! compare and print an element) is supplied by a [behavior descriptor](behavior), and traversal is
//! expressed through the [cursor protocol](cursor) so that algorithms don't depend on the kind of
//! collection they walk.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality.

pub mod behavior;
pub mod contiguous;
pub mod cursor;
