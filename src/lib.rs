//! A generic container library built around a growable array.
//!
//! # Structure
//! The crate is made of three parts that depend on each other in one direction:
//! - [`behavior`](collections::behavior): behavior descriptors, which tell a collection how to
//!   copy, destroy, swap, compare and print its elements.
//! - [`cursor`](collections::cursor): the cursor protocol, a table of traversal operations that a
//!   collection kind supplies once so that algorithms can walk any collection the same way.
//! - [`contiguous`](collections::contiguous): [`Vector`](collections::contiguous::Vector), the
//!   growable array engine, which uses both.
//!
//! # Error Handling
//! Errors come in two tiers. Contract violations that leave no sensible way to continue (capacity
//! overflow, allocation failure, indexing out of bounds with `[]`) panic, or abort in the case of
//! allocation failure. Everything else is recoverable: a semantically bad argument, such as an out
//! of bounds index passed to [`insert_at`](collections::contiguous::Vector::insert_at), leaves the
//! collection unchanged.
//!
//! Every recoverable operation comes in two forms. The `try_` form returns a [`Result`] with a
//! strongly typed error (ZST-like structs which implement [`Error`](std::error::Error), gathered
//! into enums where an operation can fail in more than one way). The plain form reports the error
//! as a diagnostic on stderr and carries on, returning an unchanged value where it returns
//! anything at all.
//!
//! # Features
//! - `diagnostics` (default): emit a diagnostic line for every recoverable error that reaches a
//!   plain (non-`try_`) method. Without it, those errors are silently ignored.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] anywhere: [`Vector`](collections::contiguous::Vector) manages its
//! own allocation. It depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod error;

pub(crate) mod util;
