//! Contiguous collection types. Namely [`Vector`], a growable array whose element semantics are
//! provided by a behavior descriptor.

pub(crate) mod buffer;
pub mod vector;

#[doc(inline)]
pub use vector::Vector;
