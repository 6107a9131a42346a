//! Behavior descriptors: the per-element-type semantics a collection consults when it copies,
//! destroys, relocates, compares or prints its elements.
//!
//! # The Descriptor Record
//! A descriptor is conceptually a record with the following fields, always listed in this order:
//!
//! | Field | Item | When absent |
//! |-|-|-|
//! | width | [`Behavior::width`] | `size_of::<T>()` |
//! | copy | [`Duplicate::copy`] | - |
//! | destroy | [`Behavior::destroy`] | the element is dropped |
//! | swap | [`Behavior::swap`] | [`mem::swap`] |
//! | compare | [`Compare::compare`] | - |
//! | print | [`Render::print`] | - |
//!
//! The optional fields live on [`Behavior`] and have defaults. The fields that only some operations
//! demand are split into their own traits, so that asking a collection to sort without a
//! comparator is a compile error rather than a runtime failure.
//!
//! # Sharing
//! A descriptor is shared by every collection built with it rather than owned by any one of them.
//! Zero-sized descriptors such as [`Natural`] are free to copy, and `&B` and [`Rc<B>`] are
//! descriptors whenever `B` is, so a single `static` [`Table`] (or any other value) can back any
//! number of collections.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::rc::Rc;

mod natural;
mod table;

pub use natural::*;
pub use table::*;

/// The lifecycle part of a behavior descriptor. Every method has a default, so an empty
/// implementation describes plain data.
pub trait Behavior<T> {
    /// The width of a single element, in bytes.
    fn width(&self) -> usize {
        mem::size_of::<T>()
    }

    /// Releases an element that a collection is discarding.
    fn destroy(&self, elem: T) {
        drop(elem)
    }

    /// Exchanges the contents of two slots. This is the relocation primitive that every shift
    /// performed by a collection is built on.
    fn swap(&self, a: &mut T, b: &mut T) {
        mem::swap(a, b)
    }
}

/// The `copy` field of a descriptor: produces an independent duplicate of an element.
pub trait Duplicate<T>: Behavior<T> {
    fn copy(&self, src: &T) -> T;
}

/// The `compare` field of a descriptor: a total order over elements, also used as the equality
/// test for searching.
pub trait Compare<T>: Behavior<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// The `print` field of a descriptor: renders a single element into a sink.
pub trait Render<T>: Behavior<T> {
    fn print(&self, elem: &T, sink: &mut dyn fmt::Write) -> fmt::Result;
}

macro_rules! forward_behavior {
    ($($ptr:ty),*) => {
        $(
            impl<T, B: Behavior<T> + ?Sized> Behavior<T> for $ptr {
                fn width(&self) -> usize {
                    (**self).width()
                }

                fn destroy(&self, elem: T) {
                    (**self).destroy(elem)
                }

                fn swap(&self, a: &mut T, b: &mut T) {
                    (**self).swap(a, b)
                }
            }

            impl<T, B: Duplicate<T> + ?Sized> Duplicate<T> for $ptr {
                fn copy(&self, src: &T) -> T {
                    (**self).copy(src)
                }
            }

            impl<T, B: Compare<T> + ?Sized> Compare<T> for $ptr {
                fn compare(&self, a: &T, b: &T) -> Ordering {
                    (**self).compare(a, b)
                }
            }

            impl<T, B: Render<T> + ?Sized> Render<T> for $ptr {
                fn print(&self, elem: &T, sink: &mut dyn fmt::Write) -> fmt::Result {
                    (**self).print(elem, sink)
                }
            }
        )*
    };
}

forward_behavior!(&B, Rc<B>);
