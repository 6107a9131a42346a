use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use super::{Behavior, Compare, Duplicate, Render};

/// The descriptor used whenever a collection is built without one. It derives each field from the
/// element's own traits: [`Clone`] for copy, [`Ord`] for compare and [`Debug`] for print.
///
/// Each capability is only available when the element implements the corresponding trait, so a
/// `Vector<f64>` can still be pushed into, copied and printed; it just can't be sorted without a
/// different descriptor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

/// The process-wide instance of [`Natural`].
pub const NATURAL: Natural = Natural;

impl<T> Behavior<T> for Natural {}

impl<T: Clone> Duplicate<T> for Natural {
    fn copy(&self, src: &T) -> T {
        src.clone()
    }
}

impl<T: Ord> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Debug> Render<T> for Natural {
    fn print(&self, elem: &T, sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "{elem:?}")
    }
}

/// Wraps another descriptor, inverting its comparison and leaving every other field untouched.
///
/// # Examples
/// ```
/// # use generic_containers::collections::behavior::{Natural, Reverse};
/// # use generic_containers::collections::contiguous::Vector;
/// let mut vec = Vector::with_behavior(Reverse(Natural));
/// vec.extend([3, 1, 2]);
/// vec.sort();
/// assert_eq!(&*vec, &[3, 2, 1]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse<B>(pub B);

impl<T, B: Behavior<T>> Behavior<T> for Reverse<B> {
    fn width(&self) -> usize {
        self.0.width()
    }

    fn destroy(&self, elem: T) {
        self.0.destroy(elem)
    }

    fn swap(&self, a: &mut T, b: &mut T) {
        self.0.swap(a, b)
    }
}

impl<T, B: Duplicate<T>> Duplicate<T> for Reverse<B> {
    fn copy(&self, src: &T) -> T {
        self.0.copy(src)
    }
}

impl<T, B: Compare<T>> Compare<T> for Reverse<B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T, B: Render<T>> Render<T> for Reverse<B> {
    fn print(&self, elem: &T, sink: &mut dyn fmt::Write) -> fmt::Result {
        self.0.print(elem, sink)
    }
}

/// A descriptor that compares elements by a key extracted from each of them. Copy and print behave
/// as they do for [`Natural`].
///
/// # Examples
/// ```
/// # use generic_containers::collections::behavior::ByKey;
/// # use generic_containers::collections::contiguous::Vector;
/// let mut vec = Vector::with_behavior(ByKey::new(|pair: &(u8, char)| pair.0));
/// vec.extend([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
/// vec.sort();
/// assert_eq!(&*vec, &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub struct ByKey<F, K> {
    key: F,
    _phantom: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    pub const fn new(key: F) -> ByKey<F, K> {
        ByKey {
            key,
            _phantom: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        ByKey::new(self.key.clone())
    }
}

impl<F, K> Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T, F, K> Behavior<T> for ByKey<F, K> {}

impl<T: Clone, F, K> Duplicate<T> for ByKey<F, K> {
    fn copy(&self, src: &T) -> T {
        src.clone()
    }
}

impl<T, F, K> Compare<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

impl<T: Debug, F, K> Render<T> for ByKey<F, K> {
    fn print(&self, elem: &T, sink: &mut dyn fmt::Write) -> fmt::Result {
        write!(sink, "{elem:?}")
    }
}
