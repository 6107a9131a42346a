use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::{Behavior, Compare, Duplicate, Render};

/// A descriptor assembled from plain functions, one per field. Because every field is a function
/// pointer, a Table can be built in a `const` context and stored in a `static`, then shared by
/// reference between any number of collections.
///
/// The optional fields fall back as follows:
/// - `copy`: the element's own [`Clone`] implementation (a shallow copy for handle-like types).
/// - `destroy`: the element is simply dropped.
/// - `swap`: [`mem::swap`].
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use std::fmt::Write;
/// # use generic_containers::collections::behavior::Table;
/// # use generic_containers::collections::contiguous::Vector;
/// static BY_LENGTH: Table<String> = Table::new(
///     |a, b| a.len().cmp(&b.len()),
///     |elem, sink| write!(sink, "{elem}"),
/// );
///
/// let mut vec = Vector::with_behavior(&BY_LENGTH);
/// vec.extend(["ccc", "a", "bb"].map(String::from));
/// vec.sort();
/// assert_eq!(vec.to_string(), "[a, bb, ccc]");
/// ```
pub struct Table<T> {
    pub copy: Option<fn(&T) -> T>,
    pub destroy: Option<fn(T)>,
    pub swap: Option<fn(&mut T, &mut T)>,
    pub compare: fn(&T, &T) -> Ordering,
    pub print: fn(&T, &mut dyn fmt::Write) -> fmt::Result,
}

impl<T> Table<T> {
    /// Creates a Table with only the required fields, treating elements as plain data.
    pub const fn new(
        compare: fn(&T, &T) -> Ordering,
        print: fn(&T, &mut dyn fmt::Write) -> fmt::Result,
    ) -> Table<T> {
        Table {
            copy: None,
            destroy: None,
            swap: None,
            compare,
            print,
        }
    }

    /// Sets the deep copy operation.
    pub const fn with_copy(mut self, copy: fn(&T) -> T) -> Table<T> {
        self.copy = Some(copy);
        self
    }

    /// Sets the destroy operation.
    pub const fn with_destroy(mut self, destroy: fn(T)) -> Table<T> {
        self.destroy = Some(destroy);
        self
    }

    /// Sets the swap operation.
    pub const fn with_swap(mut self, swap: fn(&mut T, &mut T)) -> Table<T> {
        self.swap = Some(swap);
        self
    }

    /// Returns true if neither copy nor destroy are set, in which case elements are treated as
    /// plain data.
    pub const fn is_plain(&self) -> bool {
        self.copy.is_none() && self.destroy.is_none()
    }
}

impl<T> Behavior<T> for Table<T> {
    fn destroy(&self, elem: T) {
        match self.destroy {
            Some(destroy) => destroy(elem),
            None => drop(elem),
        }
    }

    fn swap(&self, a: &mut T, b: &mut T) {
        match self.swap {
            Some(swap) => swap(a, b),
            None => mem::swap(a, b),
        }
    }
}

impl<T: Clone> Duplicate<T> for Table<T> {
    fn copy(&self, src: &T) -> T {
        match self.copy {
            Some(copy) => copy(src),
            None => src.clone(),
        }
    }
}

impl<T> Compare<T> for Table<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }
}

impl<T> Render<T> for Table<T> {
    fn print(&self, elem: &T, sink: &mut dyn fmt::Write) -> fmt::Result {
        (self.print)(elem, sink)
    }
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Table<T> {}

impl<T> Debug for Table<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("width", &mem::size_of::<T>())
            .field("copy", &self.copy.is_some())
            .field("destroy", &self.destroy.is_some())
            .field("swap", &self.swap.is_some())
            .finish_non_exhaustive()
    }
}
