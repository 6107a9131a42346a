use std::cmp::{self, Ordering};

use super::Vector;
use crate::collections::behavior::{Behavior, Compare, Duplicate};
use crate::collections::cursor::Traverse;

impl<T, B: Behavior<T>> Vector<T, B> {
    /// Returns the index of the first element equal to `value` according to the behavior
    /// descriptor, or [`None`] if there isn't one.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3, 4, 5]);
    /// assert_eq!(vec.find(&4), Some(3));
    /// assert_eq!(vec.find(&99), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<usize>
    where
        B: Compare<T>,
    {
        self.begin().find(value).map(|cursor| cursor.index())
    }

    /// Returns true if the Vector contains an element equal to `value` according to the behavior
    /// descriptor.
    pub fn contains(&self, value: &T) -> bool
    where
        B: Compare<T>,
    {
        self.find(value).is_some()
    }

    /// Erases every element equal to `value` according to the behavior descriptor, returning how
    /// many were erased.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 1, 1, 3]);
    /// assert_eq!(vec.remove(&1), 3);
    /// assert_eq!(&*vec, &[2, 3]);
    /// ```
    pub fn remove(&mut self, value: &T) -> usize
    where
        B: Compare<T>,
    {
        let mut index = 0;
        let mut removed = 0;

        while index < self.len {
            if self.behavior.equal(&self[index], value) {
                self.erase_at(index);
                removed += 1;
            } else {
                index += 1;
            }
        }

        removed
    }

    /// Appends a copy of every element of `other`, made with this Vector's behavior descriptor.
    /// `other` is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut a = Vector::from([1, 2, 3]);
    /// let b = Vector::from([6, 7, 8]);
    /// a.merge(&b);
    /// assert_eq!(&*a, &[1, 2, 3, 6, 7, 8]);
    /// assert_eq!(&*b, &[6, 7, 8]);
    /// ```
    pub fn merge<B2: Behavior<T>>(&mut self, other: &Vector<T, B2>)
    where
        B: Duplicate<T>,
    {
        self.grow_for(other.len());

        for item in other.iter() {
            let copy = self.behavior.copy(item);
            // SAFETY: grow_for has made room for every element of other.
            unsafe { self.push_unchecked(copy) }
        }
    }

    /// Reverses the order of the elements.
    pub fn reverse(&mut self) {
        self.reverse_range(0, self.len);
    }

    /// Sorts the Vector with the behavior descriptor's comparison. See [`Vector::sort_by`].
    ///
    /// # Examples
    /// ```
    /// # use generic_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([5, 3, 4, 1, 2]);
    /// vec.sort();
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        B: Compare<T>,
    {
        // The comparison only needs the descriptor, but sort_by borrows all of self.
        let order = self.sorted_order(|behavior, a, b| behavior.compare(a, b));
        self.permute(order);
    }

    /// Sorts the Vector with the provided comparison. The sort is a stable, iterative (bottom-up)
    /// merge sort.
    ///
    /// The merge passes run over the indices of the elements, not the elements themselves, and the
    /// resulting order is then applied with the behavior descriptor's swap. If `compare` panics,
    /// the Vector is left exactly as it was.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        let order = self.sorted_order(|_, a, b| compare(a, b));
        self.permute(order);
    }

    /// Computes the stable sorted order of the elements: `order[i]` is the current index of the
    /// element that belongs at `i`.
    fn sorted_order<F>(&self, mut compare: F) -> Vector<usize>
    where
        F: FnMut(&B, &T, &T) -> Ordering,
    {
        let len = self.len;
        let mut order: Vector<usize> = (0..len).collect();
        let mut scratch: Vector<usize> = (0..len).collect();

        let mut width = 1;
        while width < len {
            let mut lo = 0;
            while lo < len {
                let mid = cmp::min(lo.saturating_add(width), len);
                let hi = cmp::min(mid.saturating_add(width), len);

                let (mut left, mut right) = (lo, mid);
                for slot in &mut scratch[lo..hi] {
                    // Only take from the right run when its head is strictly less, which keeps
                    // equal elements in their original order.
                    let take_right = left == mid || (
                        right < hi
                        && compare(&self.behavior, &self[order[right]], &self[order[left]])
                            == Ordering::Less
                    );

                    if take_right {
                        *slot = order[right];
                        right += 1;
                    } else {
                        *slot = order[left];
                        left += 1;
                    }
                }

                lo = hi;
            }

            order.swap_with(&mut scratch);
            width = width.saturating_mul(2);
        }

        order
    }

    /// Rearranges the elements so that the element currently at `order[i]` ends up at `i`, following
    /// each cycle of the permutation with exchanges.
    fn permute(&mut self, mut order: Vector<usize>) {
        for start in 0..order.len() {
            if order[start] == start {
                continue;
            }

            let mut curr = start;
            loop {
                let next = order[curr];
                order[curr] = curr;
                if next == start {
                    break;
                }
                self.exchange(curr, next);
                curr = next;
            }
        }
    }
}
