use std::cell::{Cell, RefCell};
use std::fmt::Write;
use std::iter;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::collections::behavior::{Behavior, ByKey, Duplicate, Natural, Reverse};
use crate::collections::cursor::{Position, Traverse};
use crate::error::{IndexOutOfBounds, InvertedRange, ReserveTooSmall, VectorError, ZeroCount};
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

/// A descriptor that records how often the Vector destroys and relocates elements.
#[derive(Debug, Default)]
struct Recorder {
    destroyed: Cell<usize>,
    swaps: Cell<usize>,
}

impl<T> Behavior<T> for Recorder {
    fn destroy(&self, elem: T) {
        self.destroyed.set(self.destroyed.get() + 1);
        drop(elem);
    }

    fn swap(&self, a: &mut T, b: &mut T) {
        self.swaps.set(self.swaps.get() + 1);
        std::mem::swap(a, b);
    }
}

type Shared = Rc<RefCell<i32>>;

/// A descriptor whose copy duplicates the shared cell instead of the handle.
#[derive(Debug, Default, Clone, Copy)]
struct DeepCell;

impl Behavior<Shared> for DeepCell {}

impl Duplicate<Shared> for DeepCell {
    fn copy(&self, src: &Shared) -> Shared {
        Rc::new(RefCell::new(*src.borrow()))
    }
}

#[test]
fn test_growth() {
    let mut vec = Vector::<u32>::with_cap(16);
    for i in 0..17 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 17);
    assert_eq!(vec.cap(), 32, "Pushing past capacity should double it exactly once.");

    let mut vec = Vector::new();
    let mut caps = Vector::new();
    for i in 0..9 {
        vec.push(i);
        if caps.back() != Some(&vec.cap()) {
            caps.push(vec.cap());
        }
    }
    assert_eq!(&*caps, &[1, 2, 4, 8, 16], "Growth from empty should start at 1 and double.");
}

#[test]
fn test_push_pop() {
    let mut vec = Vector::new();
    assert_eq!(vec.pop(), None);

    vec.extend(0..5);
    assert_eq!(vec.pop(), Some(4));
    vec.pop_back();
    assert_eq!(&*vec, &[0, 1, 2]);
    assert_eq!(vec.front(), Some(&0));
    assert_eq!(vec.back(), Some(&2));

    *vec.back_mut().unwrap() = 20;
    *vec.front_mut().unwrap() = 10;
    assert_eq!(&*vec, &[10, 1, 20]);

    vec.clear();
    vec.pop_back();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 8, "Clearing shouldn't release capacity.");
}

#[test]
fn test_raw_positions() {
    let mut vec: Vector<u16> = Vector::with_cap(4);
    vec.extend([1, 2]);

    // SAFETY: Both offsets stay within the allocation.
    unsafe {
        assert_eq!(vec.finish_ptr(), vec.as_ptr().add(2));
        assert_eq!(vec.storage_end_ptr(), vec.as_ptr().add(4));
    }
}

#[test]
fn test_insert_erase_at() {
    let mut vec = Vector::with_cap(8);
    vec.extend([1, 2, 3, 4, 5]);

    vec.insert_at(2, 99);
    assert_eq!(&*vec, &[1, 2, 99, 3, 4, 5]);
    assert_eq!(vec.len(), 6);

    vec.erase_at(2);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    assert_eq!(vec.len(), 5);

    vec.insert_at(5, 6);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6], "Inserting at the end should append.");
    vec.insert_at(0, 0);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6]);
    vec.erase_at(6);
    vec.erase_at(0);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
}

#[test]
fn test_indexed_errors() {
    let mut vec = Vector::from([1, 2, 3]);

    assert_eq!(vec.try_insert_at(4, 9), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(vec.try_erase_at(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(vec.try_replace_at(3, 9), Err(IndexOutOfBounds { index: 3, len: 3 }));

    vec.insert_at(10, 9);
    vec.erase_at(10);
    vec.replace_at(10, 9);
    assert_eq!(&*vec, &[1, 2, 3], "Out of bounds edits should leave the Vector unchanged.");

    assert_eq!(vec.try_replace_at(1, 20), Ok(2));
    vec.replace_at(2, 30);
    assert_eq!(&*vec, &[1, 20, 30]);

    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let _ = vec[3];
    });
    assert_panics!({
        let mut vec = Vector::from([1, 2, 3]);
        vec.swap_at(0, 3);
    });
}

#[test]
fn test_insert_by_position() {
    let mut vec = Vector::from([1, 5]);

    let pos = vec.insert(Position::new(1), 2);
    assert_eq!(pos, Position::new(1));
    let pos = vec.insert_n(vec.end().position(), 2, 6);
    assert_eq!(pos, Position::new(3));
    assert_eq!(&*vec, &[1, 2, 5, 6, 6]);

    vec.insert_range(Position::new(2), [3, 4]);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6, 6]);

    assert_eq!(vec.try_insert_n(Position::new(0), 0, 100), Err(ZeroCount));
    assert_eq!(vec.insert_n(Position::new(1), 0, 100), Position::new(1));
    vec.insert_range(Position::new(0), iter::empty());
    assert_eq!(vec.len(), 7, "Inserting nothing should be a no-op.");

    vec.insert_n(Position::new(0), 1, 0);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5, 6, 6]);
}

#[test]
fn test_insert_past_end_appends() {
    let mut vec = Vector::from([1, 2, 3]);

    assert_eq!(vec.insert(Position::new(7), 4), Position::new(3));
    assert_eq!(vec.try_insert_n(Position::new(9), 2, 5), Ok(Position::new(4)));
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 5]);
    assert_eq!(vec.insert_range(Position::new(50), [6, 7]), Position::new(6));
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 5, 6, 7]);

    let stale = vec.end().position();
    vec.truncate(2);
    assert_eq!(vec.insert(stale, 8), Position::new(2), "A stale position should append.");
    assert_eq!(&*vec, &[1, 2, 8]);

    assert_eq!(vec.try_insert_at(4, 9), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(&*vec, &[1, 2, 8], "Indexed inserts should still refuse to go past the end.");
}

#[test]
fn test_insert_many_before_few() {
    let mut vec = Vector::from(['z']);
    vec.insert_range(Position::new(0), "abcdef".chars());
    assert_eq!(
        &*vec,
        &['a', 'b', 'c', 'd', 'e', 'f', 'z'],
        "Inserting more elements than follow the position should keep their order."
    );
}

#[test]
fn test_erase_by_position() {
    let mut vec: Vector<_> = (0..8).collect();

    assert_eq!(vec.erase(Position::new(2)), Position::new(2));
    assert_eq!(&*vec, &[0, 1, 3, 4, 5, 6, 7]);

    vec.erase(vec.end().prev().position());
    assert_eq!(&*vec, &[0, 1, 3, 4, 5, 6]);

    vec.erase_range(Position::new(1), Position::new(3));
    assert_eq!(&*vec, &[0, 4, 5, 6]);

    vec.erase_range(Position::new(2), vec.end().position());
    assert_eq!(&*vec, &[0, 4]);

    vec.erase_range(Position::new(1), Position::new(1));
    assert_eq!(&*vec, &[0, 4], "An empty range should erase nothing.");

    assert_eq!(
        vec.try_erase_range(Position::new(2), Position::new(1)),
        Err(VectorError::InvertedRange(InvertedRange { start: 2, end: 1 }))
    );
    let err = vec.try_erase_range(Position::new(0), Position::new(3)).unwrap_err();
    assert!(err.is_index_out_of_bounds());
    assert_eq!(vec.try_erase(vec.end().position()), Err(IndexOutOfBounds { index: 2, len: 2 }));
    assert_eq!(vec.erase(Position::new(5)), Position::new(5));
    assert_eq!(&*vec, &[0, 4]);
}

#[test]
fn test_take_at_and_remove() {
    let mut vec = Vector::from([3, 1, 3, 2, 3]);

    assert_eq!(vec.take_at(1), Some(1));
    assert_eq!(vec.take_at(9), None);
    assert_eq!(vec.remove(&3), 3);
    assert_eq!(&*vec, &[2]);
    assert_eq!(vec.remove(&3), 0);

    let mut vec: Vector<_> = (0..10).collect();
    assert_eq!(vec.remove_if(|value| value % 3 == 0), 4);
    assert_eq!(&*vec, &[1, 2, 4, 5, 7, 8]);
}

#[test]
fn test_destroy_through_descriptor() {
    let recorder = Recorder::default();

    {
        let mut vec = Vector::with_behavior(&recorder);
        vec.extend(0..10);

        vec.pop_back();
        vec.erase_at(0);
        vec.erase_range(Position::new(0), Position::new(2));
        vec.replace_at(0, 100);
        assert_eq!(vec.remove_if(|value| *value == 100), 1);
        assert_eq!(vec.pop(), Some(8), "Popping should hand the element back, not destroy it.");
        assert_eq!(recorder.destroyed.get(), 6);

        vec.adjust_cap(2);
        assert_eq!(&*vec, &[4, 5]);
        assert_eq!(recorder.destroyed.get(), 8);
        assert_eq!(vec.cap(), 2);
    }

    assert_eq!(recorder.destroyed.get(), 10, "Dropping the Vector should destroy the rest.");
}

#[test]
fn test_relocation_uses_swap() {
    let recorder = Recorder::default();
    let mut vec = Vector::with_behavior(&recorder);
    vec.extend(0..5);

    vec.insert(Position::new(0), 10);
    assert_eq!(recorder.swaps.get(), 5, "Inserting at the front should carry past every element.");
    assert_eq!(&*vec, &[10, 0, 1, 2, 3, 4]);

    vec.push(5);
    assert_eq!(recorder.swaps.get(), 5, "Appending shouldn't relocate anything.");

    vec.reverse();
    assert_eq!(&*vec, &[5, 4, 3, 2, 1, 0, 10]);
    assert_eq!(recorder.swaps.get(), 8);

    vec.swap_at(0, 6);
    assert_eq!(recorder.swaps.get(), 9);
    assert_eq!(vec.front(), Some(&10));
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(vec);
    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new();
    let mut vec: Vector<_> = (0..10).map(|i| counter.with_value(i)).collect();
    vec.adjust_cap(4);
    assert_eq!(counter.drops(), 6, "Shrinking should drop the elements that no longer fit.");
    vec.resize(2, counter.with_value(-1));
    assert_eq!(counter.drops(), 9, "Resizing down should drop the fill value too.");
    vec.resize(5, counter.with_value(-1));
    assert_eq!(vec.iter().map(|item| item.value).collect::<Vector<_>>(), Vector::from([0, 1, -1, -1, -1]));
    assert_eq!(counter.drops(), 9, "Resizing up should move the fill value in.");

    let mut iter = vec.into_iter();
    assert_eq!(iter.next().map(|item| item.value), Some(0));
    assert_eq!(counter.drops(), 10);
    drop(iter);
    assert_eq!(counter.drops(), 14, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_reserve() {
    let mut vec: Vector<u64> = Vector::with_cap(4);
    assert_eq!(vec.try_reserve(4), Err(ReserveTooSmall { requested: 4, cap: 4 }));
    vec.reserve(2);
    assert_eq!(vec.cap(), 4, "A reserve below capacity should be ignored.");

    vec.reserve(10);
    assert_eq!(vec.cap(), 10, "A reserve should set the capacity exactly.");

    vec.extend([1, 2, 3]);
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
    assert_eq!(&*vec, &[1, 2, 3]);

    assert_panics!({
        let mut vec: Vector<u64> = Vector::new();
        vec.reserve(usize::MAX);
    });
    assert_panics!({
        let mut vec: Vector<u64> = Vector::new();
        vec.reserve(isize::MAX as usize);
    });
}

#[test]
fn test_assign() {
    let mut vec = Vector::from([1, 2, 3]);

    vec.assign_fill(2, 7);
    assert_eq!(&*vec, &[7, 7]);
    vec.assign_fill(0, 7);
    assert!(vec.is_empty());

    vec.assign_range(4..7);
    assert_eq!(&*vec, &[4, 5, 6]);

    let vec = Vector::from_elem(String::from("ab"), 3);
    assert_eq!(vec.len(), 3);
    assert!(vec.iter().all(|item| item == "ab"));

    let vec = Vector::from_slice(&[1, 2]);
    assert_eq!(&*vec, &[1, 2]);
}

#[test]
fn test_merge() {
    let mut a = Vector::from([1, 2, 3]);
    let b = Vector::from([6, 7, 8]);

    a.merge(&b);
    assert_eq!(&*a, &[1, 2, 3, 6, 7, 8]);
    assert_eq!(&*b, &[6, 7, 8]);

    let mut reversed = Vector::with_behavior(Reverse(Natural));
    reversed.merge(&a);
    assert_eq!(reversed, a, "Merging should work across descriptors.");
}

#[test]
fn test_find() {
    let vec = Vector::from([1, 2, 3, 4, 5]);
    assert_eq!(vec.find(&4), Some(3));
    assert_eq!(vec.find(&99), None);
    assert!(vec.contains(&1));
    assert!(!vec.contains(&0));

    let mut by_len = Vector::with_behavior(ByKey::new(|s: &&str| s.len()));
    by_len.extend(["a", "bcd", "ef"]);
    assert_eq!(by_len.find(&"xyz"), Some(1), "Search should use the descriptor's comparison.");
}

#[test]
fn test_sort() {
    let mut vec = Vector::from([5, 2, 9, 1, 5, 6, 0, 3]);
    vec.sort();
    assert_eq!(&*vec, &[0, 1, 2, 3, 5, 5, 6, 9]);

    vec.sort_by(|a, b| b.cmp(a));
    assert_eq!(&*vec, &[9, 6, 5, 5, 3, 2, 1, 0]);

    let mut vec = Vector::with_behavior(Reverse(Natural));
    vec.extend(["b", "c", "a"]);
    vec.sort();
    assert_eq!(&*vec, &["c", "b", "a"]);

    let mut empty: Vector<i32> = Vector::new();
    empty.sort();
    assert!(empty.is_empty());
}

#[test]
fn test_sort_is_stable() {
    let mut vec = Vector::with_behavior(ByKey::new(|pair: &(u8, usize)| pair.0));
    vec.extend([3, 1, 2, 1, 3, 2, 1].into_iter().enumerate().map(|(tag, key)| (key, tag)));
    vec.sort();

    assert_eq!(
        &*vec,
        &[(1, 1), (1, 3), (1, 6), (2, 2), (2, 5), (3, 0), (3, 4)],
        "Equal keys should keep their original order."
    );
}

#[test]
fn test_sort_panic_leaves_vector_unchanged() {
    let mut vec = Vector::from([4, 3, 2, 1]);
    let mut calls = 0;

    assert_panics!({
        vec.sort_by(|a, b| {
            calls += 1;
            if calls > 2 {
                panic!("comparison failed");
            }
            a.cmp(b)
        });
    });

    assert_eq!(&*vec, &[4, 3, 2, 1]);
}

#[test]
fn test_reverse() {
    let mut vec: Vector<_> = (0..5).collect();
    vec.reverse();
    assert_eq!(&*vec, &[4, 3, 2, 1, 0]);

    let mut vec: Vector<_> = (0..4).collect();
    vec.reverse();
    assert_eq!(&*vec, &[3, 2, 1, 0]);
}

#[test]
fn test_deep_and_shallow_copy() {
    let mut deep = Vector::with_behavior(DeepCell);
    deep.push(Rc::new(RefCell::new(1)));
    let deep_copy = deep.clone();
    *deep[0].borrow_mut() = 5;
    assert_eq!(*deep_copy[0].borrow(), 1, "A deep copy shouldn't alias the source.");

    let mut shallow: Vector<Shared> = Vector::new();
    shallow.push(Rc::new(RefCell::new(1)));
    let shallow_copy = shallow.clone();
    *shallow[0].borrow_mut() = 5;
    assert_eq!(*shallow_copy[0].borrow(), 5, "Natural copies share the cell.");

    let mut merged = Vector::with_behavior(DeepCell);
    merged.merge(&shallow);
    *shallow[0].borrow_mut() = 6;
    assert_eq!(*merged[0].borrow(), 5, "Merging should copy with the receiving descriptor.");

    let filled = {
        let mut vec = Vector::with_behavior(DeepCell);
        vec.assign_fill(2, Rc::new(RefCell::new(0)));
        vec
    };
    *filled[0].borrow_mut() = 1;
    assert_eq!(*filled[1].borrow(), 0, "Fill copies should be independent.");
}

#[test]
fn test_take_and_swap() {
    let mut src = Vector::from([1, 2, 3]);
    let cap = src.cap();
    let dst = src.take();

    assert_eq!(&*dst, &[1, 2, 3]);
    assert_eq!(dst.cap(), cap);
    assert!(src.is_empty());
    assert_eq!(src.cap(), 0);

    let mut a = Vector::from([1]);
    let mut b = Vector::from([2, 3]);
    a.swap_with(&mut b);
    assert_eq!(&*a, &[2, 3]);
    assert_eq!(&*b, &[1]);
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 10);
    assert_eq!(vec.max_len(), usize::MAX);

    vec.insert_at(3, ZeroSizedType);
    vec.erase_range(Position::new(0), Position::new(4));
    vec.sort();
    assert_eq!(vec.len(), 7);
    assert_eq!(vec.into_iter().count(), 7);
}

#[test]
fn test_formatting() {
    let vec = Vector::from(["a", "b"]);
    assert_eq!(vec.to_string(), "[\"a\", \"b\"]");
    assert_eq!(format!("{vec:?}"), "Vector { contents: [\"a\", \"b\"], len: 2, cap: 2 }");

    let mut out = String::from("> ");
    Vector::<u8>::new().write_to(&mut out).unwrap();
    assert_eq!(out, "> []");
}

#[test]
fn test_traversal() {
    let vec = Vector::from([1, 2, 3]);
    let sum: i32 = vec.begin().iter().sum();
    assert_eq!(sum, 6);
    assert_eq!(vec.slot_count(), 3);
    assert_eq!(vec.slot(3), None);

    let mut doubled = Vector::new();
    for item in &vec {
        doubled.push(item * 2);
    }
    for item in &mut doubled {
        *item += 1;
    }
    assert_eq!(&*doubled, &[3, 5, 7]);
}

fn arb_items() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

proptest! {
    #[test]
    fn push_pop_tracks_net_count(initial_cap in 0usize..8, pushes in 0usize..100, pops in 0usize..100) {
        let mut vec = Vector::with_cap(initial_cap);
        let mut caps = Vector::new();

        for i in 0..pushes {
            vec.push(i);
            prop_assert!(vec.cap() >= vec.len());
            caps.push(vec.cap());
        }
        for _ in 0..pops {
            vec.pop_back();
        }

        prop_assert_eq!(vec.len(), pushes.saturating_sub(pops));

        let base = initial_cap.max(1);
        for cap in caps.iter().filter(|cap| **cap > initial_cap) {
            prop_assert_eq!(cap % base, 0);
            prop_assert!((cap / base).is_power_of_two());
        }
    }

    #[test]
    fn insert_then_erase_restores(items in arb_items(), index in 0usize..41, value in any::<i32>()) {
        let index = index % (items.len() + 1);
        let mut vec: Vector<_> = items.iter().copied().collect();

        vec.insert_at(index, value);
        prop_assert_eq!(vec[index], value);
        vec.erase_at(index);

        prop_assert_eq!(&*vec, &items[..]);
    }

    #[test]
    fn insert_range_matches_splice(items in arb_items(), extra in arb_items(), index in 0usize..41) {
        let index = index % (items.len() + 1);
        let mut vec: Vector<_> = items.iter().copied().collect();
        vec.insert_range(Position::new(index), extra.iter().copied());

        let mut expected = items[..index].to_vec();
        expected.extend(&extra);
        expected.extend(&items[index..]);
        prop_assert_eq!(&*vec, &expected[..]);

        vec.erase_range(Position::new(index), Position::new(index + extra.len()));
        prop_assert_eq!(&*vec, &items[..]);
    }

    #[test]
    fn reverse_is_an_involution(items in arb_items()) {
        let mut vec: Vector<_> = items.iter().copied().collect();
        vec.reverse();
        vec.reverse();
        prop_assert_eq!(&*vec, &items[..]);
    }

    #[test]
    fn sort_matches_std_and_is_idempotent(items in arb_items()) {
        let mut vec: Vector<_> = items.iter().copied().collect();
        vec.sort();

        let mut expected = items.clone();
        expected.sort();
        prop_assert_eq!(&*vec, &expected[..]);

        vec.sort();
        prop_assert_eq!(&*vec, &expected[..]);
    }

    #[test]
    fn find_returns_first_match(items in arb_items(), value in -50i32..50) {
        let vec: Vector<_> = items.iter().copied().collect();
        prop_assert_eq!(vec.find(&value), items.iter().position(|item| *item == value));
    }
}

#[test]
fn test_write_into_any_sink() {
    struct Counter(usize);

    impl Write for Counter {
        fn write_str(&mut self, s: &str) -> std::fmt::Result {
            self.0 += s.len();
            Ok(())
        }
    }

    let mut counter = Counter(0);
    Vector::from([10, 200]).write_to(&mut counter).unwrap();
    assert_eq!(counter.0, "[10, 200]".len());
}
