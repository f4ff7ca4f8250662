//! Fixed-capacity ring buffer - the storage engine behind every windowed gate
//!
//! The buffer over-allocates one slot beyond its declared capacity. That
//! spare slot lets `begin`/`end` stay plain indices: an empty buffer has
//! `begin == end`, a full buffer has `begin` exactly one slot behind `end`
//! (mod capacity + 1), and the two states never collide. The slot the
//! cursor will write next is always kept default-valued, so reading past
//! the live window surfaces a well-defined zero instead of stale data.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-capacity circular buffer with overwrite-oldest-on-full semantics.
///
/// The capacity is chosen at construction and never changes afterwards;
/// the single backing allocation happens in [`new`](RingBuffer::new) and
/// every later operation is O(1) and allocation-free.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingBuffer<T> {
    /// capacity + 1 slots; the slot at `end` is the default-valued sentinel.
    slots: Vec<T>,
    begin: usize,
    end: usize,
    len: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Create an empty buffer holding up to `capacity` elements.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be at least 1");
        Self {
            slots: vec![T::default(); capacity + 1],
            begin: 0,
            end: 0,
            len: 0,
        }
    }

    /// Append a value, evicting the oldest element if the buffer is full.
    ///
    /// Wraparound of a cursor and growth of the live window are
    /// independent events that can coincide on the same push, hence the
    /// wrap check inside each branch.
    pub fn push(&mut self, value: T) {
        let cap = self.capacity();
        self.slots[self.end] = value;

        if self.len == cap {
            // full: both cursors advance, each wrapping on its own
            if self.end == cap {
                self.end = 0;
            } else {
                self.end += 1;
            }
            if self.end == cap {
                self.begin = 0;
            } else {
                self.begin += 1;
            }
        } else if self.end == cap {
            self.end = 0;
            self.begin = 1;
        } else {
            self.end += 1;
            self.len += 1;
        }

        // the next write slot doubles as the empty-buffer sentinel
        self.slots[self.end] = T::default();
    }

    /// Reset the buffer to exactly `capacity` copies of `value`.
    pub fn fill(&mut self, value: T) {
        for _ in 0..self.capacity() {
            self.push(value);
        }
    }

    /// Oldest live element, or the default value if the buffer is empty.
    pub fn front(&self) -> T {
        self.slots[self.begin]
    }

    /// Newest live element, or the default value if the buffer is empty.
    pub fn back(&self) -> T {
        if self.end == 0 {
            self.slots[self.capacity()]
        } else {
            self.slots[self.end - 1]
        }
    }
}

impl<T> RingBuffer<T> {
    /// Number of live elements, `0..=capacity`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no element has been pushed since construction or the
    /// whole window has been consumed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Declared capacity (one less than the backing allocation).
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Element at logical index `i`, oldest first.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            Some(&self.slots[self.slot(i)])
        } else {
            None
        }
    }

    /// Iterate the live window, oldest first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            head: 0,
            tail: self.len,
        }
    }

    fn slot(&self, i: usize) -> usize {
        (self.begin + i) % self.slots.len()
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        assert!(
            i < self.len,
            "index {} out of bounds for {} live elements",
            i,
            self.len
        );
        &self.slots[self.slot(i)]
    }
}

/// Two buffers are equal iff they declare the same capacity and their
/// live windows match element-wise in traversal order.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

/// Lazy, restartable, bidirectional traversal of the live window.
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    head: usize,
    tail: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let item = &self.ring.slots[self.ring.slot(self.head)];
        self.head += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        Some(&self.ring.slots[self.ring.slot(self.tail)])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let ring: RingBuffer<i32> = RingBuffer::new(16);

        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.capacity(), 16);
        assert_eq!(ring.iter().count(), 0);
    }

    #[test]
    fn test_empty_surfaces_default() {
        let ring: RingBuffer<i32> = RingBuffer::new(4);

        assert_eq!(ring.front(), 0);
        assert_eq!(ring.back(), 0);
        assert_eq!(ring.get(0), None);
    }

    #[test]
    fn test_push_and_ends() {
        let mut ring = RingBuffer::new(16);
        ring.push(5);
        ring.push(6);

        assert_eq!(ring.len(), 2);
        assert_eq!(ring.front(), 5);
        assert_eq!(ring.back(), 6);
        assert_eq!(ring[0], 5);
        assert_eq!(ring[1], 6);
    }

    #[test]
    fn test_overwrite_oldest_when_full() {
        // after pushing capacity + k values, the live window is exactly
        // the last `capacity` values in push order
        let mut ring = RingBuffer::new(4);
        for i in 0..11 {
            ring.push(i);
            assert_eq!(ring.back(), i);
        }

        assert_eq!(ring.len(), 4);
        let live: Vec<i32> = ring.iter().copied().collect();
        assert_eq!(live, vec![7, 8, 9, 10]);
        assert_eq!(ring.front(), 7);
    }

    #[test]
    fn test_wrap_keeps_logical_order() {
        let mut ring = RingBuffer::new(3);
        for i in 0..5 {
            ring.push(i * 10);
        }

        assert_eq!(ring[0], 20);
        assert_eq!(ring[1], 30);
        assert_eq!(ring[2], 40);
    }

    #[test]
    fn test_fill_resets_contents() {
        let mut ring = RingBuffer::new(5);
        ring.push(1);
        ring.push(2);

        ring.fill(42);

        assert_eq!(ring.len(), 5);
        assert!(ring.iter().all(|&v| v == 42));
    }

    #[test]
    fn test_bidirectional_iteration() {
        let mut ring = RingBuffer::new(4);
        for i in 1..=6 {
            ring.push(i);
        }

        let forward: Vec<i32> = ring.iter().copied().collect();
        let backward: Vec<i32> = ring.iter().rev().copied().collect();

        assert_eq!(forward, vec![3, 4, 5, 6]);
        assert_eq!(backward, vec![6, 5, 4, 3]);
    }

    #[test]
    fn test_equality_by_live_sequence() {
        let mut a = RingBuffer::new(4);
        let mut b = RingBuffer::new(4);

        assert_eq!(a, b);

        // same live window reached through different cursor positions
        for i in 0..6 {
            a.push(i);
        }
        b.push(0);
        for i in 2..6 {
            b.push(i);
        }

        assert_eq!(a, b);

        b.push(99);
        assert_ne!(a, b);
    }

    #[test]
    fn test_inequality_on_capacity() {
        let mut a = RingBuffer::new(4);
        let mut b = RingBuffer::new(5);
        a.push(1);
        b.push(1);

        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_past_live_window_panics() {
        let mut ring = RingBuffer::new(4);
        ring.push(1);
        let _ = ring[1];
    }
}
