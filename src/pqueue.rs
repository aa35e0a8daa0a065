//! Array-backed binary min-heap priority queue.
//!
//! The queue is generic over both the element type and a caller-supplied
//! three-way comparator, so it never inspects element payloads itself.
//! The Huffman builder uses it with lightweight arena indices as elements,
//! keeping node ownership entirely outside the queue.
//!
//! # Complexity
//!
//! - `push`: amortized $O(\log n)$ (plus $O(1)$ amortized for growth).
//! - `pop_min`: $O(\log n)$.
//! - `len` / `capacity`: $O(1)$.
//!
//! # Failure Modes
//!
//! Popping an empty queue is a programmer error and panics; it is never
//! reported as a recoverable error. A comparator that is not a consistent
//! weak ordering yields an undefined (but memory-safe) heap shape.

use std::cmp::Ordering;

/// Initial backing-array capacity.
const START_CAPACITY: usize = 10;

/// A binary min-heap ordered by a caller-supplied comparator.
///
/// The backing storage starts at a small fixed capacity, doubles whenever
/// it fills, and never shrinks for the lifetime of the queue.
///
/// Ties between equal-comparing elements are broken by whatever swap
/// sequence the heap performs; callers needing determinism among equal
/// keys must encode a secondary key in the comparator.
pub struct PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    compare: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `compare`.
    ///
    /// `compare` must implement a consistent weak ordering: negative
    /// (`Less`) if the first argument sorts before the second, `Equal` for
    /// equal priority, `Greater` otherwise.
    pub fn new(compare: C) -> Self {
        Self {
            items: Vec::with_capacity(START_CAPACITY),
            compare,
        }
    }

    /// Number of elements currently in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current backing-array capacity.
    ///
    /// Monotonically non-decreasing: removal never releases storage.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Insert `element`, restoring the heap invariant by sifting it up.
    ///
    /// Doubles the backing capacity first if the array is full.
    pub fn push(&mut self, element: T) {
        if self.items.len() == self.items.capacity() {
            self.items.reserve_exact(self.items.capacity());
        }
        self.items.push(element);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. An empty pop is a precondition
    /// violation, not a recoverable condition.
    pub fn pop_min(&mut self) -> T {
        assert!(!self.items.is_empty(), "pop_min on empty priority queue");
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop().unwrap();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Move the element at `index` toward the root while it compares
    /// strictly less than its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&self.items[index], &self.items[parent]) == Ordering::Less {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `index` toward the leaves, swapping with the
    /// smaller child while that child compares strictly less.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len
                && (self.compare)(&self.items[left], &self.items[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < len
                && (self.compare)(&self.items[right], &self.items[smallest]) == Ordering::Less
            {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }

    /// Verify the heap invariant: no element compares strictly less than
    /// its parent. Used by tests.
    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (1..self.items.len()).all(|i| {
            (self.compare)(&self.items[i], &self.items[(i - 1) / 2]) != Ordering::Less
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_queue() -> PriorityQueue<i64, impl Fn(&i64, &i64) -> Ordering> {
        PriorityQueue::new(|a: &i64, b: &i64| a.cmp(b))
    }

    #[test]
    fn test_new_queue_is_empty() {
        let q = int_queue();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.capacity() >= 10);
    }

    #[test]
    fn test_push_pop_single() {
        let mut q = int_queue();
        q.push(42);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_min(), 42);
        assert!(q.is_empty());
    }

    #[test]
    fn test_sorted_drain() {
        let mut q = int_queue();
        for v in [5, 3, 8, 1, 9, 2, 7, 4, 6, 0] {
            q.push(v);
        }
        let drained: Vec<i64> = (0..10).map(|_| q.pop_min()).collect();
        assert_eq!(drained, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_size_discipline() {
        let mut q = int_queue();
        for i in 0..25 {
            q.push(i);
            assert_eq!(q.len(), (i + 1) as usize);
        }
        for i in (0..25).rev() {
            q.pop_min();
            assert_eq!(q.len(), i as usize);
        }
    }

    #[test]
    fn test_capacity_doubles_and_never_shrinks() {
        let mut q = int_queue();
        let start = q.capacity();
        assert!(start >= 10);
        for i in 0..start as i64 {
            q.push(i);
        }
        assert_eq!(q.capacity(), start);
        q.push(start as i64);
        let grown = q.capacity();
        assert!(grown >= 2 * start);
        while !q.is_empty() {
            q.pop_min();
        }
        assert_eq!(q.capacity(), grown);
    }

    #[test]
    #[should_panic(expected = "pop_min on empty priority queue")]
    fn test_pop_empty_panics() {
        let mut q = int_queue();
        q.pop_min();
    }

    #[test]
    fn test_invariant_under_mixed_ops() {
        let mut q = int_queue();
        for v in [17, 3, 3, 28, 1, 3, 99, 0, 54, 3, 12, 7] {
            q.push(v);
            assert!(q.is_valid_heap());
        }
        for _ in 0..6 {
            q.pop_min();
            assert!(q.is_valid_heap());
        }
        for v in [2, 2, 40, 1] {
            q.push(v);
            assert!(q.is_valid_heap());
        }
        let mut prev = i64::MIN;
        while !q.is_empty() {
            let v = q.pop_min();
            assert!(v >= prev);
            assert!(q.is_valid_heap());
            prev = v;
        }
    }

    #[test]
    fn test_reverse_comparator() {
        let mut q = PriorityQueue::new(|a: &i64, b: &i64| b.cmp(a));
        for v in [1, 5, 3] {
            q.push(v);
        }
        assert_eq!(q.pop_min(), 5);
        assert_eq!(q.pop_min(), 3);
        assert_eq!(q.pop_min(), 1);
    }
}
