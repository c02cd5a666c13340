//! `MinQueue` - a min-priority queue implemented with a binary heap.
//!
//! Priorities only need `PartialOrd`, so floating-point weights work without a
//! total-order wrapper. Incomparable priorities (NaN) compare as equal.
//! Entries with equal priority pop in insertion order, which keeps every solver
//! built on this queue deterministic.

use core::cmp::Ordering;

struct Entry<P, T> {
    priority: P,
    seq: u64,
    item: T,
}

/// A min-priority queue with FIFO tie-breaking.
pub struct MinQueue<P, T> {
    data: Vec<Entry<P, T>>,
    next_seq: u64,
}

impl<P: PartialOrd, T> MinQueue<P, T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes an item with the given priority.
    pub fn push(&mut self, priority: P, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.data.push(Entry { priority, seq, item });
        self.sift_up(self.data.len() - 1);
    }

    /// Pops the item with the smallest priority.
    pub fn pop(&mut self) -> Option<(P, T)> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let entry = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((entry.priority, entry.item))
    }

    /// Returns the smallest priority and its item without removing them.
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.data.first().map(|e| (&e.priority, &e.item))
    }

    /// Clears the queue.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (ea, eb) = (&self.data[a], &self.data[b]);
        match ea.priority.partial_cmp(&eb.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => ea.seq < eb.seq,
        }
    }
}

impl<P: PartialOrd, T> Default for MinQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PartialOrd + core::fmt::Debug, T> core::fmt::Debug for MinQueue<P, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MinQueue")
            .field("len", &self.data.len())
            .field("min", &self.data.first().map(|e| &e.priority))
            .finish()
    }
}
