//! Disjoint Set (Union-Find) over dense vertex indices.
//!
//! # Performance
//!
//! - Parent pointers and ranks live in two parallel `Vec`s for cache locality.
//! - Path compression and union-by-rank keep operations near constant time.

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers; a root is its own parent.
    parent: Vec<usize>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    /// Number of disjoint sets.
    sets: usize,
}

impl DisjointSet {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `n` singleton sets with ids `0..n`.
    pub fn with_singletons(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Creates a new set containing a single element.
    /// Returns the representative ID of the new set.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.sets += 1;
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id` was never created.
    pub fn find(&mut self, id: usize) -> usize {
        // 1. Find root
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // 2. Compress path
        let mut curr = id;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Unites the sets containing `a` and `b`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            core::cmp::Ordering::Less => self.parent[root_a] = root_b,
            core::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            core::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] = self.rank[root_a].saturating_add(1);
            }
        }

        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` share a representative.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSet::new();

        let a = ds.make_set();
        let b = ds.make_set();
        let c = ds.make_set();

        assert_eq!(ds.find(a), a);
        assert_eq!(ds.find(b), b);
        assert_eq!(ds.set_count(), 3);

        assert!(ds.union(a, b));
        assert_eq!(ds.find(a), ds.find(b));
        assert_ne!(ds.find(a), ds.find(c));

        assert!(ds.union(b, c));
        assert!(ds.connected(a, c));

        // Already united
        assert!(!ds.union(a, c));
        assert_eq!(ds.set_count(), 1);
    }

    #[test]
    fn long_chain_compresses_to_root() {
        let mut ds = DisjointSet::with_singletons(64);
        for i in 1..64 {
            ds.union(i - 1, i);
        }
        let root = ds.find(63);
        for i in 0..64 {
            assert_eq!(ds.find(i), root);
        }
        assert_eq!(ds.len(), 64);
        assert_eq!(ds.set_count(), 1);
    }
}
