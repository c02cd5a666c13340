//! `VertexTable` - an append-only interner mapping vertex labels to dense ids.
//!
//! Labels are stored once in insertion order; a hash map resolves a label back
//! to its `VertexId`. Ids are stable: nothing is ever removed, so an id handed
//! out by a table stays valid for the table's lifetime.

use core::hash::Hash;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A dense vertex index into a graph store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the underlying index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(idx: usize) -> Self {
        VertexId(idx)
    }
}

/// Label → id side table.
#[derive(Debug, Clone)]
pub struct VertexTable<V> {
    labels: Vec<V>,
    index: HashMap<V, VertexId>,
}

impl<V> VertexTable<V> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty table with room for `capacity` labels.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of interned labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no label has been interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Resolves an id to its label.
    ///
    /// # Panics
    /// Panics if `id` did not come from this table.
    #[inline]
    pub fn label(&self, id: VertexId) -> &V {
        &self.labels[id.0]
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[V] {
        &self.labels
    }

    /// Iterates `(id, label)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        self.labels.iter().enumerate().map(|(i, v)| (VertexId(i), v))
    }
}

impl<V: Eq + Hash + Clone> VertexTable<V> {
    /// Interns `label`, returning its id and whether it was newly inserted.
    pub fn insert(&mut self, label: V) -> (VertexId, bool) {
        if let Some(&id) = self.index.get(&label) {
            return (id, false);
        }
        let id = VertexId(self.labels.len());
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        (id, true)
    }

    /// Looks up the id of `label`.
    #[inline]
    pub fn get(&self, label: &V) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Returns `true` if `label` is interned.
    #[inline]
    pub fn contains(&self, label: &V) -> bool {
        self.index.contains_key(label)
    }
}

impl<V> Default for VertexTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent_and_ordered() {
        let mut table = VertexTable::new();
        let (a, fresh_a) = table.insert("a");
        let (b, fresh_b) = table.insert("b");
        let (a2, fresh_a2) = table.insert("a");

        assert!(fresh_a && fresh_b && !fresh_a2);
        assert_eq!(a, a2);
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(table.labels(), &["a", "b"]);
        assert_eq!(table.get(&"b"), Some(b));
        assert_eq!(table.get(&"z"), None);
        assert_eq!(*table.label(b), "b");
    }
}
