//! Weighted edges as returned to callers.

use serde::{Deserialize, Serialize};

/// A weighted edge between two vertex labels.
///
/// For undirected graphs `source`/`target` follow the order in which the
/// endpoints were first interned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, W> {
    /// Tail of the edge.
    pub source: V,
    /// Head of the edge.
    pub target: V,
    /// Edge weight.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// Creates an edge.
    pub fn new(source: V, target: V, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<V, W> From<(V, V, W)> for Edge<V, W> {
    fn from((source, target, weight): (V, V, W)) -> Self {
        Self::new(source, target, weight)
    }
}
