//! Error taxonomy shared by every graph operation.

/// Graph algorithm error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An operation referenced a vertex that is not in the store.
    ///
    /// The payload is the `Debug` rendering of the missing label.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// A negative-weight cycle makes shortest distances undefined.
    #[error("negative cycle through {} vertices", vertices.len())]
    NegativeCycle {
        /// `Debug` renderings of the vertices on (or feeding) the cycle.
        vertices: Vec<String>,
    },

    /// A spanning computation could not reach every vertex.
    #[error("graph is disconnected: reached {reached} of {total} vertices")]
    Disconnected {
        /// Vertices covered by the partial result.
        reached: usize,
        /// Vertices in the graph.
        total: usize,
    },

    /// A topological order could not include every vertex.
    #[error("cycle detected: ordered {ordered} of {total} vertices")]
    CycleDetected {
        /// Vertices placed before the cycle blocked progress.
        ordered: usize,
        /// Vertices in the graph.
        total: usize,
    },

    /// The algorithm is only defined for undirected graphs.
    #[error("operation requires an undirected graph")]
    RequiresUndirected,

    /// The algorithm is only defined for directed graphs.
    #[error("operation requires a directed graph")]
    RequiresDirected,

    /// A total weight left the weight type's finite range.
    #[error("total weight is out of range for the weight type")]
    WeightOverflow,

    /// A serialized document disagrees with the target store's edge type.
    #[error("document directedness mismatch: expected directed={expected}, found directed={found}")]
    DirectednessMismatch {
        /// Directedness of the target store.
        expected: bool,
        /// Directedness recorded in the document.
        found: bool,
    },
}

impl GraphError {
    pub(crate) fn unknown<V: core::fmt::Debug + ?Sized>(vertex: &V) -> Self {
        GraphError::UnknownVertex(format!("{vertex:?}"))
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(GraphError::unknown("Z").to_string(), "unknown vertex: \"Z\"");
        let err = GraphError::Disconnected { reached: 2, total: 5 };
        assert_eq!(err.to_string(), "graph is disconnected: reached 2 of 5 vertices");
        let err = GraphError::NegativeCycle {
            vertices: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "negative cycle through 2 vertices");
    }
}
