//! # `meridian` - Graph Algorithms Toolkit
//!
//! Weighted graph stores with the classic algorithms run over them: traversal,
//! shortest paths, minimum spanning trees and topological ordering.
//!
//! ## Key Features
//!
//! - **Two backings, one interface**: adjacency lists and adjacency matrices
//!   both implement [`GraphView`], so every solver runs on either
//! - **Any vertex label**: labels are interned into dense [`VertexId`]s; any
//!   `Clone + Eq + Hash + Debug` type works
//! - **Any numeric weight**: integers and floats via [`Weight`]
//! - **Explicit failures**: unknown vertices, negative cycles, disconnected
//!   graphs and cycles in a DAG are reported through [`GraphError`] or an
//!   inspectable result type, never by returning silently wrong data
//! - **No recursion**: every depth-first walk uses an explicit stack
//!
//! ## Architecture
//!
//! 1. **Stores** (`graph::store`): own the vertex table and adjacency, expose
//!    `add_vertex`, `add_edge`, `has_edge`, `neighbors`.
//! 2. **Solvers** (`graph::{traversal, shortest_path, spanning_tree, topological}`):
//!    free functions over `&impl GraphView`; each call allocates its own
//!    working state and returns an owned result.
//! 3. **Collections** (`collections`): the union-find, min-queue and vertex
//!    interner the solvers are built from.
//!
//! ## Example
//!
//! ```
//! use meridian::prelude::*;
//!
//! let mut g = DiGraph::<&str, u32>::new();
//! g.add_edge("A", "B", 4);
//! g.add_edge("A", "C", 2);
//! g.add_edge("C", "B", 1);
//!
//! let paths = dijkstra(&g, &"A").unwrap();
//! assert_eq!(paths.distance(&"B"), Some(3));
//! assert_eq!(paths.path_to(&"B"), Some(vec![&"A", &"C", &"B"]));
//! ```
//!
//! ## Feature flags
//!
//! - `tracing` (default): one `debug` event per solver run
//! - `parallel`: `all_pairs_dijkstra` fans out over rayon

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{DisjointSet, MinQueue, VertexId, VertexTable};
pub use error::{GraphError, Result};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, DiGraph, DiMatrix, Directed, Edge, EdgeType, GraphDocument,
    GraphStore, GraphView, UnGraph, UnMatrix, Undirected, Weight,
};

/// Stores, traits and every solver in one import.
pub mod prelude {
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::shortest_path::{
        a_star, all_pairs_dijkstra, bellman_ford, dijkstra, floyd_warshall, AllPairsShortestPaths,
        BellmanFord, ShortestPaths,
    };
    pub use crate::graph::spanning_tree::{all_spanning_trees, kruskal, prim, SpanningTree};
    pub use crate::graph::topological::{
        all_orders, dfs_order, kahn, longest_path_lengths, TopologicalOrder,
    };
    pub use crate::graph::traversal::{
        bfs, bfs_levels, bfs_path, component_count, connected_components, dfs, has_cycle,
        has_cycle_directed, has_cycle_undirected, has_path, is_bipartite,
    };
    pub use crate::graph::{
        AdjacencyList, AdjacencyMatrix, DiGraph, DiMatrix, Directed, Edge, GraphDocument,
        GraphStore, GraphView, UnGraph, UnMatrix, Undirected, Weight,
    };
}

// Compile-time layout checks.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VertexId>>() <= 2 * mem::size_of::<usize>());
    assert!(mem::size_of::<Directed>() == 0);
    assert!(mem::size_of::<Undirected>() == 0);
};
