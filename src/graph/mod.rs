//! Graph stores and the solvers that run over them.
//!
//! Modules are organized into categories:
//! - `store`: adjacency-list and adjacency-matrix backings plus the document form
//! - `traversal`: DFS, BFS, cycle detection, components, bipartiteness
//! - `shortest_path`: Dijkstra, Bellman-Ford, Floyd-Warshall, A*
//! - `spanning_tree`: Kruskal, Prim and exhaustive enumeration
//! - `topological`: Kahn's algorithm and DFS ordering
//!
//! Every solver is a free function generic over [`GraphView`], holds its working
//! state locally and never mutates the graph.

pub mod edge;
pub mod edge_type;
pub mod shortest_path;
pub mod spanning_tree;
pub mod store;
pub mod topological;
pub mod traversal;
pub mod view;
pub mod weight;

pub use edge::Edge;
pub use edge_type::{Directed, EdgeType, Undirected};
pub use shortest_path::{
    a_star, all_pairs_dijkstra, bellman_ford, dijkstra, floyd_warshall, AllPairsShortestPaths,
    BellmanFord, ShortestPaths,
};
pub use spanning_tree::{all_spanning_trees, kruskal, prim, SpanningTree};
pub use store::{
    AdjacencyList, AdjacencyMatrix, DiGraph, DiMatrix, GraphDocument, UnGraph, UnMatrix,
};
pub use topological::{all_orders, dfs_order, kahn, longest_path_lengths, TopologicalOrder};
pub use traversal::{
    bfs, bfs_levels, bfs_path, component_count, connected_components, dfs, has_cycle,
    has_cycle_directed, has_cycle_undirected, has_path, is_bipartite, Bfs, Dfs,
};
pub use view::{GraphStore, GraphView, VertexIds};
pub use weight::Weight;
