//! Classic graph algorithms over a small, strongly-typed adjacency-list graph:
//! greedy coloring, Prim's minimum spanning tree, depth-first path search and
//! Dijkstra's shortest paths.
//!
//! ```
//! use graph_kernels::{algo, AdjacencyList};
//!
//! let mut graph = AdjacencyList::undirected();
//! graph.add_edge(0, 1, 5u32)?;
//! graph.add_edge(1, 2, 3)?;
//!
//! let paths = algo::shortest_paths(&graph, &0)?;
//! assert_eq!(paths.distance(&2), Some(8));
//! assert_eq!(paths.path_to(&2).unwrap().vertices(), [0, 1, 2]);
//! # Ok::<(), graph_kernels::GraphError>(())
//! ```

pub mod algo;
pub mod datasets;
pub mod error;
pub mod graph;
pub mod input;
pub mod logging;
pub mod render;
pub mod report;

pub use error::{Error, GraphError, InputError, Result};
pub use graph::{AdjacencyList, GraphKind};
