//! The four graph engines. Each one is a pure function over an
//! [`AdjacencyList`] that returns an owned result; none of them share state.

pub mod coloring;
pub mod dfs;
pub mod dijkstra;
pub mod mst;

use std::{fmt::Debug, hash::Hash};

use serde::Serialize;

use crate::{
    error::GraphError,
    graph::{
        describe,
        traits::Weight,
        AdjacencyList,
    },
};

pub use coloring::{color, Coloring};
pub use dfs::{find_path, reachable};
pub use dijkstra::{shortest_paths, ShortestPaths};
pub use mst::{minimum_spanning_tree, SpanningTree, TreeEdge};

/// A non-empty walk from its first vertex to its last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path<V>(Vec<V>);

impl<V> Path<V> {
    pub(crate) fn new(vertices: Vec<V>) -> Self {
        debug_assert!(!vertices.is_empty());
        Self(vertices)
    }

    pub fn start(&self) -> &V {
        &self.0[0]
    }

    pub fn goal(&self) -> &V {
        &self.0[self.0.len() - 1]
    }

    pub fn vertices(&self) -> &[V] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a path holds at least its start vertex.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.0.len() - 1
    }

    /// Consecutive vertex pairs.
    pub fn steps(&self) -> impl Iterator<Item = (&V, &V)> {
        self.0.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    pub fn into_vec(self) -> Vec<V> {
        self.0
    }

    /// Summed edge weights along the path, or `None` if some step is not an
    /// edge of `graph` or the sum overflows `E`.
    pub fn cost<E>(&self, graph: &AdjacencyList<V, E>) -> Option<E>
    where
        V: Clone + Eq + Hash,
        E: Weight,
    {
        self.steps()
            .try_fold(E::zero(), |acc, (a, b)| graph.edge(a, b).and_then(|w| acc.checked_sum(w)))
    }
}

/// Rejects graphs carrying a negative or incomparable weight.
pub(crate) fn validate_weights<V, W>(graph: &AdjacencyList<V, W>) -> Result<(), GraphError>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    match graph.edges().find(|(_, _, w)| !w.is_valid()) {
        Some((from, to, weight)) => Err(GraphError::InvalidWeight {
            from: describe(from),
            to: describe(to),
            weight: format!("{weight:?}"),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path_accessors() {
        let path = Path::new(vec!['a', 'b', 'c']);
        assert_eq!(*path.start(), 'a');
        assert_eq!(*path.goal(), 'c');
        assert_eq!(path.hops(), 2);
        assert_eq!(path.steps().collect::<Vec<_>>(), [(&'a', &'b'), (&'b', &'c')]);
    }

    #[test]
    fn path_cost_sums_edges() {
        let mut graph = AdjacencyList::undirected();
        graph.add_edge('a', 'b', 2.5).unwrap();
        graph.add_edge('b', 'c', 1.0).unwrap();
        assert_eq!(Path::new(vec!['a', 'b', 'c']).cost(&graph), Some(3.5));
        assert_eq!(Path::new(vec!['a', 'c']).cost(&graph), None);
    }

    #[test]
    fn path_cost_overflow_is_none() {
        let mut graph = AdjacencyList::undirected();
        graph.add_edge(0, 1, u32::MAX - 1).unwrap();
        graph.add_edge(1, 2, 5).unwrap();
        assert_eq!(Path::new(vec![0, 1]).cost(&graph), Some(u32::MAX - 1));
        assert_eq!(Path::new(vec![0, 1, 2]).cost(&graph), None);
    }

    #[test]
    fn infinite_weight_is_rejected() {
        let mut graph = AdjacencyList::undirected();
        graph.add_edge("a", "b", f64::INFINITY).unwrap();
        assert!(matches!(
            validate_weights(&graph),
            Err(GraphError::InvalidWeight { weight, .. }) if weight == "inf"
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut graph = AdjacencyList::directed();
        graph.add_edge(1, 2, 3i32).unwrap();
        graph.add_edge(2, 3, -1i32).unwrap();
        assert_eq!(
            validate_weights(&graph),
            Err(GraphError::InvalidWeight {
                from: "2".to_string(),
                to: "3".to_string(),
                weight: "-1".to_string(),
            })
        );
    }
}
