use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    fmt::Debug,
    hash::Hash,
};

use serde::Serialize;

use crate::{
    error::GraphError,
    graph::{
        describe,
        traits::{cmp_weight, Weight, WeightedGraph},
        AdjacencyList,
    },
};

use super::validate_weights;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge<V, W> {
    pub parent: V,
    pub child: V,
    pub weight: W,
}

/// Spanning tree of the root's connected component. Edges are listed in the
/// order their child vertex joined the tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTree<V, W> {
    root: Option<V>,
    edges: Vec<TreeEdge<V, W>>,
    total: W,
}

impl<V, W: Weight> SpanningTree<V, W> {
    /// `None` only for the tree of an empty graph.
    pub fn root(&self) -> Option<&V> {
        self.root.as_ref()
    }

    pub fn edges(&self) -> &[TreeEdge<V, W>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertices covered, root included.
    pub fn vertex_count(&self) -> usize {
        match self.root {
            Some(_) => self.edges.len() + 1,
            None => 0,
        }
    }

    pub fn total_weight(&self) -> W {
        self.total
    }

    /// Whether `a -- b` is a tree edge, in either orientation.
    pub fn contains_edge(&self, a: &V, b: &V) -> bool
    where
        V: PartialEq,
    {
        self.edges.iter().any(|e| {
            (&e.parent == a && &e.child == b) || (&e.parent == b && &e.child == a)
        })
    }
}

/// A frontier candidate: `vertex` reachable from the tree through `parent`.
///
/// Ordered by weight, then vertex index, then parent (the root's `None`
/// first), so equal weights resolve the same way on every run.
#[derive(Debug, Clone, Copy)]
struct Frontier<W> {
    weight: W,
    vertex: usize,
    parent: Option<usize>,
}

impl<W: PartialOrd> PartialEq for Frontier<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Frontier<W> {}

impl<W: PartialOrd> PartialOrd for Frontier<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for Frontier<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weight(&self.weight, &other.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
            .then_with(|| self.parent.cmp(&other.parent))
    }
}

/// Prim's algorithm with a lazy frontier.
///
/// Starts from `root` (the first inserted vertex when `None`) and grows the
/// tree one cheapest frontier edge at a time. Frontier entries whose vertex
/// already joined the tree are dropped when popped instead of being updated
/// in place. On a disconnected graph only the root's component is spanned.
///
/// # Errors
/// - [`GraphError::Directed`] on a directed graph.
/// - [`GraphError::MissingVertex`] if `root` is not in the graph.
/// - [`GraphError::InvalidWeight`] on a negative, NaN or infinite weight.
/// - [`GraphError::WeightOverflow`] when the total weight does not fit in `W`.
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree<V, W>(
    graph: &AdjacencyList<V, W>,
    root: Option<&V>,
) -> Result<SpanningTree<V, W>, GraphError>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    if graph.is_directed() {
        return Err(GraphError::Directed {
            algorithm: "minimum spanning tree",
        });
    }
    validate_weights(graph)?;
    let root = match root {
        Some(root) => graph.require(root)?,
        None if graph.is_empty() => {
            return Ok(SpanningTree {
                root: None,
                edges: Vec::new(),
                total: W::zero(),
            })
        }
        None => 0,
    };

    let arcs = prim(graph, root);
    let total = arcs.iter().try_fold(W::zero(), |total, &(parent, child, weight)| {
        total
            .checked_sum(weight)
            .ok_or_else(|| GraphError::WeightOverflow {
                from: describe(graph.vertex(parent)),
                to: describe(graph.vertex(child)),
            })
    })?;
    let edges = arcs
        .into_iter()
        .map(|(parent, child, weight)| TreeEdge {
            parent: graph.vertex(parent).clone(),
            child: graph.vertex(child).clone(),
            weight,
        })
        .collect();
    let tree = SpanningTree {
        root: Some(graph.vertex(root).clone()),
        edges,
        total,
    };
    tracing::debug!(
        tree_edges = tree.len(),
        total = ?tree.total_weight(),
        "spanning tree finished"
    );
    Ok(tree)
}

fn prim<G, W>(graph: &G, root: usize) -> Vec<(usize, usize, W)>
where
    G: WeightedGraph<usize, W>,
    W: Weight,
{
    let mut in_tree = vec![false; graph.vertex_count()];
    let mut tree = Vec::new();
    let mut heap = BinaryHeap::from([Reverse(Frontier {
        weight: W::zero(),
        vertex: root,
        parent: None,
    })]);
    let mut stale = 0usize;

    while let Some(Reverse(Frontier {
        weight,
        vertex,
        parent,
    })) = heap.pop()
    {
        if in_tree[vertex] {
            stale += 1;
            continue;
        }
        in_tree[vertex] = true;
        if let Some(parent) = parent {
            tracing::trace!(from = parent, to = vertex, ?weight, "tree edge");
            tree.push((parent, vertex, weight));
        }
        heap.extend(
            graph
                .adjacency_weight(vertex)
                .filter(|(to, _)| !in_tree[*to])
                .map(|(to, weight)| {
                    Reverse(Frontier {
                        weight,
                        vertex: to,
                        parent: Some(vertex),
                    })
                }),
        );
    }
    tracing::trace!(stale, "frontier drained");
    tree
}
