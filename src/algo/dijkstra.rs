use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
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

use super::{validate_weights, Path};

/// Single-source shortest distances and the predecessor of every vertex on
/// its best path. Unreachable vertices have neither.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<V: Eq + Hash, W> {
    source: V,
    vertices: Vec<V>,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<V>>,
    #[serde(skip)]
    index: HashMap<V, usize>,
}

impl<V, W> ShortestPaths<V, W>
where
    V: Clone + Eq + Hash,
    W: Weight,
{
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Minimum cost from the source, `None` when `v` is unreachable or
    /// unknown.
    pub fn distance(&self, v: &V) -> Option<W> {
        self.index.get(v).and_then(|&idx| self.distances[idx])
    }

    /// Previous vertex on the best path to `v`; `None` for the source itself.
    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.index
            .get(v)
            .and_then(|&idx| self.predecessors[idx].as_ref())
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some()
    }

    /// Best path from the source to `target`, rebuilt by following
    /// predecessors backward.
    pub fn path_to(&self, target: &V) -> Option<Path<V>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target.clone()];
        let mut cursor = target;
        while let Some(prev) = self.predecessor(cursor) {
            // predecessor chains are acyclic; bail out rather than spin if not
            if path.len() > self.vertices.len() {
                return None;
            }
            path.push(prev.clone());
            cursor = prev;
        }
        path.reverse();
        Some(Path::new(path))
    }

    /// `(vertex, distance)` for every vertex, in graph insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<W>)> {
        self.vertices.iter().zip(self.distances.iter().copied())
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    distance: W,
    vertex: usize,
}

impl<W: PartialOrd> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Candidate<W> {}

impl<W: PartialOrd> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_weight(&self.distance, &other.distance).then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Dijkstra's algorithm with lazy deletion: improved distances are pushed as
/// new heap entries and outdated entries are skipped when popped.
///
/// Equal distances pop in vertex insertion order.
///
/// # Errors
/// - [`GraphError::MissingVertex`] if `source` is not in the graph.
/// - [`GraphError::InvalidWeight`] on a negative, NaN or infinite weight.
/// - [`GraphError::WeightOverflow`] when a path length does not fit in `W`.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn shortest_paths<V, W>(
    graph: &AdjacencyList<V, W>,
    source: &V,
) -> Result<ShortestPaths<V, W>, GraphError>
where
    V: Clone + Eq + Hash + Debug,
    W: Weight,
{
    let source_idx = graph.require(source)?;
    validate_weights(graph)?;

    let (distances, predecessors) =
        dijkstra(graph, source_idx).map_err(|(from, to)| GraphError::WeightOverflow {
            from: describe(graph.vertex(from)),
            to: describe(graph.vertex(to)),
        })?;
    let vertices = graph.vertices().to_vec();
    let index = vertices
        .iter()
        .enumerate()
        .map(|(idx, v)| (v.clone(), idx))
        .collect();
    let result = ShortestPaths {
        source: source.clone(),
        predecessors: predecessors
            .into_iter()
            .map(|p| p.map(|idx| graph.vertex(idx).clone()))
            .collect(),
        vertices,
        distances,
        index,
    };
    tracing::debug!(reachable = result.reachable_count(), "dijkstra finished");
    Ok(result)
}

/// Distances and predecessors by vertex index. Fails with an overflowing
/// arc into a vertex that no representable path reaches.
fn dijkstra<G, W>(
    graph: &G,
    source: usize,
) -> Result<(Vec<Option<W>>, Vec<Option<usize>>), (usize, usize)>
where
    G: WeightedGraph<usize, W>,
    W: Weight,
{
    let mut distances: Vec<Option<W>> = vec![None; graph.vertex_count()];
    let mut predecessors: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    distances[source] = Some(W::zero());
    let mut heap = BinaryHeap::from([Reverse(Candidate {
        distance: W::zero(),
        vertex: source,
    })]);
    let mut overflowed = Vec::new();

    while let Some(Reverse(Candidate { distance, vertex })) = heap.pop() {
        let stale = distances[vertex]
            .is_some_and(|best| cmp_weight(&distance, &best) == Ordering::Greater);
        if stale {
            tracing::trace!(vertex, ?distance, "stale entry");
            continue;
        }
        for (to, weight) in graph.adjacency_weight(vertex) {
            let Some(candidate) = distance.checked_sum(weight) else {
                overflowed.push((vertex, to));
                continue;
            };
            let improves = match distances[to] {
                Some(best) => cmp_weight(&candidate, &best) == Ordering::Less,
                None => true,
            };
            if improves {
                distances[to] = Some(candidate);
                predecessors[to] = Some(vertex);
                heap.push(Reverse(Candidate {
                    distance: candidate,
                    vertex: to,
                }));
            }
        }
    }
    // a vertex reached by some representable path is unaffected
    match overflowed.into_iter().find(|&(_, to)| distances[to].is_none()) {
        Some(arc) => Err(arc),
        None => Ok((distances, predecessors)),
    }
}
