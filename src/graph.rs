pub mod traits;

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use serde::Serialize;

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Undirected,
    Directed,
}

/// Adjacency lists keyed by vertex identifier.
///
/// Vertices keep their insertion order and are addressed internally by that
/// position. Each vertex's neighbor list keeps the order in which its edges
/// were first added; algorithms whose outcome depends on iteration order
/// (greedy coloring, DFS) see exactly that order.
///
/// `E` is the edge payload: `()` for plain adjacency, a number for weighted
/// graphs.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V, E: Copy = ()> {
    kind: GraphKind,
    edges: Vec<Vec<(usize, E)>>,
    vertices: Vec<V>,
    index: HashMap<V, usize>,
}

pub(crate) fn describe<V: Debug>(v: &V) -> String {
    format!("{v:?}")
}

impl<V, E: Copy> AdjacencyList<V, E>
where
    V: Clone + Eq + Hash,
{
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            edges: Vec::new(),
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn reserved(kind: GraphKind, vertices: usize) -> Self {
        Self {
            kind,
            edges: Vec::with_capacity(vertices),
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges; an undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        let arcs: usize = self.edges.iter().map(Vec::len).sum();
        match self.kind {
            GraphKind::Directed => arcs,
            GraphKind::Undirected => arcs / 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// # Panics
    /// If `idx` is not below [`Self::vertex_count`].
    pub fn vertex(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.index.get(v).copied()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    pub(crate) fn require(&self, v: &V) -> Result<usize, GraphError>
    where
        V: Debug,
    {
        self.index_of(v)
            .ok_or_else(|| GraphError::MissingVertex(describe(v)))
    }

    /// Adds `v` if it is new and returns its index either way.
    pub fn add_vertex(&mut self, v: V) -> usize {
        if let Some(&idx) = self.index.get(&v) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(v.clone(), idx);
        self.vertices.push(v);
        self.edges.push(Vec::new());
        idx
    }

    /// Adds an edge, creating missing endpoints. Undirected graphs get both
    /// directions. Re-adding an existing edge replaces its payload.
    pub fn add_edge(&mut self, from: V, to: V, weight: E) -> Result<(), GraphError>
    where
        V: Debug,
    {
        if from == to {
            return Err(GraphError::SelfLoop(describe(&from)));
        }
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.set_arc(from, to, weight);
        if self.kind == GraphKind::Undirected {
            self.set_arc(to, from, weight);
        }
        Ok(())
    }

    fn set_arc(&mut self, from: usize, to: usize, weight: E) {
        match self.edges[from].iter_mut().find(|(t, _)| *t == to) {
            Some(slot) => slot.1 = weight,
            None => self.edges[from].push((to, weight)),
        }
    }

    /// Builds a graph from per-vertex neighbor lists, keeping every list's
    /// order as given. Keys become vertices in iteration order; neighbors that
    /// are never keys are appended after them.
    ///
    /// For undirected graphs every listed `u -> v` must be mirrored by
    /// `v -> u` with the same payload.
    pub fn from_adjacency<I, N>(kind: GraphKind, lists: I) -> Result<Self, GraphError>
    where
        V: Debug,
        E: PartialEq,
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, E)>,
    {
        let lists: Vec<(V, N)> = lists.into_iter().collect();
        let mut graph = Self::reserved(kind, lists.len());
        for (v, _) in &lists {
            graph.add_vertex(v.clone());
        }
        for (v, neighbors) in lists {
            let from = graph.add_vertex(v);
            for (n, weight) in neighbors {
                let to = graph.add_vertex(n);
                if from == to {
                    return Err(GraphError::SelfLoop(describe(graph.vertex(from))));
                }
                graph.set_arc(from, to, weight);
            }
        }
        if kind == GraphKind::Undirected {
            graph.check_symmetric()?;
        }
        Ok(graph)
    }

    fn check_symmetric(&self) -> Result<(), GraphError>
    where
        V: Debug,
        E: PartialEq,
    {
        for (from, list) in self.edges.iter().enumerate() {
            for (to, weight) in list {
                let mirrored = self.edges[*to]
                    .iter()
                    .any(|(back, w)| *back == from && w == weight);
                if !mirrored {
                    return Err(GraphError::Asymmetric {
                        from: describe(&self.vertices[from]),
                        to: describe(&self.vertices[*to]),
                    });
                }
            }
        }
        Ok(())
    }

    /// Neighbors of `v` in adjacency order; empty for an unknown vertex.
    pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.neighbors_weighted(v).map(|(n, _)| n)
    }

    pub fn neighbors_weighted<'a>(&'a self, v: &V) -> impl Iterator<Item = (&'a V, E)> + 'a {
        let list: &'a [(usize, E)] = self
            .index_of(v)
            .map(|idx| self.edges[idx].as_slice())
            .unwrap_or_default();
        list.iter().map(|(to, w)| (&self.vertices[*to], *w))
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge(from, to).is_some()
    }

    /// Payload of the edge `from -> to`, if present.
    pub fn edge(&self, from: &V, to: &V) -> Option<E> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.edges[from]
            .iter()
            .find(|(t, _)| *t == to)
            .map(|(_, w)| *w)
    }

    /// Every edge once: undirected edges are reported from their
    /// earlier-inserted endpoint.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, E)> + '_ {
        let directed = self.is_directed();
        self.edges.iter().enumerate().flat_map(move |(from, list)| {
            list.iter()
                .filter(move |(to, _)| directed || from < *to)
                .map(move |(to, w)| (&self.vertices[from], &self.vertices[*to], *w))
        })
    }

    pub fn degree(&self, v: &V) -> usize {
        self.index_of(v).map_or(0, |idx| self.edges[idx].len())
    }

    pub fn max_degree(&self) -> usize {
        self.edges.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn dfs(&self, start: usize) -> Dfs {
        let mut visited = vec![false; self.vertices.len()];
        let stack = vec![];
        let current = start;
        visited[current] = true;
        Dfs {
            visited,
            stack,
            current: Some(current),
        }
    }
}

impl<V> AdjacencyList<V, ()>
where
    V: Clone + Eq + Hash + Debug,
{
    /// [`AdjacencyList::from_adjacency`] for unweighted neighbor lists.
    pub fn from_neighbor_lists<I, N>(kind: GraphKind, lists: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        Self::from_adjacency(
            kind,
            lists
                .into_iter()
                .map(|(v, ns)| (v, ns.into_iter().map(|n| (n, ())))),
        )
    }
}

impl<V, E: Copy> traits::Graph<usize> for AdjacencyList<V, E> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn adjacency(&self, v: usize) -> impl Iterator<Item = usize> {
        self.edges[v].iter().map(|(to, _)| *to)
    }
}

impl<V, E: Copy> traits::WeightedGraph<usize, E> for AdjacencyList<V, E> {
    fn adjacency_weight(&self, v: usize) -> impl Iterator<Item = (usize, E)> {
        self.edges[v].iter().copied()
    }
}

/// Preorder depth-first walk over vertex indices. A vertex is marked when it
/// is pushed, so each one is yielded once.
pub struct Dfs {
    visited: Vec<bool>,
    stack: Vec<usize>,
    current: Option<usize>,
}

impl Dfs {
    pub fn next<G: traits::Graph<usize>>(&mut self, graph: &G) -> Option<usize> {
        self.current.map(|current| {
            self.stack
                .extend(graph.adjacency(current).filter(|to| {
                    if self.visited[*to] {
                        false
                    } else {
                        self.visited[*to] = true;
                        true
                    }
                }));
            self.current = self.stack.pop();
            current
        })
    }
}
