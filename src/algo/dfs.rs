use std::{fmt::Debug, hash::Hash};

use crate::{
    error::GraphError,
    graph::{traits::Graph, AdjacencyList},
};

use super::Path;

/// Stack frame: a vertex to examine and the vertex it was reached from.
struct Frame {
    vertex: usize,
    from: Option<usize>,
}

/// Finds *a* path from `start` to `goal` with an explicit-stack depth-first
/// search. The first path reached wins; it is not necessarily the shortest.
///
/// Neighbors are pushed in adjacency order, so the last listed neighbor is
/// explored first. On a directed graph only outgoing edges are followed.
///
/// Returns `Ok(None)` when `goal` is unreachable.
///
/// # Errors
/// [`GraphError::MissingVertex`] if `start` or `goal` is not in the graph.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn find_path<V, E>(
    graph: &AdjacencyList<V, E>,
    start: &V,
    goal: &V,
) -> Result<Option<Path<V>>, GraphError>
where
    V: Clone + Eq + Hash + Debug,
    E: Copy,
{
    let start = graph.require(start)?;
    let goal = graph.require(goal)?;
    let path = search(graph, start, goal).map(|indices| {
        Path::new(
            indices
                .into_iter()
                .map(|idx| graph.vertex(idx).clone())
                .collect(),
        )
    });
    tracing::debug!(found = path.is_some(), hops = path.as_ref().map(Path::hops), "dfs finished");
    Ok(path)
}

/// Vertex indices from `start` to `goal`.
///
/// `came_from[v]` is fixed when `v` is first expanded, so following it back
/// from a frame reproduces the path that frame was pushed with.
fn search<G: Graph<usize>>(graph: &G, start: usize, goal: usize) -> Option<Vec<usize>> {
    let mut visited = vec![false; graph.vertex_count()];
    let mut came_from: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut stack = vec![Frame {
        vertex: start,
        from: None,
    }];

    while let Some(Frame { vertex, from }) = stack.pop() {
        if vertex == goal {
            let mut path = vec![vertex];
            let mut cursor = from;
            while let Some(v) = cursor {
                path.push(v);
                cursor = came_from[v];
            }
            path.reverse();
            return Some(path);
        }
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        came_from[vertex] = from;
        stack.extend(
            graph
                .adjacency(vertex)
                .filter(|n| !visited[*n])
                .map(|n| Frame {
                    vertex: n,
                    from: Some(vertex),
                }),
        );
    }
    None
}

/// Every vertex reachable from `start`, in depth-first discovery order.
///
/// # Errors
/// [`GraphError::MissingVertex`] if `start` is not in the graph.
pub fn reachable<V, E>(graph: &AdjacencyList<V, E>, start: &V) -> Result<Vec<V>, GraphError>
where
    V: Clone + Eq + Hash + Debug,
    E: Copy,
{
    let mut dfs = graph.dfs(graph.require(start)?);
    let mut found = Vec::new();
    while let Some(idx) = dfs.next(graph) {
        found.push(graph.vertex(idx).clone());
    }
    Ok(found)
}
