use std::{
    collections::{BTreeMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use serde::Serialize;

use crate::{
    error::GraphError,
    graph::{describe, traits::Graph, AdjacencyList},
};

/// Color label per vertex. Labels start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Coloring<V: Ord> {
    colors: BTreeMap<V, usize>,
}

impl<V: Ord> Coloring<V> {
    pub fn color_of(&self, v: &V) -> Option<usize> {
        self.colors.get(v).copied()
    }

    /// Number of distinct labels used; labels are always `1..=num_colors`.
    pub fn num_colors(&self) -> usize {
        self.colors.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// `(vertex, color)` in the vertices' natural order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, usize)> {
        self.colors.iter().map(|(v, c)| (v, *c))
    }

    /// Vertices grouped by color.
    pub fn classes(&self) -> BTreeMap<usize, Vec<&V>> {
        let mut classes: BTreeMap<usize, Vec<&V>> = BTreeMap::new();
        for (v, c) in self.iter() {
            classes.entry(c).or_default().push(v);
        }
        classes
    }

    /// `true` when every vertex of `graph` is colored and no edge joins two
    /// vertices of the same color.
    pub fn is_proper<E: Copy>(&self, graph: &AdjacencyList<V, E>) -> bool
    where
        V: Clone + Hash,
    {
        graph.vertices().iter().all(|v| self.colors.contains_key(v))
            && graph
                .edges()
                .all(|(a, b, _)| self.color_of(a) != self.color_of(b))
    }
}

/// Vertices sorted by their natural ordering.
pub fn natural_order<V, E>(graph: &AdjacencyList<V, E>) -> Vec<V>
where
    V: Clone + Eq + Hash + Ord,
    E: Copy,
{
    let mut order = graph.vertices().to_vec();
    order.sort();
    order
}

/// Vertices by descending degree, ties broken by natural ordering
/// (Welsh-Powell).
pub fn largest_first_order<V, E>(graph: &AdjacencyList<V, E>) -> Vec<V>
where
    V: Clone + Eq + Hash + Ord,
    E: Copy,
{
    let mut order = natural_order(graph);
    order.sort_by_key(|v| std::cmp::Reverse(graph.degree(v)));
    order
}

/// Greedy coloring: visits vertices in `order` (natural ordering when
/// `None`) and gives each the smallest label not already used by one of its
/// colored neighbors.
///
/// The result is always proper and uses at most `max_degree + 1` labels, but
/// the label count depends on the order.
///
/// # Errors
/// - [`GraphError::Directed`] on a directed graph.
/// - [`GraphError::MissingVertex`] / [`GraphError::InvalidOrder`] when `order`
///   is not a permutation of the graph's vertices.
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), explicit_order = order.is_some()))]
pub fn color<V, E>(graph: &AdjacencyList<V, E>, order: Option<&[V]>) -> Result<Coloring<V>, GraphError>
where
    V: Clone + Eq + Hash + Ord + Debug,
    E: Copy,
{
    if graph.is_directed() {
        return Err(GraphError::Directed {
            algorithm: "greedy coloring",
        });
    }
    let order = match order {
        Some(order) => resolve_order(graph, order)?,
        None => natural_order(graph)
            .iter()
            .filter_map(|v| graph.index_of(v))
            .collect(),
    };

    let labels = greedy(graph, &order);
    let colors: BTreeMap<V, usize> = labels
        .into_iter()
        .enumerate()
        .map(|(idx, c)| (graph.vertex(idx).clone(), c))
        .collect();
    let coloring = Coloring { colors };
    tracing::debug!(colors = coloring.num_colors(), "greedy coloring finished");
    Ok(coloring)
}

fn resolve_order<V, E>(graph: &AdjacencyList<V, E>, order: &[V]) -> Result<Vec<usize>, GraphError>
where
    V: Clone + Eq + Hash + Debug,
    E: Copy,
{
    let mut seen = HashSet::with_capacity(order.len());
    let mut resolved = Vec::with_capacity(order.len());
    for v in order {
        let idx = graph.require(v)?;
        if !seen.insert(idx) {
            return Err(GraphError::InvalidOrder {
                reason: format!("{} appears more than once", describe(v)),
            });
        }
        resolved.push(idx);
    }
    if resolved.len() != graph.vertex_count() {
        return Err(GraphError::InvalidOrder {
            reason: format!(
                "{} of {} vertices listed",
                resolved.len(),
                graph.vertex_count()
            ),
        });
    }
    Ok(resolved)
}

/// Label per vertex index; 0 never appears in the output.
fn greedy<G: Graph<usize>>(graph: &G, order: &[usize]) -> Vec<usize> {
    let mut labels = vec![0; graph.vertex_count()];
    let mut taken = Vec::new();
    for &v in order {
        taken.clear();
        taken.extend(graph.adjacency(v).map(|n| labels[n]).filter(|&c| c != 0));
        taken.sort_unstable();
        taken.dedup();

        let mut label = 1;
        for &c in &taken {
            if c != label {
                break;
            }
            label += 1;
        }
        tracing::trace!(vertex = v, label, "colored");
        labels[v] = label;
    }
    labels
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GraphKind;
    use pretty_assertions::assert_eq;

    fn four_cycle() -> AdjacencyList<u32> {
        AdjacencyList::from_neighbor_lists(
            GraphKind::Undirected,
            [
                (0, vec![1, 3]),
                (1, vec![0, 2]),
                (2, vec![1, 3]),
                (3, vec![2, 0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn four_cycle_takes_two_colors() {
        let graph = four_cycle();
        let coloring = color(&graph, Some(&[0, 1, 2, 3][..])).unwrap();
        assert_eq!(
            coloring.iter().collect::<Vec<_>>(),
            [(&0, 1), (&1, 2), (&2, 1), (&3, 2)]
        );
        assert_eq!(coloring.num_colors(), 2);
        assert!(coloring.is_proper(&graph));
    }

    #[test]
    fn default_order_is_natural() {
        let graph = four_cycle();
        assert_eq!(color(&graph, None).unwrap(), color(&graph, Some(&[0, 1, 2, 3][..])).unwrap());
    }

    #[test]
    fn order_changes_label_count() {
        // path a-b-c-d: visiting the ends first forces a third color
        let graph = AdjacencyList::from_neighbor_lists(
            GraphKind::Undirected,
            [
                ('a', vec!['b']),
                ('b', vec!['a', 'c']),
                ('c', vec!['b', 'd']),
                ('d', vec!['c']),
            ],
        )
        .unwrap();
        let good = color(&graph, None).unwrap();
        let bad = color(&graph, Some(&['a', 'd', 'b', 'c'][..])).unwrap();
        assert_eq!(good.num_colors(), 2);
        assert_eq!(bad.num_colors(), 3);
        assert!(bad.is_proper(&graph));
    }

    #[test]
    fn empty_graph_gives_empty_coloring() {
        let graph: AdjacencyList<u8> = AdjacencyList::undirected();
        let coloring = color(&graph, None).unwrap();
        assert!(coloring.is_empty());
        assert_eq!(coloring.num_colors(), 0);
    }

    #[test]
    fn isolated_vertices_get_color_one() {
        let mut graph: AdjacencyList<u8> = AdjacencyList::undirected();
        graph.add_vertex(7);
        graph.add_vertex(3);
        let coloring = color(&graph, None).unwrap();
        assert_eq!(coloring.color_of(&7), Some(1));
        assert_eq!(coloring.color_of(&3), Some(1));
    }

    #[test]
    fn bad_orders_are_rejected() {
        let graph = four_cycle();
        assert_eq!(
            color(&graph, Some(&[0, 1, 2][..])),
            Err(GraphError::InvalidOrder {
                reason: "3 of 4 vertices listed".to_string()
            })
        );
        assert_eq!(
            color(&graph, Some(&[0, 1, 1, 3][..])),
            Err(GraphError::InvalidOrder {
                reason: "1 appears more than once".to_string()
            })
        );
        assert_eq!(
            color(&graph, Some(&[0, 1, 2, 9][..])),
            Err(GraphError::MissingVertex("9".to_string()))
        );
    }

    #[test]
    fn directed_graph_is_rejected() {
        let mut graph: AdjacencyList<u8> = AdjacencyList::directed();
        graph.add_edge(1, 2, ()).unwrap();
        assert!(matches!(color(&graph, None), Err(GraphError::Directed { .. })));
    }

    #[test]
    fn largest_first_starts_with_the_hub() {
        let graph = AdjacencyList::from_neighbor_lists(
            GraphKind::Undirected,
            [
                (1, vec![4]),
                (2, vec![4]),
                (3, vec![4]),
                (4, vec![1, 2, 3]),
            ],
        )
        .unwrap();
        assert_eq!(largest_first_order(&graph), [4, 1, 2, 3]);
    }

    #[test]
    fn classes_group_vertices() {
        let coloring = color(&four_cycle(), None).unwrap();
        let classes = coloring.classes();
        assert_eq!(classes[&1], [&0, &2]);
        assert_eq!(classes[&2], [&1, &3]);
    }
}
