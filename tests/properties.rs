//! Engine results checked against brute force on small random graphs.

use std::collections::{HashSet, VecDeque};

use graph_kernels::{
    algo::{self, coloring},
    AdjacencyList,
};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const ROUNDS: u64 = 60;

fn random_graph(rng: &mut StdRng, max_vertices: usize) -> AdjacencyList<usize, u32> {
    let n = rng.gen_range(1..=max_vertices);
    let density = rng.gen_range(0.1..0.9);
    let mut graph = AdjacencyList::undirected();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for a in 0..n {
        for b in a + 1..n {
            if rng.gen_bool(density) {
                graph.add_edge(a, b, rng.gen_range(0..20)).unwrap();
            }
        }
    }
    graph
}

fn bfs_component(graph: &AdjacencyList<usize, u32>, start: usize) -> HashSet<usize> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(v) = queue.pop_front() {
        for n in graph.neighbors(&v) {
            if seen.insert(*n) {
                queue.push_back(*n);
            }
        }
    }
    seen
}

fn find(parent: &mut [usize], v: usize) -> usize {
    if parent[v] != v {
        parent[v] = find(parent, parent[v]);
    }
    parent[v]
}

/// Cheapest spanning tree of `component` by trying every edge subset.
fn brute_force_mst(graph: &AdjacencyList<usize, u32>, component: &HashSet<usize>) -> u32 {
    let edges: Vec<(usize, usize, u32)> = graph
        .edges()
        .filter(|(a, _, _)| component.contains(a))
        .map(|(a, b, w)| (*a, *b, w))
        .collect();
    let need = component.len() - 1;
    let mut best = u32::MAX;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != need {
            continue;
        }
        let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
        let mut total = 0;
        let mut acyclic = true;
        for (i, (a, b, w)) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (ra, rb) = (find(&mut parent, *a), find(&mut parent, *b));
            if ra == rb {
                acyclic = false;
                break;
            }
            parent[ra] = rb;
            total += w;
        }
        // need = |component| - 1 acyclic edges inside the component span it
        if acyclic {
            best = best.min(total);
        }
    }
    best
}

/// Cheapest simple path cost from `from` to every vertex.
fn brute_force_distances(graph: &AdjacencyList<usize, u32>, from: usize) -> Vec<Option<u32>> {
    fn walk(
        graph: &AdjacencyList<usize, u32>,
        v: usize,
        cost: u32,
        on_path: &mut Vec<bool>,
        best: &mut Vec<Option<u32>>,
    ) {
        if best[v].map_or(true, |b| cost < b) {
            best[v] = Some(cost);
        }
        on_path[v] = true;
        for (n, w) in graph.neighbors_weighted(&v) {
            if !on_path[*n] {
                walk(graph, *n, cost + w, on_path, best);
            }
        }
        on_path[v] = false;
    }
    let mut best = vec![None; graph.vertex_count()];
    walk(graph, from, 0, &mut vec![false; graph.vertex_count()], &mut best);
    best
}

#[test]
fn coloring_is_proper_and_bounded_for_any_order() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, 9);
        let mut order = coloring::natural_order(&graph);
        for _ in 0..4 {
            order.shuffle(&mut rng);
            let colors = algo::color(&graph, Some(order.as_slice())).unwrap();
            assert!(colors.is_proper(&graph), "seed {seed}");
            assert!(colors.num_colors() <= graph.max_degree() + 1, "seed {seed}");
            assert_eq!(colors.len(), graph.vertex_count());
        }
    }
}

#[test]
fn spanning_tree_is_minimal_and_spans_the_component() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, 6);
        let root = rng.gen_range(0..graph.vertex_count());
        let component = bfs_component(&graph, root);

        let tree = algo::minimum_spanning_tree(&graph, Some(&root)).unwrap();
        assert_eq!(tree.len(), component.len() - 1, "seed {seed}");
        assert_eq!(
            tree.total_weight(),
            brute_force_mst(&graph, &component),
            "seed {seed}"
        );
        for edge in tree.edges() {
            assert_eq!(graph.edge(&edge.parent, &edge.child), Some(edge.weight));
        }
    }
}

#[test]
fn dfs_finds_a_path_exactly_when_reachable() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, 10);
        let n = graph.vertex_count();
        let (start, goal) = (rng.gen_range(0..n), rng.gen_range(0..n));
        let reachable = bfs_component(&graph, start).contains(&goal);

        let path = algo::find_path(&graph, &start, &goal).unwrap();
        assert_eq!(path.is_some(), reachable, "seed {seed}");
        if let Some(path) = path {
            assert_eq!(*path.start(), start);
            assert_eq!(*path.goal(), goal);
            assert!(path.steps().all(|(a, b)| graph.has_edge(a, b)));
            let distinct: HashSet<_> = path.vertices().iter().collect();
            assert_eq!(distinct.len(), path.len());
        }
    }
}

#[test]
fn dijkstra_matches_exhaustive_search() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, 7);
        let source = rng.gen_range(0..graph.vertex_count());
        let expected = brute_force_distances(&graph, source);

        let paths = algo::shortest_paths(&graph, &source).unwrap();
        for v in 0..graph.vertex_count() {
            assert_eq!(paths.distance(&v), expected[v], "seed {seed}, vertex {v}");
            match paths.path_to(&v) {
                Some(path) => {
                    assert_eq!(*path.start(), source);
                    assert_eq!(path.cost(&graph), paths.distance(&v));
                }
                None => assert_eq!(expected[v], None),
            }
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = random_graph(&mut rng, 12);
    let last = graph.vertex_count() - 1;

    assert_eq!(algo::color(&graph, None), algo::color(&graph, None));
    assert_eq!(
        algo::minimum_spanning_tree(&graph, None),
        algo::minimum_spanning_tree(&graph, None)
    );
    assert_eq!(
        algo::find_path(&graph, &0, &last),
        algo::find_path(&graph, &0, &last)
    );
    let a = algo::shortest_paths(&graph, &0).unwrap();
    let b = algo::shortest_paths(&graph, &0).unwrap();
    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
    assert_eq!(a.path_to(&last), b.path_to(&last));
}
