//! Plain-text console reports for each engine result.

use std::{
    fmt::{self, Display},
    hash::Hash,
};

use crate::{
    algo::{Coloring, Path, ShortestPaths, SpanningTree},
    graph::{traits::Weight, AdjacencyList},
};

const RULE: &str = "==================================================";

pub struct ColoringReport<'a, V: Ord, E: Copy> {
    pub graph: &'a AdjacencyList<V, E>,
    pub coloring: &'a Coloring<V>,
    pub strategy: &'a str,
}

impl<V, E> Display for ColoringReport<'_, V, E>
where
    V: Clone + Eq + Hash + Ord + Display,
    E: Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "GREEDY COLORING, {} ORDER", self.strategy.to_uppercase())?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Color assignment:")?;
        writeln!(f, "--------------------")?;
        for (v, c) in self.coloring.iter() {
            writeln!(f, "Vertex {v:>2} : color {c}")?;
        }
        writeln!(f)?;
        writeln!(f, "Colors used: {}", self.coloring.num_colors())?;
        if self.coloring.is_proper(self.graph) {
            write!(f, "The coloring is VALID.")
        } else {
            write!(f, "The coloring is INVALID.")
        }
    }
}

pub struct TreeReport<'a, V, W> {
    pub tree: &'a SpanningTree<V, W>,
}

impl<V, W> Display for TreeReport<'_, V, W>
where
    V: Display,
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "MINIMUM SPANNING TREE")?;
        writeln!(f, "{RULE}")?;
        if self.tree.is_empty() {
            writeln!(
                f,
                "No spanning tree edges: the graph is empty or the root has no neighbors."
            )?;
            return write!(f, "{RULE}");
        }
        let mut edges: Vec<_> = self.tree.edges().iter().collect();
        edges.sort_by(|a, b| crate::graph::traits::cmp_weight(&a.weight, &b.weight));
        for e in edges {
            writeln!(
                f,
                "Edge: {:<5} -- {:<5} | cost: {}",
                e.parent, e.child, e.weight
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total cost: {}", self.tree.total_weight())?;
        write!(f, "{RULE}")
    }
}

pub struct PathReport<'a, V> {
    pub start: &'a V,
    pub goal: &'a V,
    pub path: Option<&'a Path<V>>,
    /// Vertices reachable from `start`; only read when there is no path.
    pub explored: &'a [V],
}

impl<V: Display> Display for PathReport<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path {
            Some(path) => {
                writeln!(f, "Path found ({} steps).", path.hops())?;
                write!(f, "   Route: {}", Arrows(path.vertices()))
            }
            None => {
                writeln!(f, "No path from '{}' to '{}'.", self.start, self.goal)?;
                write!(
                    f,
                    "   Searched {} vertices reachable from '{}'.",
                    self.explored.len(),
                    self.start
                )
            }
        }
    }
}

pub struct RouteReport<'a, V: Eq + Hash, W> {
    pub paths: &'a ShortestPaths<V, W>,
    pub target: &'a V,
    pub unit: &'a str,
}

impl<V, W> Display for RouteReport<'_, V, W>
where
    V: Clone + Eq + Hash + Display,
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.paths.source();
        match (
            self.paths.distance(self.target),
            self.paths.path_to(self.target),
        ) {
            (Some(distance), Some(path)) => {
                writeln!(f, "Route found.")?;
                writeln!(f, "   Total distance: {distance} {}", self.unit)?;
                write!(f, "   Path: {}", Arrows(path.vertices()))
            }
            _ => write!(f, "No route from '{source}' to '{}'.", self.target),
        }
    }
}

/// `a -> b -> c`
struct Arrows<'a, V>(&'a [V]);

impl<V: Display> Display for Arrows<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
