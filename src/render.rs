//! Graphviz DOT export. Every function draws the whole graph and highlights
//! one engine result on top of it.

use std::{
    collections::HashSet,
    fmt::{Display, Write},
    hash::Hash,
};

use crate::{
    algo::{Coloring, Path, SpanningTree},
    graph::AdjacencyList,
};

/// Fill colors for color labels 1, 2, ...; labels past the end wrap around.
pub const PALETTE: [&str; 6] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD",
];

const PLAIN_NODE: &str = "#cccccc";
const PATH_COLOR: &str = "#e63946";
const START_COLOR: &str = "#52b788";
const GOAL_COLOR: &str = "#9b5de5";

/// Edge payloads that show up as edge labels.
pub trait EdgeLabel {
    fn label(&self) -> Option<String>;
}

impl EdgeLabel for () {
    fn label(&self) -> Option<String> {
        None
    }
}

macro_rules! numeric_label {
    ($($t:ty),*) => {
        $(impl EdgeLabel for $t {
            fn label(&self) -> Option<String> {
                Some(self.to_string())
            }
        })*
    };
}

numeric_label!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

/// The graph with no highlighting.
pub fn plain<V, E>(graph: &AdjacencyList<V, E>, title: &str) -> String
where
    V: Clone + Eq + Hash + Display,
    E: Copy + EdgeLabel,
{
    write_dot(graph, title, |_| node_style(PLAIN_NODE, None), |_, _| None)
}

/// Vertices filled by color class.
pub fn coloring<V, E>(graph: &AdjacencyList<V, E>, coloring: &Coloring<V>, title: &str) -> String
where
    V: Clone + Eq + Hash + Ord + Display,
    E: Copy + EdgeLabel,
{
    write_dot(
        graph,
        title,
        |v| match coloring.color_of(v) {
            Some(c) => node_style(
                PALETTE[(c - 1) % PALETTE.len()],
                Some(format!("Vertex {v}\\ncolor {c}")),
            ),
            None => node_style(PLAIN_NODE, None),
        },
        |_, _| None,
    )
}

/// Tree edges drawn bold, every other edge faded.
pub fn spanning_tree<V, E>(graph: &AdjacencyList<V, E>, tree: &SpanningTree<V, E>, title: &str) -> String
where
    V: Clone + Eq + Hash + Display,
    E: crate::graph::traits::Weight + EdgeLabel,
{
    write_dot(
        graph,
        title,
        |_| node_style(PLAIN_NODE, None),
        |a, b| {
            Some(if tree.contains_edge(a, b) {
                "color=\"black\", penwidth=3".to_string()
            } else {
                "color=\"#dddddd\", style=dashed".to_string()
            })
        },
    )
}

/// Path vertices and edges in red, the start green and the goal purple.
pub fn path<V, E>(graph: &AdjacencyList<V, E>, path: &Path<V>, title: &str) -> String
where
    V: Clone + Eq + Hash + Display,
    E: Copy + EdgeLabel,
{
    let on_path: HashSet<&V> = path.vertices().iter().collect();
    let steps: HashSet<(&V, &V)> = path.steps().flat_map(|(a, b)| [(a, b), (b, a)]).collect();
    write_dot(
        graph,
        title,
        |v| {
            if v == path.start() {
                node_style(START_COLOR, Some(format!("START: {v}")))
            } else if v == path.goal() {
                node_style(GOAL_COLOR, Some(format!("GOAL: {v}")))
            } else if on_path.contains(v) {
                node_style(PATH_COLOR, None)
            } else {
                node_style(PLAIN_NODE, None)
            }
        },
        |a, b| {
            steps
                .contains(&(a, b))
                .then(|| format!("color=\"{PATH_COLOR}\", penwidth=4"))
        },
    )
}

fn node_style(fill: &str, tooltip: Option<String>) -> String {
    let mut style = format!("style=filled, fillcolor=\"{fill}\"");
    if let Some(tooltip) = tooltip {
        let _ = write!(style, ", tooltip=\"{}\"", escape(&tooltip));
    }
    style
}

fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

fn write_dot<V, E>(
    graph: &AdjacencyList<V, E>,
    title: &str,
    node_attrs: impl Fn(&V) -> String,
    edge_attrs: impl Fn(&V, &V) -> Option<String>,
) -> String
where
    V: Clone + Eq + Hash + Display,
    E: Copy + EdgeLabel,
{
    let (keyword, arrow) = if graph.is_directed() {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{keyword} {{");
    let _ = writeln!(out, "  label=\"{}\";", escape(title));
    let _ = writeln!(out, "  labelloc=t;");
    for (idx, v) in graph.vertices().iter().enumerate() {
        let _ = writeln!(
            out,
            "  n{idx} [label=\"{}\", {}];",
            escape(&v.to_string()),
            node_attrs(v)
        );
    }
    for (a, b, weight) in graph.edges() {
        let (Some(ia), Some(ib)) = (graph.index_of(a), graph.index_of(b)) else {
            continue;
        };
        let mut attrs: Vec<String> = Vec::new();
        if let Some(label) = weight.label() {
            attrs.push(format!("label=\"{label}\""));
        }
        if let Some(extra) = edge_attrs(a, b) {
            attrs.push(extra);
        }
        if attrs.is_empty() {
            let _ = writeln!(out, "  n{ia} {arrow} n{ib};");
        } else {
            let _ = writeln!(out, "  n{ia} {arrow} n{ib} [{}];", attrs.join(", "));
        }
    }
    out.push('}');
    out.push('\n');
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::{color, find_path, minimum_spanning_tree};

    fn triangle() -> AdjacencyList<&'static str, u32> {
        let mut graph = AdjacencyList::undirected();
        graph.add_edge("a", "b", 1).unwrap();
        graph.add_edge("b", "c", 2).unwrap();
        graph.add_edge("a", "c", 5).unwrap();
        graph
    }

    #[test]
    fn plain_undirected_dot() {
        let dot = plain(&triangle(), "t");
        assert!(dot.starts_with("graph {\n"));
        assert!(dot.contains("n0 [label=\"a\""));
        assert!(dot.contains("n0 -- n1 [label=\"1\"];"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn directed_graph_uses_arrows() {
        let mut graph: AdjacencyList<u8> = AdjacencyList::directed();
        graph.add_edge(1, 2, ()).unwrap();
        let dot = plain(&graph, "d");
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("n0 -> n1;"));
    }

    #[test]
    fn coloring_fills_by_class() {
        let graph = triangle();
        let colors = color(&graph, None).unwrap();
        let dot = coloring(&graph, &colors, "c");
        assert!(dot.contains(PALETTE[0]));
        assert!(dot.contains(PALETTE[1]));
        assert!(dot.contains(PALETTE[2]));
    }

    #[test]
    fn tree_edges_are_bold() {
        let graph = triangle();
        let tree = minimum_spanning_tree(&graph, None).unwrap();
        let dot = spanning_tree(&graph, &tree, "mst");
        assert!(dot.contains("n0 -- n1 [label=\"1\", color=\"black\", penwidth=3];"));
        assert!(dot.contains("n0 -- n2 [label=\"5\", color=\"#dddddd\", style=dashed];"));
    }

    #[test]
    fn path_is_highlighted() {
        let graph = triangle();
        let route = find_path(&graph, &"a", &"b").unwrap().unwrap();
        let dot = path(&graph, &route, "p");
        assert!(dot.contains("START: a"));
        assert!(dot.contains("GOAL: b"));
        assert!(dot.contains(PATH_COLOR));
    }
}
