use crate::graph::{CostGraph, NodeId};
use crate::types::PricingOutput;
use std::fmt::{self, Write};

/// Render `graph` as a Graphviz DOT document with the baseline path of
/// `output` highlighted.
///
/// Path edges are drawn bold and colored against the rest of the graph, with
/// every edge labeled by its weight and the path endpoints shaded. This is a
/// downstream consumer of a finished pricing run; the pricing loop never
/// calls it and its output has no bearing on the prices. Nodes and edges are
/// emitted in sorted order so the document is deterministic for a given graph
/// and output.
pub fn render_dot<N: NodeId>(graph: &CostGraph<N>, output: &PricingOutput<N>) -> String {
    let mut dot = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_dot(&mut dot, graph, output);
    dot
}

fn write_dot<N: NodeId>(
    out: &mut impl Write,
    graph: &CostGraph<N>,
    output: &PricingOutput<N>,
) -> fmt::Result {
    writeln!(out, "graph cheapest_path {{")?;
    if let (Some(source), Some(target)) = (output.path.first(), output.path.last()) {
        writeln!(out, "    label=\"cheapest path from {source} to {target}\";")?;
    }
    writeln!(out, "    node [shape=circle];")?;

    let endpoints = [output.path.first(), output.path.last()];
    let mut nodes: Vec<N> = graph.nodes().collect();
    nodes.sort();
    for n in nodes {
        if endpoints.contains(&Some(&n)) {
            writeln!(out, "    \"{n}\" [style=filled, fillcolor=gray80];")?;
        } else {
            writeln!(out, "    \"{n}\";")?;
        }
    }

    let mut edges: Vec<(N, N, f64)> = graph.edges().collect();
    edges.sort_by(|x, y| (x.0, x.1).cmp(&(y.0, y.1)));
    for (a, b, w) in edges {
        if output.is_path_edge(a, b) {
            writeln!(
                out,
                "    \"{a}\" -- \"{b}\" [label=\"{w}\", color=green, penwidth=3];"
            )?;
        } else {
            writeln!(out, "    \"{a}\" -- \"{b}\" [label=\"{w}\"];")?;
        }
    }
    writeln!(out, "}}")
}
