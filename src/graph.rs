use crate::error::{PricingError, Result};
use petgraph::algo::astar;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::EdgeRef;
use std::fmt;
use std::hash::Hash;

/// Vertex identifier usable in a [`CostGraph`].
///
/// Blanket-implemented for any copyable, orderable, hashable, printable type;
/// plain integers qualify, as do interned labels.
pub trait NodeId: Copy + Ord + Hash + fmt::Debug + fmt::Display {}

impl<T: Copy + Ord + Hash + fmt::Debug + fmt::Display> NodeId for T {}

/// Undirected weighted graph the pricer operates on.
///
/// A thin wrapper over [`petgraph::graphmap::UnGraphMap`] exposing the
/// operations the pricing loop needs: weight lookup, scoped edge removal, and
/// shortest-path queries. Weights must be non-negative for the shortest-path
/// cost model to hold.
#[derive(Debug, Clone)]
pub struct CostGraph<N: NodeId> {
    inner: UnGraphMap<N, f64>,
}

impl<N: NodeId> CostGraph<N> {
    pub fn new() -> Self {
        CostGraph {
            inner: UnGraphMap::new(),
        }
    }

    /// Build a graph from `(a, b, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight);
        }
        graph
    }

    /// Complete graph over `nodes`, every edge at `weight`.
    pub fn complete(nodes: &[N], weight: f64) -> Self {
        let mut graph = Self::new();
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                graph.add_edge(a, b, weight);
            }
        }
        graph
    }

    /// Insert or update an undirected edge, returning the previous weight.
    pub fn add_edge(&mut self, a: N, b: N, weight: f64) -> Option<f64> {
        self.inner.add_edge(a, b, weight)
    }

    /// Remove the edge between `a` and `b`, returning its weight.
    pub fn remove_edge(&mut self, a: N, b: N) -> Option<f64> {
        self.inner.remove_edge(a, b)
    }

    /// Weight of the edge between `a` and `b`, in either orientation.
    pub fn edge_weight(&self, a: N, b: N) -> Option<f64> {
        self.inner.edge_weight(a, b).copied()
    }

    pub fn contains_node(&self, n: N) -> bool {
        self.inner.contains_node(n)
    }

    pub fn contains_edge(&self, a: N, b: N) -> bool {
        self.inner.contains_edge(a, b)
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate all edges as `(a, b, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (N, N, f64)> + '_ {
        self.inner.all_edges().map(|(a, b, w)| (a, b, *w))
    }

    /// Iterate all vertices.
    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.inner.nodes()
    }

    /// Access the underlying petgraph graph (for advanced operations).
    pub fn inner(&self) -> &UnGraphMap<N, f64> {
        &self.inner
    }

    /// Mutable access to the underlying petgraph graph.
    pub fn inner_mut(&mut self) -> &mut UnGraphMap<N, f64> {
        &mut self.inner
    }

    /// Cheapest path from `source` to `target` with its total weight.
    ///
    /// Fails with [`PricingError::NoPath`] when the two vertices are
    /// disconnected.
    pub fn shortest_path(&self, source: N, target: N) -> Result<(f64, Vec<N>)> {
        astar(
            &self.inner,
            source,
            |n| n == target,
            |e| *e.weight(),
            |_| 0.0,
        )
        .ok_or_else(|| PricingError::no_path(source, target))
    }

    /// Cheapest-path cost only.
    pub fn shortest_path_cost(&self, source: N, target: N) -> Result<f64> {
        self.shortest_path(source, target).map(|(cost, _)| cost)
    }

    /// Temporarily remove the edge between `a` and `b`.
    ///
    /// The edge is reinserted with its original weight when the returned
    /// guard drops, on every exit path. Fails with
    /// [`PricingError::EdgeNotInGraph`] when no such edge exists.
    pub fn suspend_edge(&mut self, a: N, b: N) -> Result<SuspendedEdge<'_, N>> {
        let weight = self
            .inner
            .remove_edge(a, b)
            .ok_or_else(|| PricingError::edge_not_in_graph(a, b))?;
        Ok(SuspendedEdge {
            graph: self,
            a,
            b,
            weight,
        })
    }
}

impl<N: NodeId> Default for CostGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped removal of a single edge.
///
/// Holds the graph mutably for its lifetime; dropping the guard restores the
/// edge with its original weight.
#[derive(Debug)]
pub struct SuspendedEdge<'g, N: NodeId> {
    graph: &'g mut CostGraph<N>,
    a: N,
    b: N,
    weight: f64,
}

impl<N: NodeId> SuspendedEdge<'_, N> {
    /// Weight the suspended edge had in the original graph.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// View of the graph with the edge absent.
    pub fn graph(&self) -> &CostGraph<N> {
        self.graph
    }
}

impl<N: NodeId> Drop for SuspendedEdge<'_, N> {
    fn drop(&mut self) {
        self.graph.inner.add_edge(self.a, self.b, self.weight);
    }
}
