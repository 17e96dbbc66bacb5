use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unordered pair of adjacent vertices on a priced path.
///
/// Field order preserves the traversal orientation for display purposes;
/// equality is endpoint-symmetric, so `(u, v)` and `(v, u)` denote the same
/// edge.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathEdge<N> {
    pub a: N,
    pub b: N,
}

impl<N> PathEdge<N> {
    pub fn new(a: N, b: N) -> Self {
        PathEdge { a, b }
    }
}

impl<N: PartialEq + Copy> PathEdge<N> {
    /// True if this edge joins `u` and `v`, in either orientation.
    pub fn connects(&self, u: N, v: N) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }
}

impl<N: PartialEq> PartialEq for PathEdge<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<N: Eq> Eq for PathEdge<N> {}

impl<N: Display> Display for PathEdge<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// A priced edge of the baseline path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgePrice<N> {
    pub edge: PathEdge<N>,
    /// Weight of the edge in the original graph, captured before removal.
    pub weight: f64,
    /// Marginal price charged to this edge.
    pub price: f64,
    /// Whether the fallback sentinel was applied because removing the edge
    /// disconnects source from target.
    pub no_alternative: bool,
}

/// Result of pricing the cheapest path between two vertices.
///
/// `prices` is the price map: one entry per baseline path edge, in
/// path-traversal order. Edges absent from it implicitly price at zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingOutput<N> {
    /// Baseline cheapest path, source first.
    pub path: Vec<N>,
    /// Total weight of the baseline path.
    pub baseline_cost: f64,
    /// Per-edge prices in path-traversal order.
    pub prices: Vec<EdgePrice<N>>,
    /// Sum of all per-edge prices.
    pub total: f64,
}

impl<N: PartialEq + Copy> PricingOutput<N> {
    /// Price of the edge joining `u` and `v`, in either orientation.
    ///
    /// `None` for edges off the baseline path; their price is zero.
    pub fn price_of(&self, u: N, v: N) -> Option<f64> {
        self.prices
            .iter()
            .find(|ep| ep.edge.connects(u, v))
            .map(|ep| ep.price)
    }

    /// Whether the edge joining `u` and `v` lies on the baseline path.
    pub fn is_path_edge(&self, u: N, v: N) -> bool {
        self.prices.iter().any(|ep| ep.edge.connects(u, v))
    }

    /// Number of priced edges.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the baseline path has no edges to price.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<N: Display> Display for PricingOutput<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for ep in &self.prices {
            if ep.no_alternative {
                writeln!(
                    f,
                    "price of edge {}: {} (no alternative path without this edge)",
                    ep.edge, ep.price
                )?;
            } else {
                writeln!(f, "price of edge {}: {}", ep.edge, ep.price)?;
            }
        }
        writeln!(f, "all other edges price at 0")?;
        write!(f, "total price: {:.1}", self.total)
    }
}
