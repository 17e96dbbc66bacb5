use crate::error::{PricingError, Result};
use crate::graph::{CostGraph, NodeId};
use crate::types::{EdgePrice, PathEdge, PricingOutput};

/// Price applied to a path edge whose removal disconnects source from target.
///
/// A finite stand-in for an unbounded marginal price. The value is a
/// convention, not a computed bound; pick it larger than any finite marginal
/// price expected at the domain's weight scale, and override it per call via
/// [`PricingInput::fallback_price`].
pub const DEFAULT_FALLBACK_PRICE: f64 = 77.7;

/// Input parameters for a single pricing run.
///
/// The graph is borrowed mutably because individual edges are suspended
/// during counterfactual queries; it is fully restored before
/// [`compute`](PricingInput::compute) returns.
#[derive(Debug)]
pub struct PricingInput<'a, N: NodeId> {
    pub graph: &'a mut CostGraph<N>,
    pub source: N,
    pub target: N,
    /// Sentinel recorded for an edge with no alternative path; defaults to
    /// [`DEFAULT_FALLBACK_PRICE`].
    pub fallback_price: f64,
}

impl<'a, N: NodeId> PricingInput<'a, N> {
    pub fn new(graph: &'a mut CostGraph<N>, source: N, target: N) -> Self {
        PricingInput {
            graph,
            source,
            target,
            fallback_price: DEFAULT_FALLBACK_PRICE,
        }
    }

    /// Compute a marginal price for every edge of the cheapest
    /// `source` → `target` path.
    ///
    /// Each path edge is priced by how much the cheapest detour exceeds the
    /// cost the rest of the path already bears: with the edge suspended,
    /// `price = detour_cost - (baseline_cost - edge_weight)`. An edge whose
    /// removal leaves no path at all is priced at `fallback_price` instead.
    ///
    /// Fails with [`PricingError::NoPath`] when source and target are
    /// disconnected in the original graph; no partial result is produced.
    pub fn compute(self) -> Result<PricingOutput<N>> {
        let PricingInput {
            graph,
            source,
            target,
            fallback_price,
        } = self;

        let (baseline_cost, path) = graph.shortest_path(source, target)?;

        let mut prices = Vec::with_capacity(path.len().saturating_sub(1));
        let mut total = 0.0;

        // Consecutive vertex pairs only; the closing pair back to the source
        // is not part of the path, and a single-vertex path prices nothing.
        for pair in path.windows(2) {
            let edge = PathEdge::new(pair[0], pair[1]);

            // A pair the baseline path produced must exist in the graph;
            // surfacing EdgeNotInGraph here signals a defect upstream.
            let suspended = graph.suspend_edge(edge.a, edge.b)?;
            let weight = suspended.weight();
            // Cost the rest of the path would bear if this edge were free.
            let remainder = baseline_cost - weight;

            let detour = suspended.graph().shortest_path_cost(source, target);
            drop(suspended);

            let (price, no_alternative) = match detour {
                Ok(detour_cost) => (detour_cost - remainder, false),
                Err(PricingError::NoPath { .. }) => (fallback_price, true),
                Err(e) => return Err(e),
            };

            if no_alternative {
                log::info!("edge {edge} has no alternative path, pricing at fallback {price}");
            } else {
                log::info!("edge {edge} priced at {price}");
            }

            total += price;
            prices.push(EdgePrice {
                edge,
                weight,
                price,
                no_alternative,
            });
        }

        log::info!("priced {} edges, total {total:.1}", prices.len());

        Ok(PricingOutput {
            path,
            baseline_cost,
            prices,
            total,
        })
    }
}

/// Price the cheapest `source` → `target` path with the default fallback.
///
/// # Examples
///
/// ```
/// use vcg_pricing::{CostGraph, price_cheapest_path};
///
/// let mut graph = CostGraph::from_edges([
///     (1, 2, 3.0),
///     (2, 3, 1.0),
///     (3, 4, 1.0),
///     (2, 4, 4.0),
///     (1, 4, 10.0),
///     (1, 3, 5.0),
/// ]);
/// let output = price_cheapest_path(&mut graph, 1, 4)?;
///
/// assert_eq!(output.path, vec![1, 2, 3, 4]);
/// assert_eq!(output.price_of(1, 2), Some(4.0));
/// assert_eq!(output.price_of(2, 3), Some(2.0));
/// assert_eq!(output.price_of(3, 4), Some(3.0));
/// assert_eq!(output.total, 9.0);
/// # Ok::<(), vcg_pricing::PricingError>(())
/// ```
pub fn price_cheapest_path<N: NodeId>(
    graph: &mut CostGraph<N>,
    source: N,
    target: N,
) -> Result<PricingOutput<N>> {
    PricingInput::new(graph, source, target).compute()
}
