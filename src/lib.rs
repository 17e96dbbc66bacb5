//! VCG-style pricing for the edges of a cheapest path
//!
//! This library prices each edge of the cheapest path between two vertices of
//! a weighted undirected graph by the marginal cost the edge imposes on the
//! system: how much the source-to-target shortest-path cost grows when that
//! edge is removed. An edge whose removal disconnects the endpoints entirely
//! is priced at a configurable finite fallback instead.

pub mod error;
pub mod graph;
pub mod pricing;
pub mod render;
pub mod types;

// Re-export main types and functions
pub use error::{PricingError, Result};
pub use graph::{CostGraph, NodeId, SuspendedEdge};
pub use pricing::{DEFAULT_FALLBACK_PRICE, PricingInput, price_cheapest_path};
pub use render::render_dot;
pub use types::{EdgePrice, PathEdge, PricingOutput};
