use std::fmt::Display;
use thiserror::Error;

/// Error types for the path pricing system
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Source and target are disconnected in the original graph
    #[error("no path exists between {from} and {target}")]
    NoPath { from: String, target: String },

    /// A derived path edge is not present in the graph
    #[error("edge ({a}, {b}) is not present in the graph")]
    EdgeNotInGraph { a: String, b: String },
}

impl PricingError {
    pub(crate) fn no_path<N: Display>(source: N, target: N) -> Self {
        PricingError::NoPath {
            from: source.to_string(),
            target: target.to_string(),
        }
    }

    pub(crate) fn edge_not_in_graph<N: Display>(a: N, b: N) -> Self {
        PricingError::EdgeNotInGraph {
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

/// Result type alias for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;
