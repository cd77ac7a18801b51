//! Error types for the graphwright engine.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`] or addressing one of
/// its nodes.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node index was outside `0..node_count`.
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node index.
        node: NodeId,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// An edge started and ended at the same node.
    #[error("self-loop on node {node} is not permitted")]
    SelfLoop {
        /// The node the loop was attached to.
        node: NodeId,
    },
    /// The ordered pair already carries an edge.
    #[error("edge {source_node} -> {target_node} already exists")]
    DuplicateEdge {
        /// Source endpoint of the rejected edge.
        source_node: NodeId,
        /// Target endpoint of the rejected edge.
        target_node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node index was outside `0..node_count`.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// An edge started and ended at the same node.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The ordered pair already carries an edge.
        DuplicateEdge => DuplicateEdge { .. } => "GRAPH_DUPLICATE_EDGE",
    }
}

/// Error type produced when configuring or running a
/// [`crate::GraphGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// A graph must contain at least one node.
    #[error("num_nodes must be at least 1 (got 0)")]
    NoNodes,
    /// Density must be a finite, non-negative number.
    #[error("density must be finite and non-negative (got {density})")]
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },
    /// Weight bounds must satisfy `1 <= min <= max`.
    #[error("weight range [{min}, {max}] is invalid; expected 1 <= min <= max")]
    InvalidWeightRange {
        /// Requested lower bound.
        min: u32,
        /// Requested upper bound.
        max: u32,
    },
    /// Inserting a generated edge failed.
    #[error("generated edge was rejected: {source}")]
    Graph {
        /// Underlying graph model error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// A graph must contain at least one node.
        NoNodes => NoNodes => "GENERATOR_NO_NODES",
        /// Density must be a finite, non-negative number.
        InvalidDensity => InvalidDensity { .. } => "GENERATOR_INVALID_DENSITY",
        /// Weight bounds must satisfy `1 <= min <= max`.
        InvalidWeightRange => InvalidWeightRange { .. } => "GENERATOR_INVALID_WEIGHT_RANGE",
        /// Inserting a generated edge failed.
        Graph => Graph { .. } => "GENERATOR_GRAPH",
    }
}

impl GeneratorError {
    /// Retrieve the inner [`GraphErrorCode`] when the failure came from the
    /// graph model.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
