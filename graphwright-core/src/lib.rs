//! Graphwright core library.
//!
//! Weighted graph model, seeded random graph generation, minimum spanning
//! trees (Kruskal, Prim), shortest paths (Dijkstra, Floyd–Warshall),
//! transitive closure and DOT serialisation. Every algorithm takes an
//! immutable [`Graph`] and returns a new value.

mod dot;
mod error;
mod generator;
mod graph;
mod mst;
mod paths;
#[cfg(test)]
mod test_utils;

pub use crate::{
    dot::to_dot,
    error::{GeneratorError, GeneratorErrorCode, GraphError, GraphErrorCode, Result},
    generator::{
        DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, GraphGenerator, GraphGeneratorBuilder, generate,
        max_density, max_edge_count,
    },
    graph::{Directedness, Edge, Graph, NodeId, Weight},
    mst::{SpanningForest, kruskal, prim},
    paths::{Distance, DistanceMatrix, ShortestPaths, dijkstra, floyd_warshall, transitive_closure},
};
