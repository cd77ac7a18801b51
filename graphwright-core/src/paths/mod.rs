//! Shortest-path and reachability algorithms.
//!
//! Distances are [`Distance`] values rather than a numeric sentinel, so an
//! unreachable pair can never be mistaken for a long path and arithmetic on
//! it cannot overflow.

mod dijkstra;
mod distance;
mod floyd_warshall;
mod matrix;

pub use self::{
    dijkstra::{ShortestPaths, dijkstra},
    distance::Distance,
    floyd_warshall::{floyd_warshall, transitive_closure},
    matrix::DistanceMatrix,
};

#[cfg(test)]
mod property;
