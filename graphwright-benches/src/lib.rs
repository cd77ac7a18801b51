//! Benchmark support crate for graphwright.
//!
//! Provides parameter types and seeded graph fixtures shared by the Criterion
//! benchmarks for the MST and shortest-path algorithms.

pub mod error;
pub mod fixtures;
pub mod params;
