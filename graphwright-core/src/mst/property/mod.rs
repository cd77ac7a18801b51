//! Property-based tests for the MST implementations.
//!
//! Verifies Kruskal against a partition-copying oracle, checks Prim against
//! Kruskal's total weight, and validates structural invariants (acyclicity,
//! connectivity, edge count) across graph topologies with varied weight
//! distributions.

mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
