//! Support library for the graphwright CLI binary.
//!
//! Exposes command parsing, execution and rendering so tests can drive the
//! full pipeline in-process.

pub mod cli;
pub mod logging;
