//! Command-line interface orchestration for graphwright.
//!
//! `sweep` reproduces the size-by-density benchmark grid, while `dot` and
//! `matrix` print a single generated graph for external tools.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, DotCommand, DotView, GeneratorArgs, GraphArgs,
    MatrixCommand, MatrixKind, SweepCommand, SweepRow, render_output, run_cli,
};
