//! Command-line interface orchestration for blobfish.
//!
//! The CLI offers a `detect` command that thresholds an image against a
//! target colour, runs the blob detector, renders a size summary, and
//! optionally writes a recoloured copy highlighting the top-k blobs.

mod commands;

pub use commands::{
    Cli, CliError, Command, DetectCommand, ExecutionSummary, render_summary, run_cli,
};
