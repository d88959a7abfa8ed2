//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod price;
pub mod tree;

use clap::ValueEnum;

/// Output format shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table on stdout
    Table,
    /// Pretty-printed JSON on stdout
    Json,
}
