//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbbreviateCommand, AppPathCommand, CompletionsCommand, DataDirCommand, ExpandCommand,
    ListCommand, ResolveCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use retropath::PATH_MAX_LENGTH;
use std::path::PathBuf;

/// Command-line tool for portable paths and special directories.
#[derive(Parser)]
#[command(name = "retropath")]
#[command(
    version,
    about = "Expand portable paths and resolve special directories",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Settings file to load instead of the discovered one
    #[arg(long, value_name = "FILE", global = true, env = "RETROPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Capacity of each output path in bytes, terminator included
    #[arg(
        long,
        value_name = "BYTES",
        global = true,
        default_value_t = PATH_MAX_LENGTH
    )]
    pub capacity: usize,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Expand `~` and `:` prefixed paths
    Expand(ExpandCommand),

    /// Rewrite absolute paths in portable notation
    Abbreviate(AbbreviateCommand),

    /// Show the path of the running application
    AppPath(AppPathCommand),

    /// Show the per-user application data directory
    DataDir(DataDirCommand),

    /// Resolve one special directory
    Resolve(ResolveCommand),

    /// List every special directory
    List(ListCommand),

    /// Validate a settings file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
