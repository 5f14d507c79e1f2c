//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate: a global project directory option plus the `init` and `add`
//! subcommands.

use clap::{Parser, Subcommand};

/// Command-line arguments for the joinery CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use joinery_cli::cli_args::Args;
///
/// let args = Args::parse_from(["joinery", "add", "stack", "grid"]);
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "joinery",
    version,
    about = "Intent-driven design system with semantic layout primitives"
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Project directory holding `joinery.json`.
    ///
    /// If not provided, defaults to the current directory.
    #[arg(long, short = 'C', global = true)]
    pub cwd: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Joinery in your project
    Init(InitArgs),

    /// Add specific primitives to your project
    Add(AddArgs),
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Skip prompts and use defaults
    #[arg(long, short = 'y', action)]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Primitives to add, e.g. `stack grid`.
    ///
    /// If neither names nor `--all` are given, an interactive picker is shown.
    pub primitives: Vec<String>,

    /// Add all primitives
    #[arg(long, short = 'a', action)]
    pub all: bool,
}
