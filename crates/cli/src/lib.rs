//! Joinery CLI Library
//!
//! This crate provides the command-line interface for Joinery, a scaffolding
//! tool for a CSS layout-primitive design system. It handles argument parsing,
//! interactive prompts and console output around the workflows in
//! `joinery-core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`commands`]: The `init` and `add` subcommands
//! - [`prompts`]: Line prompts and the terminal multi-select
//! - [`output`]: Operator-facing console messages
//!
//! # Examples
//!
//! ```bash
//! # Interactive setup
//! joinery init
//!
//! # Setup with defaults
//! joinery init --yes
//!
//! # Pick primitives interactively
//! joinery add
//!
//! # Add specific primitives, or all of them
//! joinery add stack grid
//! joinery add --all
//!
//! # Operate on another project directory
//! joinery --cwd ../site add center
//! ```

pub mod cli_args;
pub mod commands;
pub mod output;
pub mod prompts;

use joinery_core::config;
use joinery_core::error::Result;
use joinery_core::install::PrimitivePicker;
use joinery_core::primitives::PrimitiveCatalog;
use log::debug;

use crate::cli_args::{Args, Commands};

/// Runs the parsed command against the given catalog, using `picker` for interactive selection.
///
/// # Errors
///
/// Returns whatever the subcommand returns; cancellations surface as
/// [`joinery_core::error::Error::Cancelled`].
pub fn execute(
    args: Args,
    catalog: &PrimitiveCatalog,
    picker: &mut dyn PrimitivePicker,
) -> Result<()> {
    let project_root = config::get_project_root(&args.cwd);
    debug!("Project root: `{}`", project_root.display());

    match args.command {
        Commands::Init(init_args) => commands::init::run(&init_args, &project_root, catalog),
        Commands::Add(add_args) => {
            commands::add::run(&add_args, &project_root, catalog, picker).map(|_| ())
        }
    }
}

/// Process exit status for a finished command.
///
/// Success and operator cancellation exit with 0; every other error with 1.
#[must_use]
pub fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) if e.is_cancellation() => 0,
        Err(_) => 1,
    }
}
