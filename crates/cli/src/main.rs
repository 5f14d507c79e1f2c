use std::process::ExitCode;

use clap::Parser;
use joinery_cli::cli_args::Args;
use joinery_cli::output;
use joinery_cli::prompts::TerminalPicker;
use joinery_core::primitives::PrimitiveCatalog;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let catalog = PrimitiveCatalog::default();

    let result = joinery_cli::execute(args, &catalog, &mut TerminalPicker);
    match &result {
        Ok(()) => {}
        Err(e) if e.is_cancellation() => output::cancel(&e.to_string()),
        Err(e) => output::error(&e.to_string()),
    }

    ExitCode::from(joinery_cli::exit_status(&result))
}
