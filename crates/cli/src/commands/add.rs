use std::path::Path;

use joinery_core::config::CONFIG_FILE_NAME;
use joinery_core::error::Result;
use joinery_core::install::{add_primitives, AddOutcome, PrimitivePicker, Selection};
use joinery_core::primitives::PrimitiveCatalog;
use log::debug;

use crate::cli_args::AddArgs;
use crate::output;

/// Runs `joinery add`.
///
/// The picker is only consulted when neither names nor `--all` were given.
///
/// # Errors
///
/// Returns an error if the project is not initialised, a name is unknown, the
/// picker is cancelled, or the configuration cannot be rewritten.
pub fn run(
    args: &AddArgs,
    project_root: &Path,
    catalog: &PrimitiveCatalog,
    picker: &mut dyn PrimitivePicker,
) -> Result<AddOutcome> {
    let config_path = project_root.join(CONFIG_FILE_NAME);
    debug!("Config path: `{}`", config_path.display());

    let selection = Selection::from_args(args.primitives.clone(), args.all);
    let outcome = add_primitives(&config_path, selection, catalog, picker)?;

    match &outcome {
        AddOutcome::AlreadyInstalled => {
            output::info("All selected primitives are already installed.");
        }
        AddOutcome::Added(names) => {
            output::info(&format!("Added {}", output::list(names)));
            output::success("✓ Primitives added!");
            output::info("Don't forget to import any new CSS files.");
        }
    }

    Ok(outcome)
}
