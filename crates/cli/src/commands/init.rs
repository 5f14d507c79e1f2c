use std::path::Path;

use joinery_core::config::ProjectSettings;
use joinery_core::error::{Error, Result};
use joinery_core::primitives::PrimitiveCatalog;
use joinery_core::scaffold::scaffold_project;
use joinery_core::templates::css_import_hint;
use log::debug;

use crate::cli_args::InitArgs;
use crate::output;
use crate::prompts::gather_settings;

/// Runs `joinery init`.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if the operator abandons the prompts, or any
/// error raised while writing the project files.
pub fn run(args: &InitArgs, project_root: &Path, catalog: &PrimitiveCatalog) -> Result<()> {
    output::intro("joinery");

    let settings = if args.yes {
        output::info("Using default configuration");
        ProjectSettings::default()
    } else {
        gather_settings().map_err(|e| {
            if e.is_cancellation() {
                Error::Cancelled("Setup cancelled.".to_string())
            } else {
                e
            }
        })?
    };
    debug!("Project settings: {:?}", settings);

    let report = scaffold_project(project_root, &settings, catalog, &mut output::step)?;
    debug!("Wrote {} files", report.written.len());

    output::success("✓ Joinery initialized!");
    output::next_steps(
        &css_import_hint(&settings.css_path)?,
        report.config.react_path.as_deref(),
    );

    Ok(())
}
