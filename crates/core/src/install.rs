//! Adding primitives to an initialised project.
//!
//! The installer only ever touches the configuration document: it resolves the
//! requested names, subtracts what is already installed and appends the rest.

use std::path::Path;

use indexmap::IndexSet;
use log::{debug, info};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::file_handling::{read_config, write_config};
use crate::primitives::PrimitiveCatalog;

/// How the operator asked for primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every primitive in the catalog (`--all`).
    All,
    /// Names given on the command line.
    Named(Vec<String>),
    /// Nothing given; ask interactively.
    Prompt,
}

impl Selection {
    /// Builds the selection from command-line input. `--all` wins over explicit names.
    #[must_use]
    pub fn from_args(names: Vec<String>, all: bool) -> Self {
        if all {
            Selection::All
        } else if names.is_empty() {
            Selection::Prompt
        } else {
            Selection::Named(names)
        }
    }
}

/// One entry offered by an interactive picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
    /// Extra context shown next to the label, e.g. "already installed".
    pub hint: Option<String>,
}

/// Source of an interactive multi-selection.
///
/// Implementations return the chosen values, or [`crate::error::Error::Cancelled`]
/// when the operator backs out.
pub trait PrimitivePicker {
    fn pick(&mut self, message: &str, options: &[PickerOption]) -> Result<Vec<String>>;
}

/// Result of an `add` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Every requested primitive was already installed; nothing was written.
    AlreadyInstalled,
    /// These primitives were newly recorded, in request order.
    Added(Vec<String>),
}

pub const PICKER_MESSAGE: &str = "Which primitives do you want to add?";
const INSTALLED_HINT: &str = "already installed";

/// Builds picker options for every catalog entry, hinting the installed ones.
#[must_use]
pub fn picker_options(catalog: &PrimitiveCatalog, config: &ProjectConfig) -> Vec<PickerOption> {
    catalog
        .definitions()
        .iter()
        .map(|definition| PickerOption {
            value: definition.name.to_string(),
            label: definition.label(),
            hint: config
                .is_installed(definition.name)
                .then(|| INSTALLED_HINT.to_string()),
        })
        .collect()
}

/// Resolves a selection into the requested primitive names.
///
/// # Errors
///
/// Returns [`crate::error::Error::UnknownPrimitives`] for unrecognised names, or
/// whatever the picker returns (including cancellation).
pub fn resolve_selection(
    selection: Selection,
    catalog: &PrimitiveCatalog,
    config: &ProjectConfig,
    picker: &mut dyn PrimitivePicker,
) -> Result<Vec<String>> {
    let requested = match selection {
        Selection::All => catalog.names(),
        Selection::Named(names) => names,
        Selection::Prompt => picker.pick(PICKER_MESSAGE, &picker_options(catalog, config))?,
    };

    catalog.validate(requested.as_slice())?;
    Ok(requested)
}

/// Requested names not yet installed, in request order and without repeats.
#[must_use]
pub fn net_new(installed: &IndexSet<String>, requested: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|name| !installed.contains(name.as_str()))
        .cloned()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Adds primitives to the project whose configuration lives at `config_path`.
///
/// The document is read first, so an uninitialised project fails before any
/// prompt is shown. When nothing new was requested the document is left
/// untouched; otherwise it is rewritten in full.
///
/// # Errors
///
/// Returns an error if:
/// - The project is not initialised
/// - Any requested name is not in the catalog
/// - The picker is cancelled
/// - The document cannot be read or written
pub fn add_primitives(
    config_path: &Path,
    selection: Selection,
    catalog: &PrimitiveCatalog,
    picker: &mut dyn PrimitivePicker,
) -> Result<AddOutcome> {
    let mut config = read_config(config_path)?;
    debug!("Installed primitives: {:?}", config.primitives);

    let requested = resolve_selection(selection, catalog, &config, picker)?;
    let new_primitives = net_new(&config.primitives, &requested);

    if new_primitives.is_empty() {
        info!("Nothing to add; config at `{}` left unchanged", config_path.display());
        return Ok(AddOutcome::AlreadyInstalled);
    }

    config.primitives.extend(new_primitives.iter().cloned());
    write_config(config_path, &config)?;

    Ok(AddOutcome::Added(new_primitives))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct ScriptedPicker {
        response: Option<Vec<String>>,
        seen: Vec<PickerOption>,
    }

    impl PrimitivePicker for ScriptedPicker {
        fn pick(&mut self, _message: &str, options: &[PickerOption]) -> Result<Vec<String>> {
            self.seen = options.to_vec();
            self.response
                .clone()
                .ok_or_else(|| Error::Cancelled("Cancelled.".to_string()))
        }
    }

    fn picker(response: Option<&[&str]>) -> ScriptedPicker {
        ScriptedPicker {
            response: response.map(|names| names.iter().map(ToString::to_string).collect()),
            seen: Vec::new(),
        }
    }

    fn config_with(installed: &[&str]) -> ProjectConfig {
        ProjectConfig {
            css_path: "./styles/joinery".to_string(),
            react_path: None,
            typescript: false,
            primitives: installed.iter().map(ToString::to_string).collect(),
        }
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_selection_from_args() {
        assert_eq!(Selection::from_args(vec![], false), Selection::Prompt);
        assert_eq!(Selection::from_args(strings(&["grid"]), true), Selection::All);
        assert_eq!(
            Selection::from_args(strings(&["grid"]), false),
            Selection::Named(strings(&["grid"]))
        );
    }

    #[test]
    fn test_net_new_preserves_request_order() {
        let installed: IndexSet<String> = strings(&["stack"]).into_iter().collect();
        let result = net_new(&installed, &strings(&["box", "stack", "grid", "box"]));
        assert_eq!(result, strings(&["box", "grid"]));
    }

    #[test]
    fn test_net_new_empty_when_subset() {
        let installed: IndexSet<String> = strings(&["stack", "grid"]).into_iter().collect();
        assert!(net_new(&installed, &strings(&["grid"])).is_empty());
    }

    #[test]
    fn test_picker_options_hint_installed() {
        let catalog = PrimitiveCatalog::default();
        let options = picker_options(&catalog, &config_with(&["grid"]));

        assert_eq!(options.len(), 5);
        assert_eq!(options[0].label, "Stack");
        assert_eq!(options[0].hint, None);
        assert_eq!(options[2].value, "grid");
        assert_eq!(options[2].hint.as_deref(), Some("already installed"));
    }

    #[test]
    fn test_resolve_all_uses_catalog() {
        let catalog = PrimitiveCatalog::default();
        let mut picker = picker(None);
        let requested =
            resolve_selection(Selection::All, &catalog, &config_with(&[]), &mut picker).unwrap();
        assert_eq!(requested, catalog.names());
        assert!(picker.seen.is_empty());
    }

    #[test]
    fn test_resolve_named_rejects_unknown() {
        let catalog = PrimitiveCatalog::default();
        let result = resolve_selection(
            Selection::Named(strings(&["grid", "sidebar"])),
            &catalog,
            &config_with(&[]),
            &mut picker(None),
        );
        assert!(matches!(result, Err(Error::UnknownPrimitives { .. })));
    }

    #[test]
    fn test_resolve_prompt_uses_picker() {
        let catalog = PrimitiveCatalog::default();
        let mut picker = picker(Some(&["center"]));
        let requested = resolve_selection(
            Selection::Prompt,
            &catalog,
            &config_with(&["stack"]),
            &mut picker,
        )
        .unwrap();

        assert_eq!(requested, strings(&["center"]));
        assert_eq!(picker.seen[0].hint.as_deref(), Some("already installed"));
    }

    #[test]
    fn test_resolve_prompt_cancelled() {
        let catalog = PrimitiveCatalog::default();
        let result = resolve_selection(
            Selection::Prompt,
            &catalog,
            &config_with(&[]),
            &mut picker(None),
        );
        assert!(matches!(result, Err(Error::Cancelled(_))));
    }
}
