//! Project initialisation: writes the stylesheet bundle, optional components and
//! the configuration document.
//!
//! Files are written top to bottom with no atomicity across the set. If a write
//! fails, everything written before it stays on disk; re-running `init`
//! overwrites it.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{resolve_project_path, ProjectConfig, ProjectSettings, CONFIG_FILE_NAME};
use crate::error::Result;
use crate::file_handling::{ensure_dir, write_config, write_file};
use crate::primitives::PrimitiveCatalog;
use crate::templates::{
    component_file_name, render_component, render_component_index, render_css_index,
    CSS_INDEX_FILE, PRIMITIVES_DIR, TOKENS_DIR, TOKEN_FILES,
};

/// Progress notifications emitted while scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    CreatingDirectories,
    DirectoriesCreated,
    WritingStyles,
    StylesWritten,
    WritingComponents,
    ComponentsWritten,
    WritingConfig,
    ConfigWritten,
}

impl ScaffoldStep {
    /// Operator-facing description of the step.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ScaffoldStep::CreatingDirectories => "Creating directories",
            ScaffoldStep::DirectoriesCreated => "Directories created",
            ScaffoldStep::WritingStyles => "Writing CSS files",
            ScaffoldStep::StylesWritten => "CSS files written",
            ScaffoldStep::WritingComponents => "Writing React components",
            ScaffoldStep::ComponentsWritten => "React components written",
            ScaffoldStep::WritingConfig => "Writing config",
            ScaffoldStep::ConfigWritten => "Config written",
        }
    }

    /// Whether the step marks the end of a phase.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            ScaffoldStep::DirectoriesCreated
                | ScaffoldStep::StylesWritten
                | ScaffoldStep::ComponentsWritten
                | ScaffoldStep::ConfigWritten
        )
    }
}

/// Outcome of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Every file written, in write order.
    pub written: Vec<PathBuf>,
    /// The configuration document as persisted.
    pub config: ProjectConfig,
}

struct Writer<'a> {
    written: Vec<PathBuf>,
    observer: &'a mut dyn FnMut(ScaffoldStep),
}

impl Writer<'_> {
    fn step(&mut self, step: ScaffoldStep) {
        debug!("Scaffold step: {:?}", step);
        (self.observer)(step);
    }

    fn write(&mut self, file_description: &str, path: PathBuf, contents: &str) -> Result<()> {
        write_file(file_description, &path, contents)?;
        self.written.push(path);
        Ok(())
    }
}

/// Scaffolds a Joinery project under `project_root`.
///
/// Writes the token and primitive stylesheets and the CSS entry file, the
/// component sources and their entry file when UI integration is enabled, and
/// finally `joinery.json` listing every catalog primitive as installed.
/// Existing files are overwritten.
///
/// # Errors
///
/// Returns an error as soon as any directory or file cannot be written.
pub fn scaffold_project(
    project_root: &Path,
    settings: &ProjectSettings,
    catalog: &PrimitiveCatalog,
    observer: &mut dyn FnMut(ScaffoldStep),
) -> Result<ScaffoldReport> {
    let mut writer = Writer {
        written: Vec::new(),
        observer,
    };

    let css_dir = resolve_project_path(project_root, &settings.css_path);
    let component_dir = settings
        .react
        .as_ref()
        .map(|react| resolve_project_path(project_root, &react.path));

    writer.step(ScaffoldStep::CreatingDirectories);
    ensure_dir(&css_dir)?;
    if let Some(component_dir) = &component_dir {
        ensure_dir(component_dir)?;
    }
    writer.step(ScaffoldStep::DirectoriesCreated);

    writer.step(ScaffoldStep::WritingStyles);
    for (name, contents) in TOKEN_FILES {
        let path = css_dir.join(TOKENS_DIR).join(format!("{name}.css"));
        writer.write("token stylesheet", path, contents)?;
    }
    writer.write(
        "stylesheet index",
        css_dir.join(CSS_INDEX_FILE),
        &render_css_index(catalog)?,
    )?;
    for definition in catalog.definitions() {
        let path = css_dir
            .join(PRIMITIVES_DIR)
            .join(format!("{}.css", definition.name));
        writer.write("primitive stylesheet", path, definition.stylesheet)?;
    }
    writer.step(ScaffoldStep::StylesWritten);

    if let (Some(react), Some(component_dir)) = (&settings.react, &component_dir) {
        writer.step(ScaffoldStep::WritingComponents);
        for definition in catalog.definitions() {
            let path =
                component_dir.join(component_file_name(definition, react.component_extension()));
            writer.write(
                "component",
                path,
                &render_component(definition, react.typescript),
            )?;
        }
        writer.write(
            "component index",
            component_dir.join(format!("index.{}", react.index_extension())),
            &render_component_index(catalog),
        )?;
        writer.step(ScaffoldStep::ComponentsWritten);
    }

    writer.step(ScaffoldStep::WritingConfig);
    let config = ProjectConfig::from_settings(settings, catalog);
    let config_path = project_root.join(CONFIG_FILE_NAME);
    write_config(&config_path, &config)?;
    writer.written.push(config_path);
    writer.step(ScaffoldStep::ConfigWritten);

    Ok(ScaffoldReport {
        written: writer.written,
        config,
    })
}
