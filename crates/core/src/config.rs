//! Project configuration for Joinery.
//!
//! This module defines the `joinery.json` document, the settings gathered by
//! `joinery init`, and the path helpers used to locate both.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::primitives::PrimitiveCatalog;

/// File name of the configuration document, relative to the project root.
pub const CONFIG_FILE_NAME: &str = "joinery.json";

/// Default directory for generated stylesheets
pub const DEFAULT_CSS_PATH: &str = "./styles/joinery";
/// Default directory for generated components
pub const DEFAULT_REACT_PATH: &str = "./components/joinery";

/// The persisted `joinery.json` document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub css_path: String,
    pub react_path: Option<String>,
    pub typescript: bool,
    pub primitives: IndexSet<String>,
}

impl ProjectConfig {
    /// Builds the document written by `init`: every catalog primitive is marked installed.
    #[must_use]
    pub fn from_settings(settings: &ProjectSettings, catalog: &PrimitiveCatalog) -> Self {
        Self {
            css_path: settings.css_path.clone(),
            react_path: settings.react.as_ref().map(|react| react.path.clone()),
            typescript: settings.react.as_ref().is_some_and(|react| react.typescript),
            primitives: catalog.names().into_iter().collect(),
        }
    }

    #[must_use]
    pub fn is_installed(&self, name: &str) -> bool {
        self.primitives.contains(name)
    }
}

/// Component generation choices, present only when UI integration was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactSettings {
    pub path: String,
    pub typescript: bool,
}

impl ReactSettings {
    /// Extension for generated component files.
    #[must_use]
    pub fn component_extension(&self) -> &'static str {
        if self.typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    /// Extension for the generated component entry file.
    #[must_use]
    pub fn index_extension(&self) -> &'static str {
        if self.typescript {
            "ts"
        } else {
            "js"
        }
    }
}

/// Answers collected by `joinery init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    pub css_path: String,
    pub react: Option<ReactSettings>,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            css_path: DEFAULT_CSS_PATH.to_string(),
            react: Some(ReactSettings {
                path: DEFAULT_REACT_PATH.to_string(),
                typescript: true,
            }),
        }
    }
}

/// Resolves the configuration document path for a project root.
///
/// If no root is provided the current directory is used. Shell expansions
/// like `~` are resolved.
///
/// # Examples
///
/// ```
/// use joinery_core::config::get_config_path;
///
/// let path = get_config_path(&Some("/srv/site".to_string()));
/// assert!(path.ends_with("joinery.json"));
/// ```
pub fn get_config_path(project_root_arg: &Option<String>) -> PathBuf {
    get_project_root(project_root_arg).join(CONFIG_FILE_NAME)
}

/// Resolves the project root, defaulting to the current directory.
pub fn get_project_root(project_root_arg: &Option<String>) -> PathBuf {
    match project_root_arg {
        Some(root) => PathBuf::from(shellexpand::tilde(root).to_string()),
        None => PathBuf::from("."),
    }
}

/// Resolves a user supplied, project relative directory against the project root.
///
/// `~` is expanded first; absolute results are returned unchanged.
pub fn resolve_project_path(project_root: &Path, path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    project_root.join(&*expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_root() {
        let result = get_config_path(&Some("/custom/project".to_string()));
        assert_eq!(result, PathBuf::from("/custom/project/joinery.json"));
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        assert_eq!(result, PathBuf::from("./joinery.json"));
    }

    #[test]
    fn test_get_project_root_expands_tilde() {
        let result = get_project_root(&Some("~/site".to_string()));
        assert!(!result.starts_with("~"));
        assert!(result.ends_with("site"));
    }

    #[test]
    fn test_resolve_project_path_relative() {
        let result = resolve_project_path(Path::new("/srv/site"), "./styles/joinery");
        assert_eq!(result, PathBuf::from("/srv/site/./styles/joinery"));
    }

    #[test]
    fn test_resolve_project_path_absolute() {
        let result = resolve_project_path(Path::new("/srv/site"), "/var/styles");
        assert_eq!(result, PathBuf::from("/var/styles"));
    }

    #[test]
    fn test_default_settings() {
        let settings = ProjectSettings::default();
        assert_eq!(settings.css_path, DEFAULT_CSS_PATH);
        let react = settings.react.unwrap();
        assert_eq!(react.path, DEFAULT_REACT_PATH);
        assert!(react.typescript);
        assert_eq!(react.component_extension(), "tsx");
        assert_eq!(react.index_extension(), "ts");
    }

    #[test]
    fn test_config_from_settings_without_react() {
        let settings = ProjectSettings {
            css_path: "./css".to_string(),
            react: None,
        };
        let config = ProjectConfig::from_settings(&settings, &PrimitiveCatalog::default());

        assert_eq!(config.react_path, None);
        assert!(!config.typescript);
        assert_eq!(config.primitives.len(), 5);
    }

    #[test]
    fn test_config_serializes_with_camel_case_keys() {
        let config = ProjectConfig::from_settings(
            &ProjectSettings::default(),
            &PrimitiveCatalog::default(),
        );
        let json = serde_json::to_string_pretty(&config).unwrap();

        assert_eq!(
            json,
            r#"{
  "cssPath": "./styles/joinery",
  "reactPath": "./components/joinery",
  "typescript": true,
  "primitives": [
    "stack",
    "cluster",
    "grid",
    "center",
    "box"
  ]
}"#
        );
    }

    #[test]
    fn test_config_null_react_path_round_trips() {
        let json = r#"{"cssPath":"./css","reactPath":null,"typescript":false,"primitives":["stack","stack"]}"#;
        let config: ProjectConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.react_path, None);
        assert_eq!(config.primitives.len(), 1);
        assert!(config.is_installed("stack"));
    }
}
