use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Joinery not initialized. Run `joinery init` first. (no config found at `{}`)", .path)]
    NotInitialized { path: String },

    #[error("Unknown primitives: {}. Available: {}", .invalid.join(", "), .available.join(", "))]
    UnknownPrimitives {
        invalid: Vec<String>,
        available: Vec<String>,
    },

    #[error("{}", .0)]
    Cancelled(String),

    #[error("At least one primitive must be selected.")]
    NoSelection,

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("Error parsing template string: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering template string: {}", .0)]
    Render(#[from] RenderError),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn not_initialized(path: String) -> Self {
        Self::NotInitialized { path }
    }

    pub fn unknown_primitives(invalid: Vec<String>, available: Vec<String>) -> Self {
        Self::UnknownPrimitives { invalid, available }
    }

    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether this error is an operator-initiated cancellation rather than a failure.
    #[must_use]
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_primitives_message_lists_both_sets() {
        let error = Error::unknown_primitives(
            vec!["sidebar".to_string(), "reel".to_string()],
            vec!["stack".to_string(), "grid".to_string()],
        );

        assert_eq!(
            error.to_string(),
            "Unknown primitives: sidebar, reel. Available: stack, grid"
        );
    }

    #[test]
    fn test_not_initialized_message() {
        let error = Error::not_initialized("./joinery.json".to_string());
        assert!(error
            .to_string()
            .starts_with("Joinery not initialized. Run `joinery init` first."));
    }

    #[test]
    fn test_is_cancellation() {
        assert!(Error::Cancelled("Cancelled.".to_string()).is_cancellation());
        assert!(!Error::NoSelection.is_cancellation());
    }
}
