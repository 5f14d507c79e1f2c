#[cfg(test)]
mod tests {
    use clap::Parser;
    use joinery_cli::cli_args::{AddArgs, Args};
    use joinery_cli::commands;
    use joinery_cli::{execute, exit_status};
    use joinery_core::config::CONFIG_FILE_NAME;
    use joinery_core::error::{Error, Result};
    use joinery_core::file_handling::read_config;
    use joinery_core::install::{AddOutcome, PickerOption, PrimitivePicker};
    use joinery_core::primitives::PrimitiveCatalog;
    use std::fs;
    use tempfile::TempDir;

    /// Records what it was offered and answers with a fixed selection.
    struct RecordingPicker {
        answer: Vec<String>,
        offered: Vec<PickerOption>,
        calls: usize,
    }

    impl RecordingPicker {
        fn answering(names: &[&str]) -> Self {
            Self {
                answer: names.iter().map(ToString::to_string).collect(),
                offered: Vec::new(),
                calls: 0,
            }
        }
    }

    impl PrimitivePicker for RecordingPicker {
        fn pick(&mut self, _message: &str, options: &[PickerOption]) -> Result<Vec<String>> {
            self.calls += 1;
            self.offered = options.to_vec();
            Ok(self.answer.clone())
        }
    }

    /// Behaves like quitting the terminal picker.
    struct QuittingPicker;

    impl PrimitivePicker for QuittingPicker {
        fn pick(&mut self, _message: &str, _options: &[PickerOption]) -> Result<Vec<String>> {
            Err(Error::Cancelled("Cancelled.".to_string()))
        }
    }

    fn run_with(dir: &TempDir, argv: &[&str], picker: &mut dyn PrimitivePicker) -> Result<()> {
        let cwd = dir.path().to_string_lossy().to_string();
        let mut full = vec!["joinery", "--cwd", cwd.as_str()];
        full.extend_from_slice(argv);

        execute(Args::parse_from(full), &PrimitiveCatalog::default(), picker)
    }

    fn run(dir: &TempDir, argv: &[&str]) -> Result<()> {
        run_with(dir, argv, &mut RecordingPicker::answering(&[]))
    }

    fn installed(dir: &TempDir) -> Vec<String> {
        read_config(&dir.path().join(CONFIG_FILE_NAME))
            .unwrap()
            .primitives
            .into_iter()
            .collect()
    }

    #[test]
    fn test_init_yes_then_add_is_noop() {
        let dir = TempDir::new().unwrap();

        run(&dir, &["init", "--yes"]).unwrap();
        assert!(dir.path().join("styles/joinery/index.css").is_file());
        assert!(dir.path().join("components/joinery/Stack.tsx").is_file());

        let before = fs::read(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        run(&dir, &["add", "--all"]).unwrap();
        assert_eq!(fs::read(dir.path().join(CONFIG_FILE_NAME)).unwrap(), before);
    }

    #[test]
    fn test_add_without_init_fails() {
        let dir = TempDir::new().unwrap();
        let result = run(&dir, &["add", "grid"]);

        assert!(matches!(result, Err(Error::NotInitialized { .. })));
        assert!(!dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_add_unknown_name_fails() {
        let dir = TempDir::new().unwrap();
        run(&dir, &["init", "-y"]).unwrap();

        let result = run(&dir, &["add", "grid", "reel"]);
        assert!(matches!(result, Err(Error::UnknownPrimitives { .. })));
    }

    #[test]
    fn test_add_named_after_trimming_config() {
        let dir = TempDir::new().unwrap();
        run(&dir, &["init", "-y"]).unwrap();

        let path = dir.path().join(CONFIG_FILE_NAME);
        let trimmed = fs::read_to_string(&path)
            .unwrap()
            .replace(",\n    \"cluster\",\n    \"grid\",\n    \"center\",\n    \"box\"", "");
        fs::write(&path, trimmed).unwrap();
        assert_eq!(installed(&dir), vec!["stack"]);

        run(&dir, &["add", "stack", "grid"]).unwrap();
        assert_eq!(installed(&dir), vec!["stack", "grid"]);
    }

    #[test]
    fn test_add_without_names_uses_picker() {
        let dir = TempDir::new().unwrap();
        run(&dir, &["init", "-y"]).unwrap();

        let mut picker = RecordingPicker::answering(&["box"]);
        let outcome = commands::add::run(
            &AddArgs {
                primitives: vec![],
                all: false,
            },
            dir.path(),
            &PrimitiveCatalog::default(),
            &mut picker,
        )
        .unwrap();

        assert_eq!(picker.calls, 1);
        assert_eq!(outcome, AddOutcome::AlreadyInstalled);
        assert!(picker
            .offered
            .iter()
            .all(|option| option.hint.as_deref() == Some("already installed")));
    }

    #[test]
    fn test_add_with_names_skips_picker() {
        let dir = TempDir::new().unwrap();
        run(&dir, &["init", "-y"]).unwrap();

        let mut picker = RecordingPicker::answering(&["box"]);
        commands::add::run(
            &AddArgs {
                primitives: vec!["grid".to_string()],
                all: false,
            },
            dir.path(),
            &PrimitiveCatalog::default(),
            &mut picker,
        )
        .unwrap();

        assert_eq!(picker.calls, 0);
    }

    #[test]
    fn test_exit_status_for_failures() {
        let dir = TempDir::new().unwrap();
        assert_eq!(exit_status(&run(&dir, &["add", "grid"])), 1);

        run(&dir, &["init", "--yes"]).unwrap();
        assert_eq!(exit_status(&run(&dir, &["add", "reel"])), 1);
    }

    #[test]
    fn test_exit_status_for_success_and_cancellation() {
        let dir = TempDir::new().unwrap();
        let init = run(&dir, &["init", "--yes"]);
        assert_eq!(exit_status(&init), 0);

        // Everything is already installed
        assert_eq!(exit_status(&run(&dir, &["add", "stack"])), 0);

        let cancelled = run_with(&dir, &["add"], &mut QuittingPicker);
        assert!(matches!(cancelled, Err(Error::Cancelled(_))));
        assert_eq!(exit_status(&cancelled), 0);
    }
}
