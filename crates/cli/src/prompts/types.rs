//! State for the interactive multi-select.
//!
//! Everything here is pure so key handling can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use indexmap::IndexSet;
use joinery_core::error::Error;
use joinery_core::install::PickerOption;

/// Direction to move the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// What a key press resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue(MultiSelectState),
    Submit(Vec<String>),
    Cancel,
}

/// Complete UI state for the multi-select.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MultiSelectState {
    /// Position of the cursor within the visible options
    pub cursor: usize,
    /// Indexes into the full option list
    pub selected: IndexSet<usize>,
    /// Whether the user is currently filtering
    pub is_filtering: bool,
    /// Current filter text
    pub filter_text: String,
    /// Validation message shown under the list
    pub error: Option<String>,
}

impl MultiSelectState {
    /// Indexes of the options matching the current filter, in option order.
    #[must_use]
    pub fn visible_indexes(&self, options: &[PickerOption]) -> Vec<usize> {
        if self.filter_text.is_empty() {
            return (0..options.len()).collect();
        }

        let matcher = SkimMatcherV2::default();
        options
            .iter()
            .enumerate()
            .filter(|(_, option)| {
                matcher
                    .fuzzy_match(&option.label, &self.filter_text)
                    .is_some()
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Selected values in option order.
    #[must_use]
    pub fn selected_values(&self, options: &[PickerOption]) -> Vec<String> {
        options
            .iter()
            .enumerate()
            .filter(|(i, _)| self.selected.contains(i))
            .map(|(_, option)| option.value.clone())
            .collect()
    }

    #[must_use]
    pub fn move_cursor(&self, direction: CycleDirection, visible_count: usize) -> Self {
        let mut state = self.clone();
        if visible_count == 0 {
            state.cursor = 0;
            return state;
        }

        state.cursor = match direction {
            CycleDirection::Up if self.cursor == 0 => visible_count - 1,
            CycleDirection::Up => self.cursor - 1,
            CycleDirection::Down => (self.cursor + 1) % visible_count,
        };
        state
    }

    /// Toggles the option under the cursor.
    #[must_use]
    pub fn toggle_current(&self, options: &[PickerOption]) -> Self {
        let mut state = self.clone();
        if let Some(&index) = self.visible_indexes(options).get(self.cursor) {
            if !state.selected.shift_remove(&index) {
                state.selected.insert(index);
            }
            state.error = None;
        }
        state
    }

    /// Selects every visible option, or clears them all if they are already selected.
    #[must_use]
    pub fn toggle_all(&self, options: &[PickerOption]) -> Self {
        let mut state = self.clone();
        let visible = self.visible_indexes(options);

        if visible.iter().all(|i| self.selected.contains(i)) {
            for i in &visible {
                state.selected.shift_remove(i);
            }
        } else {
            state.selected.extend(visible);
        }
        state.error = None;
        state
    }

    fn with_filter(&self, filter_text: String) -> Self {
        let mut state = self.clone();
        state.filter_text = filter_text;
        state.cursor = 0;
        state
    }
}

/// Applies a key press to the state.
#[must_use]
pub fn handle_key_event(
    key_event: KeyEvent,
    state: &MultiSelectState,
    options: &[PickerOption],
) -> KeyOutcome {
    let visible_count = state.visible_indexes(options).len();

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyOutcome::Cancel
        }
        KeyCode::Up => KeyOutcome::Continue(state.move_cursor(CycleDirection::Up, visible_count)),
        KeyCode::Down => {
            KeyOutcome::Continue(state.move_cursor(CycleDirection::Down, visible_count))
        }
        KeyCode::Enter => {
            let values = state.selected_values(options);
            if values.is_empty() {
                let mut updated_state = state.clone();
                updated_state.error = Some(Error::NoSelection.to_string());
                KeyOutcome::Continue(updated_state)
            } else {
                KeyOutcome::Submit(values)
            }
        }
        KeyCode::Char(' ') => KeyOutcome::Continue(state.toggle_current(options)),
        KeyCode::Backspace if state.is_filtering => {
            let mut filter_text = state.filter_text.clone();
            filter_text.pop();
            KeyOutcome::Continue(state.with_filter(filter_text))
        }
        KeyCode::Esc if state.is_filtering => {
            let mut updated_state = state.with_filter(String::new());
            updated_state.is_filtering = false;
            KeyOutcome::Continue(updated_state)
        }
        KeyCode::Char(c) if state.is_filtering => {
            let mut filter_text = state.filter_text.clone();
            filter_text.push(c);
            KeyOutcome::Continue(state.with_filter(filter_text))
        }
        KeyCode::Char('/') => {
            let mut updated_state = state.clone();
            updated_state.is_filtering = true;
            KeyOutcome::Continue(updated_state)
        }
        KeyCode::Char('k') => {
            KeyOutcome::Continue(state.move_cursor(CycleDirection::Up, visible_count))
        }
        KeyCode::Char('j') => {
            KeyOutcome::Continue(state.move_cursor(CycleDirection::Down, visible_count))
        }
        KeyCode::Char('a') => KeyOutcome::Continue(state.toggle_all(options)),
        KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Cancel,
        _ => KeyOutcome::Continue(state.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<PickerOption> {
        ["stack", "cluster", "grid"]
            .iter()
            .map(|name| PickerOption {
                value: name.to_string(),
                label: format!("{}{}", name[..1].to_uppercase(), &name[1..]),
                hint: None,
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn apply(state: &MultiSelectState, code: KeyCode) -> MultiSelectState {
        match handle_key_event(key(code), state, &options()) {
            KeyOutcome::Continue(state) => state,
            other => panic!("Expected Continue, got {other:?}"),
        }
    }

    #[test]
    fn test_cursor_wraps() {
        let state = MultiSelectState::default();
        let state = apply(&state, KeyCode::Up);
        assert_eq!(state.cursor, 2);
        let state = apply(&state, KeyCode::Down);
        assert_eq!(state.cursor, 0);
        let state = apply(&state, KeyCode::Char('j'));
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_toggle_and_submit_in_option_order() {
        let state = MultiSelectState::default();
        let state = apply(&state, KeyCode::Down);
        let state = apply(&state, KeyCode::Down);
        let state = apply(&state, KeyCode::Char(' '));
        let state = apply(&state, KeyCode::Up);
        let state = apply(&state, KeyCode::Up);
        let state = apply(&state, KeyCode::Char(' '));

        assert_eq!(
            handle_key_event(key(KeyCode::Enter), &state, &options()),
            KeyOutcome::Submit(vec!["stack".to_string(), "grid".to_string()])
        );
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let state = MultiSelectState::default();
        let state = apply(&state, KeyCode::Char(' '));
        let state = apply(&state, KeyCode::Char(' '));
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_enter_without_selection_sets_error() {
        let state = apply(&MultiSelectState::default(), KeyCode::Enter);
        assert_eq!(
            state.error.as_deref(),
            Some("At least one primitive must be selected.")
        );

        let state = apply(&state, KeyCode::Char(' '));
        assert!(state.error.is_none());
    }

    #[test]
    fn test_toggle_all() {
        let state = apply(&MultiSelectState::default(), KeyCode::Char('a'));
        assert_eq!(state.selected_values(&options()).len(), 3);

        let state = apply(&state, KeyCode::Char('a'));
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_cancel_keys() {
        let state = MultiSelectState::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &state, &options()),
            KeyOutcome::Cancel
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &state, &options()),
            KeyOutcome::Cancel
        );
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &state,
                &options()
            ),
            KeyOutcome::Cancel
        );
    }

    #[test]
    fn test_filtering() {
        let state = apply(&MultiSelectState::default(), KeyCode::Char('/'));
        assert!(state.is_filtering);

        let state = apply(&state, KeyCode::Char('g'));
        let state = apply(&state, KeyCode::Char('r'));
        assert_eq!(state.filter_text, "gr");
        assert_eq!(state.visible_indexes(&options()), vec![2]);

        // 'q' is filter text while filtering, not quit
        let state = apply(&state, KeyCode::Char('q'));
        assert_eq!(state.filter_text, "grq");

        let state = apply(&state, KeyCode::Backspace);
        let state = apply(&state, KeyCode::Char(' '));
        assert_eq!(state.selected_values(&options()), vec!["grid".to_string()]);

        let state = apply(&state, KeyCode::Esc);
        assert!(!state.is_filtering);
        assert!(state.filter_text.is_empty());
        assert_eq!(state.visible_indexes(&options()).len(), 3);
    }
}
