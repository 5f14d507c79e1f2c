//! Interactive prompts for the joinery CLI.
//!
//! # Key Features
//!
//! - **Line Prompts**: Text and yes/no questions for `joinery init`
//! - **Multi-Select**: Terminal picker for `joinery add` with no arguments
//! - **Fuzzy Filter**: Type `/` in the picker to narrow the list
//!
//! Ctrl-C or `<esc>` on a line prompt (end of input when stdin is piped), or
//! `q`/`<esc>`/Ctrl-C in the picker, cancels the command before anything is
//! written.

pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::{
    gather_settings, prompt_confirm_from, prompt_text_from, AnswerSource, LineAnswers,
    TerminalAnswers,
};
pub use types::{KeyOutcome, MultiSelectState};
pub use ui::TerminalPicker;
