use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::Color::{DarkBlue, DarkGreen, DarkGrey, Red, Reset, Yellow};
use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::debug;

use super::types::{handle_key_event, KeyOutcome, MultiSelectState};
use joinery_core::error::{Error, Result};
use joinery_core::install::{PickerOption, PrimitivePicker};

/// Restores the terminal when dropped.
pub(crate) struct RawModeGuard {
    pub(crate) alternate_screen: bool,
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
        }
    }
}

/// Multi-select rendered in the terminal's alternate screen.
#[derive(Default)]
pub struct TerminalPicker;

impl PrimitivePicker for TerminalPicker {
    fn pick(&mut self, message: &str, options: &[PickerOption]) -> Result<Vec<String>> {
        prompt_for_selection(message, options)
    }
}

fn print_header(message: &str, state: &MultiSelectState) -> Result<()> {
    let mut stdout = stdout();
    let (width, _) = terminal::size()?;

    let instructions = if state.is_filtering {
        format!("  Filter: {}   |   <esc>: Stop Filtering", state.filter_text)
    } else {
        "  space: Toggle   |   a: All   |   /: Filter   |   enter: Confirm   |   q: Cancel"
            .to_string()
    };
    let padding = " ".repeat((width as usize).saturating_sub(instructions.len()));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(instructions),
        Print(padding),
        SetBackgroundColor(Reset),
        cursor::MoveToNextLine(1),
        SetAttribute(Attribute::Bold),
        Print(message),
        SetAttribute(Attribute::Reset),
        cursor::MoveToNextLine(1),
    )?;

    Ok(())
}

fn print_option(option: &PickerOption, is_selected: bool, is_cursor: bool) -> Result<()> {
    let mut stdout = stdout();
    let marker = if is_selected { "[x]" } else { "[ ]" };

    if is_cursor {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    }

    queue!(stdout, Print(format!("  {marker} {}", option.label)))?;

    if let Some(hint) = &option.hint {
        if !is_cursor {
            queue!(stdout, SetForegroundColor(DarkGrey))?;
        }
        queue!(stdout, Print(format!(" ({hint})")))?;
    }

    queue!(
        stdout,
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
        cursor::MoveToNextLine(1),
    )?;

    Ok(())
}

fn redraw_ui(message: &str, state: &MultiSelectState, options: &[PickerOption]) -> Result<()> {
    let mut stdout = stdout();
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(message, state)?;

    let visible = state.visible_indexes(options);
    if visible.is_empty() {
        queue!(
            stdout,
            SetForegroundColor(Red),
            Print("No matching primitives!"),
            SetForegroundColor(Reset),
            cursor::MoveToNextLine(1),
        )?;
    }

    for (row, &index) in visible.iter().enumerate() {
        print_option(
            &options[index],
            state.selected.contains(&index),
            row == state.cursor,
        )?;
    }

    if let Some(error) = &state.error {
        queue!(
            stdout,
            SetForegroundColor(Yellow),
            Print(error),
            SetForegroundColor(Reset),
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Prompts the user to choose one or more options.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] when the user quits, or a terminal I/O error.
pub fn prompt_for_selection(message: &str, options: &[PickerOption]) -> Result<Vec<String>> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    // When this goes out of scope, raw mode is disabled
    let _raw_mode_guard = RawModeGuard {
        alternate_screen: true,
    };

    let mut state = MultiSelectState::default();
    redraw_ui(message, &state, options)?;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        match event::read()? {
            Event::Key(key_event) => match handle_key_event(key_event, &state, options) {
                KeyOutcome::Submit(values) => {
                    debug!("Selected primitives: {:?}", values);
                    return Ok(values);
                }
                KeyOutcome::Cancel => return Err(Error::Cancelled("Cancelled.".to_string())),
                KeyOutcome::Continue(new_state) => {
                    if new_state != state {
                        state = new_state;
                        redraw_ui(message, &state, options)?;
                    }
                }
            },
            Event::Resize(_, _) => redraw_ui(message, &state, options)?,
            _ => {}
        }
    }
}
