use std::io::{stdin, stdout, BufRead, IsTerminal, Write};

use crossterm::cursor::MoveLeft;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::terminal::{enable_raw_mode, Clear, ClearType};
use joinery_core::config::{ProjectSettings, ReactSettings, DEFAULT_CSS_PATH, DEFAULT_REACT_PATH};
use joinery_core::error::{Error, Result};

use super::ui::RawModeGuard;

const CANCELLED: &str = "Cancelled.";

/// Where prompt answers come from.
pub trait AnswerSource {
    /// Reads one trimmed answer. Any echo of the typed text goes to `writer`.
    fn read_answer<W: Write>(&mut self, writer: &mut W) -> Result<String>;
}

/// Answers read line by line from a buffered reader, as when input is piped.
pub struct LineAnswers<R>(pub R);

impl<R: BufRead> AnswerSource for LineAnswers<R> {
    fn read_answer<W: Write>(&mut self, _writer: &mut W) -> Result<String> {
        let mut input = String::new();
        // End of input means the operator backed out (e.g. Ctrl-D)
        if self.0.read_line(&mut input)? == 0 {
            return Err(Error::Cancelled(CANCELLED.to_string()));
        }
        Ok(input.trim().to_string())
    }
}

/// Answers typed at the terminal.
///
/// Keys are read in raw mode so Ctrl-C and Esc cancel the prompt the same way
/// they cancel the picker, instead of killing the process.
#[derive(Default)]
pub struct TerminalAnswers;

impl AnswerSource for TerminalAnswers {
    fn read_answer<W: Write>(&mut self, writer: &mut W) -> Result<String> {
        enable_raw_mode()?;
        let _raw_mode_guard = RawModeGuard {
            alternate_screen: false,
        };

        read_key_answer(writer, next_terminal_key)
    }
}

fn next_terminal_key() -> Result<KeyEvent> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            return Ok(key_event);
        }
    }
}

/// What a key press did to the answer being typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue(String),
    Submit(String),
    Cancel,
}

/// Applies a key press to the answer typed so far.
#[must_use]
pub fn handle_line_key(key_event: KeyEvent, buffer: &str) -> LineOutcome {
    if key_event.kind == KeyEventKind::Release {
        return LineOutcome::Continue(buffer.to_string());
    }

    let control = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c') if control => LineOutcome::Cancel,
        KeyCode::Char('d') if control && buffer.is_empty() => LineOutcome::Cancel,
        KeyCode::Esc => LineOutcome::Cancel,
        KeyCode::Enter => LineOutcome::Submit(buffer.trim().to_string()),
        KeyCode::Backspace => {
            let mut updated = buffer.to_string();
            updated.pop();
            LineOutcome::Continue(updated)
        }
        KeyCode::Char(c) if !control => {
            let mut updated = buffer.to_string();
            updated.push(c);
            LineOutcome::Continue(updated)
        }
        _ => LineOutcome::Continue(buffer.to_string()),
    }
}

fn read_key_answer<W: Write>(
    writer: &mut W,
    mut next_key: impl FnMut() -> Result<KeyEvent>,
) -> Result<String> {
    let mut buffer = String::new();

    loop {
        match handle_line_key(next_key()?, &buffer) {
            LineOutcome::Continue(updated) => {
                echo_edit(writer, &buffer, &updated)?;
                buffer = updated;
            }
            LineOutcome::Submit(answer) => {
                write!(writer, "\r\n")?;
                writer.flush()?;
                return Ok(answer);
            }
            LineOutcome::Cancel => {
                write!(writer, "\r\n")?;
                writer.flush()?;
                return Err(Error::Cancelled(CANCELLED.to_string()));
            }
        }
    }
}

fn echo_edit<W: Write>(writer: &mut W, before: &str, after: &str) -> Result<()> {
    if let Some(typed) = after.strip_prefix(before) {
        write!(writer, "{typed}")?;
    } else {
        let removed = before.chars().count().saturating_sub(after.chars().count());
        if removed > 0 {
            let columns = u16::try_from(removed).unwrap_or(u16::MAX);
            queue!(writer, MoveLeft(columns), Clear(ClearType::UntilNewLine))?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Prompts for a line of text, returning `default` for an empty answer.
pub fn prompt_text_from<S: AnswerSource, W: Write>(
    source: &mut S,
    writer: &mut W,
    message: &str,
    default: &str,
) -> Result<String> {
    write!(writer, "{message} [{default}]: ")?;
    writer.flush()?;

    let answer = source.read_answer(writer)?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Prompts for a yes/no answer, re-asking until one is given.
pub fn prompt_confirm_from<S: AnswerSource, W: Write>(
    source: &mut S,
    writer: &mut W,
    message: &str,
    default: bool,
) -> Result<bool> {
    let choices = if default { "[Y]es/[n]o" } else { "[y]es/[N]o" };

    loop {
        write!(writer, "{message} ({choices}): ")?;
        writer.flush()?;

        match source.read_answer(writer)?.to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {}
        }
    }
}

/// Collects `init` answers: stylesheet directory, UI integration, component directory and dialect.
///
/// Component questions are skipped when UI integration is declined.
pub fn gather_settings_from<S: AnswerSource, W: Write>(
    source: &mut S,
    writer: &mut W,
) -> Result<ProjectSettings> {
    let css_path = prompt_text_from(source, writer, "Where should CSS files go?", DEFAULT_CSS_PATH)?;

    let react = if prompt_confirm_from(source, writer, "Are you using React?", true)? {
        let path = prompt_text_from(
            source,
            writer,
            "Where should React components go?",
            DEFAULT_REACT_PATH,
        )?;
        let typescript = prompt_confirm_from(source, writer, "Are you using TypeScript?", true)?;
        Some(ReactSettings { path, typescript })
    } else {
        None
    };

    Ok(ProjectSettings { css_path, react })
}

/// Collects `init` answers from the terminal, or line by line when stdin is piped.
pub fn gather_settings() -> Result<ProjectSettings> {
    let mut writer = stdout();
    if stdin().is_terminal() {
        gather_settings_from(&mut TerminalAnswers, &mut writer)
    } else {
        gather_settings_from(&mut LineAnswers(stdin().lock()), &mut writer)
    }
}
