//! Operator-facing console output.
//!
//! Diagnostics go through `log`; these helpers print the messages the operator
//! is meant to read. Styling is only emitted when the stream is a terminal.

use std::fmt::Display;
use std::io::{stderr, stdout, IsTerminal};

use crossterm::style::{StyledContent, Stylize};
use itertools::Itertools;
use joinery_core::scaffold::ScaffoldStep;

/// Renders `styled` with its ANSI styling, or as plain text when `color` is off.
pub fn paint<D: Display>(styled: StyledContent<D>, color: bool) -> String {
    if color {
        styled.to_string()
    } else {
        styled.content().to_string()
    }
}

fn stdout_color() -> bool {
    stdout().is_terminal()
}

pub fn intro(title: &str) {
    println!("{}", paint(format!(" {title} ").black().on_cyan(), stdout_color()));
    println!();
}

pub fn info(message: &str) {
    println!("{} {message}", paint("●".blue(), stdout_color()));
}

pub fn success(message: &str) {
    let color = stdout_color();
    println!("{} {}", paint("◆".green(), color), paint(message.green(), color));
}

pub fn cancel(message: &str) {
    let color = stdout_color();
    println!("{} {}", paint("■".red(), color), paint(message.red(), color));
}

pub fn error(message: &str) {
    eprintln!("{} {message}", paint("▲".red(), stderr().is_terminal()));
}

/// Formats a scaffold step as a progress or completion line.
pub fn step_line(step: ScaffoldStep, color: bool) -> String {
    if step.is_completion() {
        format!("{} {}", paint("◇".green(), color), step.message())
    } else {
        format!(
            "{} {}...",
            paint("◒".magenta(), color),
            paint(step.message().dim(), color)
        )
    }
}

pub fn step(step: ScaffoldStep) {
    println!("{}", step_line(step, stdout_color()));
}

/// Joins primitive names for display, e.g. `stack, grid`.
pub fn list(names: &[String]) -> String {
    names.iter().join(", ")
}

/// Prints the post-`init` instructions.
pub fn next_steps(css_import: &str, component_path: Option<&str>) {
    let color = stdout_color();

    println!();
    println!("{}", paint("Next steps:".dim(), color));
    println!();
    println!("  {} Import the CSS in your app:", paint("1.".cyan(), color));
    println!("{}", paint(format!("     {css_import}").dim(), color));
    println!();
    if let Some(component_path) = component_path {
        println!("  {} Use the components:", paint("2.".cyan(), color));
        println!(
            "{}",
            paint(
                format!("     import {{ Stack, Center }} from '{component_path}'").dim(),
                color
            )
        );
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list() {
        let names = vec!["stack".to_string(), "grid".to_string()];
        assert_eq!(list(&names), "stack, grid");
        assert_eq!(list(&[]), "");
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        assert_eq!(paint("■".red(), false), "■");
        assert_eq!(
            step_line(ScaffoldStep::ConfigWritten, false),
            format!("◇ {}", ScaffoldStep::ConfigWritten.message())
        );
        for step in [ScaffoldStep::ConfigWritten, ScaffoldStep::WritingConfig] {
            assert!(!step_line(step, false).contains('\u{1b}'));
        }
    }
}
