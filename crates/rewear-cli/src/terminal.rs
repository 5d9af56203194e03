// Rust guideline compliant 2026-02-06

//! Terminal helpers: color detection, width, wrapping and status lines.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and whether stdout is a TTY.
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns, or 80 if it cannot be determined.
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to the terminal width.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `indent` - Spaces placed before every continuation line
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to_width(text, get_terminal_width(), indent)
}

/// Wraps text on word boundaries to a fixed width.
///
/// Words longer than the available width are kept whole.
pub fn wrap_to_width(text: &str, width: usize, indent: usize) -> String {
    let available = width.saturating_sub(indent);
    if available < 10 {
        return text.to_string();
    }

    let indent_str = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= available {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }

    lines.join(&format!("\n{indent_str}"))
}

fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a success message to stderr.
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}
