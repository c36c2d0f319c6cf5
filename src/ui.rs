//! User interaction layer: prompts and notifications.
//!
//! `Ui` is the capability interface resolution code talks to. Cancellation
//! is explicit: a dismissed prompt is `None`, never an empty string, so the
//! per-step abort-vs-default policy stays a visible branch in the caller.

use crossterm::style::{Color, Stylize};
use std::io::{self, BufRead, Write};

/// Injectable interaction interface for disambiguation and notifications.
pub trait Ui: Send + Sync {
    /// Offer a list of options and return the chosen one, or `None` when
    /// the user dismissed the prompt.
    fn prompt_choice(&self, options: &[String], label: &str) -> Option<String>;

    /// Prompt for free-form text. `None` means dismissed.
    fn prompt_free_text(&self, label: &str) -> Option<String>;

    fn notify_info(&self, msg: &str);
    fn notify_warn(&self, msg: &str);
    fn notify_error(&self, msg: &str);
}

/// Line-oriented terminal implementation of `Ui`.
///
/// Choices are shown as a numbered list; the user answers with a number or
/// the exact option text. An empty answer or EOF dismisses the prompt.
pub struct TerminalUi {
    color: bool,
}

impl TerminalUi {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn read_answer(&self) -> Option<String> {
        let mut line = String::new();
        let stdin = io::stdin();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim().to_string();
                if answer.is_empty() {
                    None
                } else {
                    Some(answer)
                }
            }
            Err(_) => None,
        }
    }

    fn styled(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Ui for TerminalUi {
    fn prompt_choice(&self, options: &[String], label: &str) -> Option<String> {
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "{}", self.styled(label, Color::Cyan));
        for (i, option) in options.iter().enumerate() {
            let _ = writeln!(stderr, "  {}. {option}", i + 1);
        }
        let _ = write!(stderr, "{} ", self.styled(">", Color::Cyan));
        let _ = stderr.flush();

        let answer = self.read_answer()?;
        select_option(options, &answer)
    }

    fn prompt_free_text(&self, label: &str) -> Option<String> {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} ", self.styled(label, Color::Cyan));
        let _ = stderr.flush();
        self.read_answer()
    }

    fn notify_info(&self, msg: &str) {
        eprintln!("{msg}");
    }

    fn notify_warn(&self, msg: &str) {
        eprintln!("{} {msg}", self.styled("warning:", Color::Yellow));
    }

    fn notify_error(&self, msg: &str) {
        eprintln!("{} {msg}", self.styled("error:", Color::Red));
    }
}

/// Resolve a typed answer against the offered options.
///
/// A 1-based number picks by position; anything else must match an option
/// exactly. An unrecognized answer dismisses the prompt.
fn select_option(options: &[String], answer: &str) -> Option<String> {
    if let Ok(n) = answer.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Some(options[n - 1].clone());
        }
    }
    options.iter().find(|o| o.as_str() == answer).cloned()
}
