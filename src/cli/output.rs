//! Output formatting for CLI commands

use std::cell::RefCell;

use dialoguer::console::style;

/// Tone of a printed line, mapped to a terminal colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Neutral progress information
    Info,
    Success,
    Warning,
    Failure,
    /// Raw text from an external tool, printed as-is
    Plain,
}

/// A line recorded by a capturing [`Output`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

enum Sink {
    Terminal,
    Capture(RefCell<Vec<Line>>),
}

/// Output helper for consistent formatting
pub struct Output {
    sink: Sink,
}

impl Output {
    /// Creates an output that prints to the terminal
    pub fn terminal() -> Self {
        Self {
            sink: Sink::Terminal,
        }
    }

    /// Creates an output that records lines instead of printing them
    pub fn capture() -> Self {
        Self {
            sink: Sink::Capture(RefCell::new(Vec::new())),
        }
    }

    /// Prints a progress message
    pub fn info(&self, message: &str) {
        self.emit(Tone::Info, message);
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        self.emit(Tone::Success, message);
    }

    /// Prints a warning message
    pub fn warn(&self, message: &str) {
        self.emit(Tone::Warning, message);
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        self.emit(Tone::Failure, message);
    }

    /// Echoes text captured from an external tool with the given tone
    ///
    /// Empty text still produces a blank line.
    pub fn echo(&self, text: &str, tone: Tone) {
        self.emit(tone, text.trim_end_matches('\n'));
    }

    /// Prints a line with the given tone
    pub fn emit(&self, tone: Tone, message: &str) {
        match &self.sink {
            Sink::Terminal => {
                let styled = match tone {
                    Tone::Info | Tone::Plain => style(message),
                    Tone::Success => style(message).green(),
                    Tone::Warning => style(message).yellow(),
                    Tone::Failure => style(message).red(),
                };
                println!("{}", styled);
            }
            Sink::Capture(lines) => lines.borrow_mut().push(Line {
                tone,
                text: message.to_string(),
            }),
        }
    }

    /// Returns the recorded lines (empty for a terminal output)
    pub fn lines(&self) -> Vec<Line> {
        match &self.sink {
            Sink::Terminal => Vec::new(),
            Sink::Capture(lines) => lines.borrow().clone(),
        }
    }

    /// Returns true if any recorded line equals `text`
    pub fn contains(&self, text: &str) -> bool {
        self.lines().iter().any(|line| line.text == text)
    }
}
