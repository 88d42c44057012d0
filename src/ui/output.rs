//! Output mode and writer.

use crate::error::SlingError;
use crate::ui::theme::SlingTheme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including sent-byte summaries.
    Verbose,
    /// Show status and received data.
    #[default]
    Normal,
    /// Show received data and errors only.
    Quiet,
}

impl OutputMode {
    /// Whether this mode shows sent-payload summaries.
    pub fn shows_traffic_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Whether this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Writer for session output, shared with the socket reader task.
#[derive(Debug, Clone)]
pub struct Output {
    theme: SlingTheme,
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            SlingTheme::new()
        } else {
            SlingTheme::plain()
        };
        Self { theme, mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a plain status line.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.success.apply_to(msg));
        }
    }

    /// Write a warning line.
    pub fn warning(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.warning.apply_to(msg));
        }
    }

    /// Write an error line. Always shown.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }

    /// Render a sling error, with a caret diagnostic for template errors.
    pub fn render_error(&self, err: &SlingError) {
        match err.caret_diagnostic() {
            Some(diagnostic) => {
                self.error(&err.to_string());
                for line in diagnostic.lines() {
                    eprintln!("  {}", self.theme.dim.apply_to(line));
                }
            }
            None => self.error(&err.to_string()),
        }
    }

    /// Note a sent payload. Verbose mode only.
    pub fn sent(&self, bytes: usize) {
        if self.mode.shows_traffic_details() {
            println!(
                "{}",
                self.theme.dim.apply_to(format!("» sent {} bytes", bytes))
            );
        }
    }

    /// Dump received data: text when it decodes as UTF-8, hex otherwise.
    /// Always shown.
    pub fn incoming(&self, bytes: &[u8]) {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                for line in text.lines() {
                    println!("{} {}", self.theme.incoming.apply_to("«"), line);
                }
            }
            Err(_) => {
                println!(
                    "{} {} {}",
                    self.theme.incoming.apply_to("«"),
                    hex::encode(bytes),
                    self.theme.dim.apply_to(format!("({} bytes)", bytes.len()))
                );
            }
        }
    }

    /// Write a key-value line, e.g. for `/vars`.
    pub fn key_value(&self, key: &str, value: &str) {
        println!("  {} {}", self.theme.key.apply_to(key), value);
    }

    /// Write a section header line.
    pub fn header(&self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.highlight.apply_to(title));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_shows_traffic_details() {
        assert!(OutputMode::Verbose.shows_traffic_details());
        assert!(!OutputMode::Normal.shows_traffic_details());
    }

    #[test]
    fn quiet_suppresses_status() {
        assert!(!OutputMode::Quiet.shows_status());
        assert!(OutputMode::Normal.shows_status());
    }

    #[test]
    fn output_is_cloneable_for_the_reader_task() {
        let output = Output::new(OutputMode::Normal, false);
        let clone = output.clone();
        assert_eq!(clone.mode(), OutputMode::Normal);
    }
}
