//! Error types for sling operations.
//!
//! This module defines [`SlingError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SlingError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SlingError::Other`) for unexpected errors
//! - Template errors carry enough structured data to render a caret
//!   diagnostic pointing at the offending position

use thiserror::Error;

/// Core error type for sling operations.
#[derive(Debug, Error)]
pub enum SlingError {
    /// A template string did not match the grammar.
    ///
    /// `position` is the number of characters consumed before the mismatch,
    /// i.e. `chars(expression) - chars(remainder)`, computed once at the
    /// parse entry point.
    #[error("invalid template expression at position {position}: expected {}", format_expected(.expected))]
    InvalidTemplateExpression {
        expression: String,
        remainder: String,
        expected: Vec<String>,
        position: usize,
    },

    /// A function argument is syntactically or semantically invalid.
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument { argument: String, message: String },

    /// A variable resolved to the wrong category of value.
    #[error("variable '{variable}' has the wrong type, expected {}", .expected.join(" or "))]
    InvalidDataType {
        variable: String,
        expected: Vec<&'static str>,
    },

    /// An evaluated payload is not valid UTF-8 on the text-sending path.
    #[error("payload is not valid UTF-8 ({} bytes)", .buffer.len())]
    InvalidUtf8 { buffer: Vec<u8> },

    /// A variable reference did not match any stored value or function.
    #[error("unknown variable: {variable}")]
    UnknownVariable { variable: String },

    /// A function call named no registered function.
    #[error("unknown instruction: {name}")]
    UnknownInstruction { name: String },

    /// IO error wrapper (socket, file and prompt failures).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlingError {
    /// Build an [`SlingError::InvalidTemplateExpression`] from the original
    /// source and the unconsumed remainder, precomputing the position.
    pub fn invalid_template(
        expression: impl Into<String>,
        remainder: impl Into<String>,
        expected: Vec<String>,
    ) -> Self {
        let expression = expression.into();
        let remainder = remainder.into();
        let position = expression.chars().count() - remainder.chars().count();
        Self::InvalidTemplateExpression {
            expression,
            remainder,
            expected,
            position,
        }
    }

    /// Render a multi-line caret diagnostic for template errors.
    ///
    /// Returns `None` for every other variant; callers fall back to the
    /// `Display` message.
    pub fn caret_diagnostic(&self) -> Option<String> {
        match self {
            Self::InvalidTemplateExpression {
                expression,
                expected,
                position,
                ..
            } => {
                let caret = " ".repeat(*position);
                Some(format!(
                    "{}\n{}^\nexpected {}",
                    expression,
                    caret,
                    format_expected(expected)
                ))
            }
            _ => None,
        }
    }
}

fn format_expected(expected: &[String]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => single.clone(),
        [head @ .., last] => format!("{} or {}", head.join(", "), last),
    }
}

/// Result type alias for sling operations.
pub type Result<T> = std::result::Result<T, SlingError>;
