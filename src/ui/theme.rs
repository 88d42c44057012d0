//! Visual theme and styling.

use console::Style;

/// Sling's visual theme.
#[derive(Debug, Clone)]
pub struct SlingTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for received data (cyan).
    pub incoming: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for SlingTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SlingTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            incoming: Style::new().cyan(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            incoming: Style::new(),
            key: Style::new(),
        }
    }
}

/// Whether colored output should be used.
///
/// Respects the `NO_COLOR` convention and requires a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}
