//! Terminal output components.
//!
//! This module provides:
//! - [`Output`] - the session's output writer, shared with the socket
//!   reader task
//! - [`OutputMode`] - verbosity selection
//! - [`SlingTheme`] - console styles with a no-color variant

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::{should_use_colors, SlingTheme};
