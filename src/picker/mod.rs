//! File selection collaborator.
//!
//! The `file()` template function delegates to an injected [`FilePicker`]:
//! the core awaits `pick()` and never knows how the bytes were chosen.
//!
//! - [`terminal`] - prompts for a path and reads it
//! - [`mock`] - canned responses for tests

pub mod mock;
pub mod terminal;

pub use mock::MockPicker;
pub use terminal::TerminalPicker;

use futures_util::future::BoxFuture;

use crate::error::Result;

/// Asynchronous source of user-selected file contents.
///
/// `pick` may suspend indefinitely (e.g. waiting for the user to type a
/// path); the evaluation awaiting it blocks until the pick resolves.
pub trait FilePicker: Send + Sync {
    /// Obtain the raw bytes of a user-selected file.
    fn pick(&self) -> BoxFuture<'_, Result<Vec<u8>>>;
}
