//! Command-line interface and slash-command dispatch.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs};
