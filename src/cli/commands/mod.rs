//! Session slash-commands and CLI subcommands.

pub mod completions;
pub mod connect;
pub mod dispatcher;
pub mod help;
pub mod send;
pub mod vars;

pub use dispatcher::{dispatch, Flow, SlashCommand};
