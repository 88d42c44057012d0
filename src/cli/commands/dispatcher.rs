//! Slash-command dispatching.
//!
//! This module provides the session command infrastructure:
//! - [`SlashCommand`] - the parsed form of a `/command` line
//! - [`Flow`] - whether the session loop continues
//! - [`dispatch`] - routing a raw input line to its implementation
//!
//! A line that does not start with `/` is shorthand for `/send <line>`.

use crate::error::Result;
use crate::session::Session;

use super::{connect, help, send, vars};

/// A parsed slash-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// `/send <template>` — evaluate and send as strict UTF-8 text.
    Send { template: String },
    /// `/binary <template>` — evaluate and send raw bytes.
    Binary { template: String },
    /// `/vars` — list stored variables and function names.
    Vars,
    /// `/set <name> <template>` — evaluate and store the result.
    Set { name: String, template: String },
    /// `/unset <name>` — remove a stored value.
    Unset { name: String },
    /// `/connect <host:port>`.
    Connect { address: String },
    /// `/disconnect`.
    Disconnect,
    /// `/help`.
    Help,
    /// `/quit`.
    Quit,
}

impl SlashCommand {
    /// Parse the text after the leading `/`.
    ///
    /// Returns a human-readable usage message on failure; unknown commands
    /// are not errors of the core taxonomy, they only produce a warning.
    pub fn parse(input: &str) -> std::result::Result<Self, String> {
        let (name, rest) = match input.split_once(' ') {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        match name {
            "send" => {
                if rest.is_empty() {
                    return Err("usage: /send <template>".to_string());
                }
                Ok(Self::Send {
                    template: rest.to_string(),
                })
            }
            "binary" => {
                if rest.is_empty() {
                    return Err("usage: /binary <template>".to_string());
                }
                Ok(Self::Binary {
                    template: rest.to_string(),
                })
            }
            "vars" => Ok(Self::Vars),
            "set" => match rest.split_once(' ') {
                Some((var_name, template)) if !template.trim().is_empty() => Ok(Self::Set {
                    name: var_name.to_string(),
                    template: template.trim().to_string(),
                }),
                _ => Err("usage: /set <name> <template>".to_string()),
            },
            "unset" => {
                if rest.is_empty() || rest.contains(' ') {
                    return Err("usage: /unset <name>".to_string());
                }
                Ok(Self::Unset {
                    name: rest.to_string(),
                })
            }
            "connect" => {
                if rest.is_empty() {
                    return Err("usage: /connect <host:port>".to_string());
                }
                Ok(Self::Connect {
                    address: rest.to_string(),
                })
            }
            "disconnect" => Ok(Self::Disconnect),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '/{}' — type /help", other)),
        }
    }
}

/// Whether the session loop continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Route one input line to its command implementation.
///
/// Malformed command lines produce a warning and continue; template and
/// connection errors propagate to the caller for rendering.
pub async fn dispatch(session: &mut Session, line: &str) -> Result<Flow> {
    let command = match line.strip_prefix('/') {
        Some(rest) => match SlashCommand::parse(rest) {
            Ok(command) => command,
            Err(message) => {
                session.output().warning(&message);
                return Ok(Flow::Continue);
            }
        },
        None => SlashCommand::Send {
            template: line.to_string(),
        },
    };

    match command {
        SlashCommand::Send { template } => send::send_text(session, &template).await?,
        SlashCommand::Binary { template } => send::send_binary(session, &template).await?,
        SlashCommand::Vars => vars::list(session),
        SlashCommand::Set { name, template } => vars::set(session, &name, &template).await?,
        SlashCommand::Unset { name } => vars::unset(session, &name),
        SlashCommand::Connect { address } => connect::connect(session, &address).await?,
        SlashCommand::Disconnect => connect::disconnect(session),
        SlashCommand::Help => help::show(session),
        SlashCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_send_with_template() {
        assert_eq!(
            SlashCommand::parse("send hello ${time()}"),
            Ok(SlashCommand::Send {
                template: "hello ${time()}".to_string()
            })
        );
    }

    #[test]
    fn send_requires_a_template() {
        assert!(SlashCommand::parse("send").is_err());
    }

    #[test]
    fn parses_binary() {
        assert_eq!(
            SlashCommand::parse("binary \\xff"),
            Ok(SlashCommand::Binary {
                template: "\\xff".to_string()
            })
        );
    }

    #[test]
    fn parses_set_with_name_and_template() {
        assert_eq!(
            SlashCommand::parse("set token ${randomBytes(8)}"),
            Ok(SlashCommand::Set {
                name: "token".to_string(),
                template: "${randomBytes(8)}".to_string()
            })
        );
    }

    #[test]
    fn set_requires_name_and_template() {
        assert!(SlashCommand::parse("set").is_err());
        assert!(SlashCommand::parse("set onlyname").is_err());
    }

    #[test]
    fn parses_unset() {
        assert_eq!(
            SlashCommand::parse("unset token"),
            Ok(SlashCommand::Unset {
                name: "token".to_string()
            })
        );
        assert!(SlashCommand::parse("unset a b").is_err());
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(SlashCommand::parse("vars"), Ok(SlashCommand::Vars));
        assert_eq!(
            SlashCommand::parse("disconnect"),
            Ok(SlashCommand::Disconnect)
        );
        assert_eq!(SlashCommand::parse("help"), Ok(SlashCommand::Help));
        assert_eq!(SlashCommand::parse("quit"), Ok(SlashCommand::Quit));
        assert_eq!(SlashCommand::parse("exit"), Ok(SlashCommand::Quit));
    }

    #[test]
    fn parses_connect_with_address() {
        assert_eq!(
            SlashCommand::parse("connect localhost:4000"),
            Ok(SlashCommand::Connect {
                address: "localhost:4000".to_string()
            })
        );
        assert!(SlashCommand::parse("connect").is_err());
    }

    #[test]
    fn unknown_command_mentions_help() {
        let err = SlashCommand::parse("bogus").unwrap_err();
        assert!(err.contains("/help"));
    }
}
