//! Interactive session.
//!
//! A [`Session`] owns the registry, the optional connection and the input
//! history, and drives the read-dispatch loop: each line is either a
//! slash-command or shorthand for `/send <line>`. Command errors are
//! rendered and the loop continues; only an interrupted prompt or `/quit`
//! ends the session.

pub mod history;

pub use history::PromptHistory;

use crate::cli::commands::dispatcher::{dispatch, Flow};
use crate::connection::Connection;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui::Output;

/// State for one interactive session.
pub struct Session {
    registry: Registry,
    output: Output,
    connection: Option<Connection>,
    // Taken while the blocking prompt owns it, then put back.
    history: Option<PromptHistory>,
}

impl Session {
    /// Create a session with no open connection.
    pub fn new(registry: Registry, output: Output, history: PromptHistory) -> Self {
        Self {
            registry,
            output,
            connection: None,
            history: Some(history),
        }
    }

    /// The variable/function registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access for `/set` and `/unset`.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The session's output writer.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Whether a connection is open.
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Open a connection, replacing any existing one.
    pub async fn connect(&mut self, address: &str) -> Result<()> {
        if let Some(old) = self.connection.take() {
            self.output
                .warning(&format!("replacing connection to {}", old.peer()));
            old.close();
        }
        let connection = Connection::open(address, self.output.clone()).await?;
        self.output
            .success(&format!("connected to {}", connection.peer()));
        self.connection = Some(connection);
        Ok(())
    }

    /// Close the connection if one is open. Returns whether one was.
    pub fn disconnect(&mut self) -> bool {
        match self.connection.take() {
            Some(connection) => {
                let peer = connection.peer();
                connection.close();
                self.output.message(&format!("disconnected from {}", peer));
                true
            }
            None => false,
        }
    }

    /// Send a finished payload over the open connection.
    pub async fn send_payload(&mut self, bytes: &[u8]) -> Result<()> {
        let Some(connection) = self.connection.as_mut() else {
            return Err(anyhow::anyhow!("not connected — use /connect <host:port>").into());
        };
        connection.send(bytes).await?;
        self.output.sent(bytes.len());
        Ok(())
    }

    /// Run the read-dispatch loop until `/quit` or an interrupted prompt.
    pub async fn run(&mut self) -> Result<()> {
        self.output
            .message("type a template to send it, /help for commands");

        loop {
            let Some(line) = self.prompt_line().await? else {
                break;
            };
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            tracing::debug!(line = %line, "dispatching input");
            match dispatch(self, &line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => self.output.render_error(&err),
            }
        }

        if let Some(connection) = self.connection.take() {
            connection.close();
        }
        Ok(())
    }

    /// Read one line from the terminal. `None` means the prompt was
    /// interrupted (ctrl-c / EOF) and the session should end.
    async fn prompt_line(&mut self) -> Result<Option<String>> {
        let mut history = self.history.take().unwrap_or_default();

        let (line, history) = tokio::task::spawn_blocking(move || {
            let line = dialoguer::Input::<String>::new()
                .with_prompt("sling")
                .allow_empty(true)
                .history_with(&mut history)
                .interact_text();
            (line, history)
        })
        .await
        .map_err(|e| anyhow::anyhow!("prompt task failed: {e}"))?;

        self.history = Some(history);

        match line {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::Interrupted | std::io::ErrorKind::UnexpectedEof
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(anyhow::anyhow!("prompt failed: {e}").into()),
        }
    }
}
