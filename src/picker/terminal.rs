//! Terminal file picker.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::error::Result;
use crate::picker::FilePicker;

/// Prompts for a file path on the terminal and reads the file.
pub struct TerminalPicker;

impl TerminalPicker {
    pub fn new() -> Self {
        Self
    }

    async fn pick_inner(&self) -> Result<Vec<u8>> {
        let path = tokio::task::spawn_blocking(|| {
            dialoguer::Input::<String>::new()
                .with_prompt("file to send")
                .interact_text()
        })
        .await
        .map_err(|e| anyhow::anyhow!("file prompt task failed: {e}"))?
        .map_err(|e| anyhow::anyhow!("file prompt failed: {e}"))?;

        let path = path.trim().to_string();
        tracing::debug!(path = %path, "reading picked file");
        let bytes = tokio::fs::read(&path).await?;
        Ok(bytes)
    }
}

impl Default for TerminalPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePicker for TerminalPicker {
    fn pick(&self) -> BoxFuture<'_, Result<Vec<u8>>> {
        self.pick_inner().boxed()
    }
}
