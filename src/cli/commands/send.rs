//! The `/send` and `/binary` commands.

use crate::error::{Result, SlingError};
use crate::eval::evaluate;
use crate::session::Session;
use crate::template::parse;

/// Evaluate a template and send it as strict UTF-8 text.
pub async fn send_text(session: &mut Session, template: &str) -> Result<()> {
    let expr = parse(template)?;
    let bytes = evaluate(&expr, session.registry()).await?;
    let text = String::from_utf8(bytes).map_err(|e| SlingError::InvalidUtf8 {
        buffer: e.into_bytes(),
    })?;
    session.send_payload(text.as_bytes()).await
}

/// Evaluate a template and send the raw bytes.
pub async fn send_binary(session: &mut Session, template: &str) -> Result<()> {
    let expr = parse(template)?;
    let bytes = evaluate(&expr, session.registry()).await?;
    session.send_payload(&bytes).await
}
