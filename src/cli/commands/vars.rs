//! The `/vars`, `/set` and `/unset` commands.
//!
//! Thin wrappers over registry operations; `/set` runs the full
//! parse-evaluate pipeline so stored values can themselves be built from
//! templates.

use crate::error::Result;
use crate::eval::evaluate;
use crate::registry::Value;
use crate::session::Session;
use crate::template::parse;

/// Longest preview shown per value in `/vars`.
const PREVIEW_CHARS: usize = 40;

/// List stored variables with type and preview, then function names.
pub fn list(session: &Session) {
    let output = session.output();
    let registry = session.registry();

    output.header("variables");
    let names = registry.variable_names();
    if names.is_empty() {
        output.message("  (none)");
    }
    for name in names {
        if let Some(value) = registry.variable(name) {
            output.key_value(name, &format!("[{}] {}", value.type_name(), preview(value)));
        }
    }

    output.header("functions");
    output.message(&format!("  {}", registry.function_names().join(", ")));
}

/// Evaluate a template and store the result under `name`.
pub async fn set(session: &mut Session, name: &str, template: &str) -> Result<()> {
    let expr = parse(template)?;
    let bytes = evaluate(&expr, session.registry()).await?;
    let value = Value::from_buffer(bytes);
    let description = format!("[{}] {} bytes", value.type_name(), value.len());
    session.registry_mut().set_variable(name, value);
    session
        .output()
        .success(&format!("set {} = {}", name, description));
    Ok(())
}

/// Remove a stored value.
pub fn unset(session: &mut Session, name: &str) {
    if session.registry_mut().unset_variable(name) {
        session.output().success(&format!("unset {}", name));
    } else {
        session
            .output()
            .warning(&format!("no stored variable '{}'", name));
    }
}

fn preview(value: &Value) -> String {
    match value {
        Value::Text(text) => {
            let shown: String = text.chars().take(PREVIEW_CHARS).collect();
            if text.chars().count() > PREVIEW_CHARS {
                format!("{:?}…", shown)
            } else {
                format!("{:?}", shown)
            }
        }
        Value::Bytes(bytes) => {
            let shown = hex::encode(&bytes[..bytes.len().min(PREVIEW_CHARS / 2)]);
            if bytes.len() > PREVIEW_CHARS / 2 {
                format!("{}… ({} bytes)", shown, bytes.len())
            } else {
                format!("{} ({} bytes)", shown, bytes.len())
            }
        }
    }
}
