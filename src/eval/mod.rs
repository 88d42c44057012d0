//! Particle evaluation.
//!
//! [`evaluate`] resolves a parsed [`TemplateExpression`] against a
//! [`Registry`] into one contiguous byte buffer. Each particle resolves
//! independently; function particles may suspend (e.g. `file()` awaiting a
//! user pick). All resolutions are polled concurrently and joined before
//! concatenation, which always follows original particle order, never
//! completion order.
//!
//! Evaluation never caches: re-evaluating the same expression against a
//! changed registry yields bytes from the then-current store.

use futures_util::future::join_all;

use crate::error::{Result, SlingError};
use crate::registry::{Lookup, Registry};
use crate::template::{Particle, TemplateExpression};

/// Resolve every particle and concatenate the results in sequence order.
pub async fn evaluate(expr: &TemplateExpression, registry: &Registry) -> Result<Vec<u8>> {
    let resolutions = join_all(expr.iter().map(|p| resolve(p, registry))).await;

    let mut buffer = Vec::new();
    for resolution in resolutions {
        buffer.extend_from_slice(&resolution?);
    }
    tracing::debug!(
        particles = expr.len(),
        bytes = buffer.len(),
        "evaluated template expression"
    );
    Ok(buffer)
}

/// Resolve one particle into its byte sequence.
async fn resolve(particle: &Particle, registry: &Registry) -> Result<Vec<u8>> {
    match particle {
        Particle::Text(text) => Ok(text.as_bytes().to_vec()),

        // A raw byte, bypassing UTF-8 encoding entirely.
        Particle::Byte(value) => Ok(vec![*value]),

        Particle::Codepoint(c) => {
            let mut buf = [0u8; 4];
            Ok(c.encode_utf8(&mut buf).as_bytes().to_vec())
        }

        Particle::Variable(name) => match registry.lookup(name) {
            Some(Lookup::Value(value)) => Ok(value.to_bytes()),
            Some(Lookup::Function(_)) => Err(SlingError::InvalidDataType {
                variable: name.clone(),
                expected: vec!["binary", "text"],
            }),
            None => Err(SlingError::UnknownVariable {
                variable: name.clone(),
            }),
        },

        Particle::Function { name, args } => {
            let function =
                registry
                    .function(name)
                    .ok_or_else(|| SlingError::UnknownInstruction {
                        name: name.clone(),
                    })?;
            let arity = function.arity();
            if !arity.accepts(args.len()) {
                let accepted = if arity.min == arity.max {
                    format!("{} arguments", arity.min)
                } else {
                    format!("{} to {} arguments", arity.min, arity.max)
                };
                return Err(SlingError::InvalidArgument {
                    argument: args.join(","),
                    message: format!("{} takes {}, got {}", name, accepted, args.len()),
                });
            }
            let value = function.run(args, registry).await?;
            Ok(value.into_bytes())
        }
    }
}
