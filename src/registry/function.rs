//! Template function definitions.
//!
//! This module provides the core trait and types for pluggable template
//! functions:
//!
//! - [`TemplateFunction`] - the trait every function implements
//! - [`Arity`] - the accepted argument-count range
//! - [`parse_integer`] - shared numeral parsing for function arguments
//!
//! Functions are immutable and registered once at startup; each declares
//! one or more command names (aliases), help strings for `/help`, an arity
//! range, and an asynchronous `run` operation.

use futures_util::future::BoxFuture;

use crate::error::{Result, SlingError};
use crate::registry::{Registry, Value};

/// Accepted argument-count range for a function, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    /// Exactly `n` arguments.
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    /// Between `min` and `max` arguments.
    pub const fn range(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `count` arguments are acceptable.
    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// A pluggable template function.
///
/// Implementations must be `Send + Sync`: the registry shares them across
/// evaluation futures. `run` may suspend (e.g. awaiting a user file pick)
/// and may read the variable store through the registry reference.
pub trait TemplateFunction: Send + Sync {
    /// Command names this function is reachable under. The first entry is
    /// the primary name used in help output.
    fn names(&self) -> &'static [&'static str];

    /// One-line description for `/help`.
    fn summary(&self) -> &'static str;

    /// Usage example, e.g. `${randomBytes(16)}`.
    fn usage(&self) -> &'static str;

    /// Accepted argument count.
    fn arity(&self) -> Arity;

    /// Resolve the call into a value. Arguments arrive as the raw parsed
    /// tokens; numeric arguments are interpreted here, not by the
    /// evaluator.
    fn run<'a>(&'a self, args: &'a [String], registry: &'a Registry) -> BoxFuture<'a, Result<Value>>;
}

/// Parse a numeric function argument: decimal, or hex with a `0x` prefix.
pub fn parse_integer(arg: &str) -> Result<u32> {
    let parsed = match arg.strip_prefix("0x") {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16),
        None => arg.parse(),
    };
    parsed.map_err(|_| SlingError::InvalidArgument {
        argument: arg.to_string(),
        message: "expected a decimal or 0x-prefixed hex numeral".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_exactly() {
        let arity = Arity::exactly(1);
        assert!(arity.accepts(1));
        assert!(!arity.accepts(0));
        assert!(!arity.accepts(2));
    }

    #[test]
    fn arity_range() {
        let arity = Arity::range(0, 2);
        assert!(arity.accepts(0));
        assert!(arity.accepts(2));
        assert!(!arity.accepts(3));
    }

    #[test]
    fn parse_integer_decimal() {
        assert_eq!(parse_integer("255").unwrap(), 255);
        assert_eq!(parse_integer("0").unwrap(), 0);
    }

    #[test]
    fn parse_integer_hex() {
        assert_eq!(parse_integer("0xff").unwrap(), 255);
        assert_eq!(parse_integer("0x1f375").unwrap(), 0x1f375);
    }

    #[test]
    fn parse_integer_rejects_garbage() {
        assert!(matches!(
            parse_integer("abc"),
            Err(SlingError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_integer("0x"),
            Err(SlingError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_integer(""),
            Err(SlingError::InvalidArgument { .. })
        ));
    }
}
