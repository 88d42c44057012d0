//! Byte and code-point range functions.

use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;

use crate::error::{Result, SlingError};
use crate::registry::function::{parse_integer, Arity, TemplateFunction};
use crate::registry::{Registry, Value};

/// Parse optional `(end)` / `(start, end)` arguments against defaults.
fn bounds(args: &[String], default_start: u32, default_end: u32) -> Result<(u32, u32)> {
    match args {
        [] => Ok((default_start, default_end)),
        [end] => Ok((default_start, parse_integer(end)?)),
        [start, end] => Ok((parse_integer(start)?, parse_integer(end)?)),
        _ => unreachable!("arity checked before run"),
    }
}

/// `byteRange(start, end)` — every byte value in the inclusive range,
/// ascending. Defaults to the full 0..255 range.
pub struct ByteRange;

impl ByteRange {
    fn emit(&self, args: &[String]) -> Result<Value> {
        let (start, end) = bounds(args, 0, 255)?;
        for (bound, arg_index) in [(start, 0usize), (end, args.len().saturating_sub(1))] {
            if bound > 255 {
                return Err(SlingError::InvalidArgument {
                    argument: args[arg_index].clone(),
                    message: "byte value out of range 0..255".to_string(),
                });
            }
        }
        let bytes: Vec<u8> = (start..=end).map(|v| v as u8).collect();
        Ok(Value::Bytes(bytes))
    }
}

impl TemplateFunction for ByteRange {
    fn names(&self) -> &'static [&'static str] {
        &["byteRange"]
    }
    fn summary(&self) -> &'static str {
        "every byte value in an inclusive range, ascending"
    }
    fn usage(&self) -> &'static str {
        "${byteRange(0, 255)}"
    }
    fn arity(&self) -> Arity {
        Arity::range(0, 2)
    }
    fn run<'a>(
        &'a self,
        args: &'a [String],
        _registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        ready(self.emit(args)).boxed()
    }
}

/// `charRange(start, end)` — every Unicode code point in the inclusive
/// range, UTF-8 encoded, ascending. Defaults to printable ASCII 32..126.
/// Non-scalar values inside the range (surrogates) are skipped.
pub struct CharRange;

impl CharRange {
    fn emit(&self, args: &[String]) -> Result<Value> {
        let (start, end) = bounds(args, 32, 126)?;
        for (bound, arg_index) in [(start, 0usize), (end, args.len().saturating_sub(1))] {
            if bound > 0x10FFFF {
                return Err(SlingError::InvalidArgument {
                    argument: args[arg_index].clone(),
                    message: "code point out of range 0..0x10ffff".to_string(),
                });
            }
        }
        let text: String = (start..=end).filter_map(char::from_u32).collect();
        Ok(Value::Text(text))
    }
}

impl TemplateFunction for CharRange {
    fn names(&self) -> &'static [&'static str] {
        &["charRange"]
    }
    fn summary(&self) -> &'static str {
        "every code point in an inclusive range, UTF-8 encoded"
    }
    fn usage(&self) -> &'static str {
        "${charRange(0x61, 0x7a)}"
    }
    fn arity(&self) -> Arity {
        Arity::range(0, 2)
    }
    fn run<'a>(
        &'a self,
        args: &'a [String],
        _registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        ready(self.emit(args)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn byte_range_defaults_to_all_256_values() {
        let registry = Registry::new();
        let value = ByteRange.run(&[], &registry).await.unwrap();
        match value {
            Value::Bytes(bytes) => {
                assert_eq!(bytes.len(), 256);
                assert_eq!(bytes[0], 0);
                assert_eq!(bytes[255], 255);
                assert!(bytes.windows(2).all(|w| w[0] < w[1]));
            }
            other => panic!("expected bytes, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn byte_range_single_arg_is_end() {
        let registry = Registry::new();
        let value = ByteRange.run(&args(&["3"]), &registry).await.unwrap();
        assert_eq!(value, Value::Bytes(vec![0, 1, 2, 3]));
    }

    #[tokio::test]
    async fn byte_range_two_args() {
        let registry = Registry::new();
        let value = ByteRange
            .run(&args(&["0x41", "0x43"]), &registry)
            .await
            .unwrap();
        assert_eq!(value, Value::Bytes(vec![0x41, 0x42, 0x43]));
    }

    #[tokio::test]
    async fn byte_range_empty_when_start_exceeds_end() {
        let registry = Registry::new();
        let value = ByteRange.run(&args(&["9", "1"]), &registry).await.unwrap();
        assert_eq!(value, Value::Bytes(vec![]));
    }

    #[tokio::test]
    async fn byte_range_rejects_values_above_255() {
        let registry = Registry::new();
        let err = ByteRange.run(&args(&["256"]), &registry).await.unwrap_err();
        assert!(matches!(err, SlingError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn char_range_defaults_to_printable_ascii() {
        let registry = Registry::new();
        let value = CharRange.run(&[], &registry).await.unwrap();
        match value {
            Value::Text(text) => {
                assert_eq!(text.chars().count(), 95);
                assert!(text.starts_with(' '));
                assert!(text.ends_with('~'));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn char_range_encodes_non_ascii() {
        let registry = Registry::new();
        let value = CharRange
            .run(&args(&["0x2603", "0x2603"]), &registry)
            .await
            .unwrap();
        assert_eq!(value, Value::Text("☃".into()));
    }

    #[tokio::test]
    async fn char_range_skips_surrogates() {
        let registry = Registry::new();
        let value = CharRange
            .run(&args(&["0xd7ff", "0xe000"]), &registry)
            .await
            .unwrap();
        match value {
            Value::Text(text) => {
                assert_eq!(text.chars().count(), 2);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn char_range_rejects_values_beyond_unicode() {
        let registry = Registry::new();
        let err = CharRange
            .run(&args(&["0x110000"]), &registry)
            .await
            .unwrap_err();
        assert!(matches!(err, SlingError::InvalidArgument { .. }));
    }
}
