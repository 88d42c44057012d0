//! Hex string decoding function.

use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;

use crate::error::{Result, SlingError};
use crate::registry::function::{Arity, TemplateFunction};
use crate::registry::{Registry, Value};

/// `hex(string)` — decode a hex string into bytes.
///
/// The string is chunked into consecutive 2-character pairs; a trailing
/// unpaired character is silently dropped.
pub struct HexDecode;

impl HexDecode {
    fn decode(&self, arg: &str) -> Result<Value> {
        let chars: Vec<char> = arg.chars().collect();
        let mut bytes = Vec::with_capacity(chars.len() / 2);
        for pair in chars.chunks_exact(2) {
            let hi = hex_digit(pair[0], arg)?;
            let lo = hex_digit(pair[1], arg)?;
            bytes.push((hi << 4) | lo);
        }
        Ok(Value::Bytes(bytes))
    }
}

fn hex_digit(c: char, arg: &str) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SlingError::InvalidArgument {
            argument: arg.to_string(),
            message: format!("invalid hex digit '{}'", c),
        })
}

impl TemplateFunction for HexDecode {
    fn names(&self) -> &'static [&'static str] {
        &["hex"]
    }
    fn summary(&self) -> &'static str {
        "decode a hex string into raw bytes"
    }
    fn usage(&self) -> &'static str {
        "${hex(68656c6c6f)}"
    }
    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }
    fn run<'a>(
        &'a self,
        args: &'a [String],
        _registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        ready(self.decode(&args[0])).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn decodes_pairs() {
        let registry = Registry::new();
        let args = vec!["68656c6c6f".to_string()];
        let value = HexDecode.run(&args, &registry).await.unwrap();
        assert_eq!(value, Value::Bytes(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn odd_length_drops_trailing_char() {
        let registry = Registry::new();
        let args = vec!["abc".to_string()];
        let value = HexDecode.run(&args, &registry).await.unwrap();
        assert_eq!(value, Value::Bytes(vec![0xab]));
    }

    #[tokio::test]
    async fn single_char_decodes_to_nothing() {
        let registry = Registry::new();
        let args = vec!["f".to_string()];
        let value = HexDecode.run(&args, &registry).await.unwrap();
        assert_eq!(value, Value::Bytes(vec![]));
    }

    #[tokio::test]
    async fn invalid_digit_is_rejected() {
        let registry = Registry::new();
        let args = vec!["zz".to_string()];
        let err = HexDecode.run(&args, &registry).await.unwrap_err();
        match err {
            SlingError::InvalidArgument { argument, message } => {
                assert_eq!(argument, "zz");
                assert!(message.contains("invalid hex digit"));
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }
}
