//! Random payload functions.

use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;
use rand::{Rng, RngCore};

use crate::error::Result;
use crate::registry::function::{parse_integer, Arity, TemplateFunction};
use crate::registry::{Registry, Value};

const DEFAULT_COUNT: u32 = 16;

fn count(args: &[String]) -> Result<usize> {
    match args.first() {
        Some(arg) => Ok(parse_integer(arg)? as usize),
        None => Ok(DEFAULT_COUNT as usize),
    }
}

/// `randomBytes(n)` — n independently drawn uniform bytes. Default n=16.
pub struct RandomBytes;

impl RandomBytes {
    fn emit(&self, args: &[String]) -> Result<Value> {
        let n = count(args)?;
        let mut bytes = vec![0u8; n];
        rand::thread_rng().fill_bytes(&mut bytes);
        Ok(Value::Bytes(bytes))
    }
}

impl TemplateFunction for RandomBytes {
    fn names(&self) -> &'static [&'static str] {
        &["randomBytes"]
    }
    fn summary(&self) -> &'static str {
        "uniformly random bytes"
    }
    fn usage(&self) -> &'static str {
        "${randomBytes(16)}"
    }
    fn arity(&self) -> Arity {
        Arity::range(0, 1)
    }
    fn run<'a>(
        &'a self,
        args: &'a [String],
        _registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        ready(self.emit(args)).boxed()
    }
}

/// `randomChars(n)` — n uniform code points in [0, 0xFFFF], UTF-8
/// encoded. Default n=16. Surrogate values are redrawn so the output is
/// always valid UTF-8.
pub struct RandomChars;

impl RandomChars {
    fn emit(&self, args: &[String]) -> Result<Value> {
        let n = count(args)?;
        let mut rng = rand::thread_rng();
        let mut text = String::with_capacity(n * 3);
        for _ in 0..n {
            let scalar = loop {
                let value: u32 = rng.gen_range(0..=0xFFFF);
                if let Some(c) = char::from_u32(value) {
                    break c;
                }
            };
            text.push(scalar);
        }
        Ok(Value::Text(text))
    }
}

impl TemplateFunction for RandomChars {
    fn names(&self) -> &'static [&'static str] {
        &["randomChars"]
    }
    fn summary(&self) -> &'static str {
        "uniformly random code points below 0x10000"
    }
    fn usage(&self) -> &'static str {
        "${randomChars(16)}"
    }
    fn arity(&self) -> Arity {
        Arity::range(0, 1)
    }
    fn run<'a>(
        &'a self,
        args: &'a [String],
        _registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        ready(self.emit(args)).boxed()
    }
}
