//! Wall-clock function.

use chrono::Utc;
use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;

use crate::error::Result;
use crate::registry::function::{Arity, TemplateFunction};
use crate::registry::{Registry, Value};

/// `time()` — the current Unix time in whole seconds, as decimal text.
pub struct Time;

impl TemplateFunction for Time {
    fn names(&self) -> &'static [&'static str] {
        &["time", "now"]
    }
    fn summary(&self) -> &'static str {
        "current Unix time in whole seconds"
    }
    fn usage(&self) -> &'static str {
        "${time()}"
    }
    fn arity(&self) -> Arity {
        Arity::exactly(0)
    }
    fn run<'a>(
        &'a self,
        _args: &'a [String],
        _registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        ready(Ok(Value::Text(Utc::now().timestamp().to_string()))).boxed()
    }
}
