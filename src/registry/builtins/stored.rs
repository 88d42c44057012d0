//! Stored-value reader functions.

use futures_util::future::{ready, BoxFuture};
use futures_util::FutureExt;

use crate::error::{Result, SlingError};
use crate::registry::function::{Arity, TemplateFunction};
use crate::registry::{Lookup, Registry, Value};

/// Name used when no argument is given.
const DEFAULT_NAME: &str = "default";

/// Which value categories a reader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeFilter {
    Binary,
    Text,
    Any,
}

impl TypeFilter {
    fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (TypeFilter::Any, _) => true,
            (TypeFilter::Binary, Value::Bytes(_)) => true,
            (TypeFilter::Text, Value::Text(_)) => true,
            _ => false,
        }
    }

    fn expected(&self) -> Vec<&'static str> {
        match self {
            TypeFilter::Binary => vec!["binary"],
            TypeFilter::Text => vec!["text"],
            TypeFilter::Any => vec!["binary", "text"],
        }
    }
}

/// `bin(name)` / `text(name)` / `var(name)` — read a stored value with a
/// declared expected type. The name defaults to `default` when omitted.
pub struct StoredValue {
    filter: TypeFilter,
}

impl StoredValue {
    /// The `bin` reader: requires a `Bytes` value.
    pub fn binary() -> Self {
        Self {
            filter: TypeFilter::Binary,
        }
    }

    /// The `text` reader: requires a `Text` value.
    pub fn text() -> Self {
        Self {
            filter: TypeFilter::Text,
        }
    }

    /// The `var` reader: accepts either category.
    pub fn any() -> Self {
        Self {
            filter: TypeFilter::Any,
        }
    }

    fn read(&self, args: &[String], registry: &Registry) -> Result<Value> {
        let name = args.first().map(String::as_str).unwrap_or(DEFAULT_NAME);
        match registry.lookup(name) {
            Some(Lookup::Value(value)) if self.filter.accepts(value) => Ok(value.clone()),
            Some(_) => Err(SlingError::InvalidDataType {
                variable: name.to_string(),
                expected: self.filter.expected(),
            }),
            None => Err(SlingError::UnknownVariable {
                variable: name.to_string(),
            }),
        }
    }
}

impl TemplateFunction for StoredValue {
    fn names(&self) -> &'static [&'static str] {
        match self.filter {
            TypeFilter::Binary => &["bin"],
            TypeFilter::Text => &["text"],
            TypeFilter::Any => &["var"],
        }
    }
    fn summary(&self) -> &'static str {
        match self.filter {
            TypeFilter::Binary => "read a stored binary value",
            TypeFilter::Text => "read a stored text value",
            TypeFilter::Any => "read a stored value of either type",
        }
    }
    fn usage(&self) -> &'static str {
        match self.filter {
            TypeFilter::Binary => "${bin(name)}",
            TypeFilter::Text => "${text(name)}",
            TypeFilter::Any => "${var(name)}",
        }
    }
    fn arity(&self) -> Arity {
        Arity::range(0, 1)
    }
    fn run<'a>(
        &'a self,
        args: &'a [String],
        registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        ready(self.read(args, registry)).boxed()
    }
}
