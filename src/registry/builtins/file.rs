//! File contents function.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::error::Result;
use crate::picker::FilePicker;
use crate::registry::function::{Arity, TemplateFunction};
use crate::registry::{Registry, Value};

/// `file()` — the raw bytes of a user-selected file.
///
/// Delegates to the injected [`FilePicker`]; the evaluation awaiting this
/// call suspends until the pick resolves.
pub struct FileContents {
    picker: Arc<dyn FilePicker>,
}

impl FileContents {
    pub fn new(picker: Arc<dyn FilePicker>) -> Self {
        Self { picker }
    }
}

impl TemplateFunction for FileContents {
    fn names(&self) -> &'static [&'static str] {
        &["file"]
    }
    fn summary(&self) -> &'static str {
        "raw bytes of a user-selected file"
    }
    fn usage(&self) -> &'static str {
        "${file()}"
    }
    fn arity(&self) -> Arity {
        Arity::exactly(0)
    }
    fn run<'a>(
        &'a self,
        _args: &'a [String],
        _registry: &'a Registry,
    ) -> BoxFuture<'a, Result<Value>> {
        async move {
            let bytes = self.picker.pick().await?;
            tracing::debug!(len = bytes.len(), "file pick resolved");
            Ok(Value::Bytes(bytes))
        }
        .boxed()
    }
}
