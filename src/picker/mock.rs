//! Mock file picker for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::error::Result;
use crate::picker::FilePicker;

/// A picker that serves canned bytes and counts how often it was asked.
pub struct MockPicker {
    contents: Vec<u8>,
    picks: AtomicUsize,
}

impl MockPicker {
    /// Create a picker that always yields `contents`.
    pub fn new(contents: Vec<u8>) -> Self {
        Self {
            contents,
            picks: AtomicUsize::new(0),
        }
    }

    /// How many times `pick` was awaited.
    pub fn picks(&self) -> usize {
        self.picks.load(Ordering::SeqCst)
    }
}

impl FilePicker for MockPicker {
    fn pick(&self) -> BoxFuture<'_, Result<Vec<u8>>> {
        async move {
            self.picks.fetch_add(1, Ordering::SeqCst);
            Ok(self.contents.clone())
        }
        .boxed()
    }
}
