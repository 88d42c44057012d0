//! Persistent input history.
//!
//! Past input lines are kept most-recent-first, capped, and saved as JSON.
//! Load and save failures degrade to an empty in-memory history; a broken
//! history file never blocks the session.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of remembered lines.
const MAX_ENTRIES: usize = 200;

/// On-disk history format.
#[derive(Debug, Serialize, Deserialize)]
struct HistoryFile {
    /// Schema version for migration.
    version: u32,
    saved_at: DateTime<Utc>,
    entries: Vec<String>,
}

/// Input history with best-effort persistence.
///
/// Implements [`dialoguer::History`] so the input prompt can scroll
/// through past lines with the arrow keys.
#[derive(Debug, Default)]
pub struct PromptHistory {
    path: Option<PathBuf>,
    entries: VecDeque<String>,
}

impl PromptHistory {
    /// Load history from `override_path`, or from the default location
    /// (`$HOME/.sling_history.json`) when none is given.
    pub fn load(override_path: Option<PathBuf>) -> Self {
        let path = override_path.or_else(default_path);
        let entries = path
            .as_ref()
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|raw| serde_json::from_str::<HistoryFile>(&raw).ok())
            .map(|file| file.entries.into_iter().take(MAX_ENTRIES).collect())
            .unwrap_or_default();
        Self { path, entries }
    }

    /// An in-memory history that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Remembered lines, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Record a line: deduplicate against the most recent entry, enforce
    /// the cap, persist best-effort.
    pub fn push(&mut self, line: &str) {
        if line.is_empty() || self.entries.front().map(String::as_str) == Some(line) {
            return;
        }
        self.entries.push_front(line.to_string());
        self.entries.truncate(MAX_ENTRIES);
        self.save();
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let file = HistoryFile {
            version: 1,
            saved_at: Utc::now(),
            entries: self.entries.iter().cloned().collect(),
        };
        match serde_json::to_string_pretty(&file) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    tracing::debug!(path = %path.display(), error = %e, "history save failed");
                }
            }
            Err(e) => tracing::debug!(error = %e, "history serialization failed"),
        }
    }
}

fn default_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".sling_history.json"))
}

impl dialoguer::History<String> for PromptHistory {
    fn read(&self, pos: usize) -> Option<String> {
        self.entries.get(pos).cloned()
    }

    fn write(&mut self, val: &String) {
        self.push(val);
    }
}
