//! Presentation store - append-only destination for finished slide records

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::Error;
use crate::Result;

use super::SlideRecord;

/// Append-only store for finished slide records.
///
/// The persisted artifact format is opaque to the callers; the only
/// contract is that accepted records are never overwritten. A store
/// instance is single-writer: callers sharing one across sessions must
/// serialize access (one `Arc<tokio::sync::Mutex<_>>` per instance).
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Append the records, preserving their order. Prior records stay intact.
    async fn append(&mut self, records: &[SlideRecord]) -> Result<()>;
}

/// One persisted line per slide record.
#[derive(Debug, Serialize)]
struct StoredRecord<'a> {
    #[serde(flatten)]
    record: &'a SlideRecord,
    appended_at: DateTime<Utc>,
}

/// Deck store writing one JSON line per record to a configurable path.
pub struct JsonlDeckStore {
    path: PathBuf,
}

impl JsonlDeckStore {
    /// Create a store appending to the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl DeckStore for JsonlDeckStore {
    async fn append(&mut self, records: &[SlideRecord]) -> Result<()> {
        use std::io::Write;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Store(format!("Failed to create deck directory: {e}")))?;
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::Store(format!("Failed to open deck file: {e}")))?;

        let appended_at = Utc::now();
        for record in records {
            let line = serde_json::to_string(&StoredRecord {
                record,
                appended_at,
            })?;
            writeln!(file, "{line}")
                .map_err(|e| Error::Store(format!("Failed to write deck record: {e}")))?;
        }

        info!(count = records.len(), path = %self.path.display(), "appended slide records");
        Ok(())
    }
}

/// In-memory deck store for tests
#[derive(Debug, Default)]
pub struct InMemoryDeckStore {
    records: Vec<SlideRecord>,
}

impl InMemoryDeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records appended so far, in order
    pub fn records(&self) -> &[SlideRecord] {
        &self.records
    }
}

#[async_trait]
impl DeckStore for InMemoryDeckStore {
    async fn append(&mut self, records: &[SlideRecord]) -> Result<()> {
        self.records.extend_from_slice(records);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, index: usize) -> SlideRecord {
        SlideRecord {
            title: title.to_string(),
            description: format!("d{index}"),
            index,
        }
    }

    #[tokio::test]
    async fn test_jsonl_store_appends_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.jsonl");
        let mut store = JsonlDeckStore::new(&path);

        store.append(&[record("A", 0), record("B", 1)]).await.unwrap();
        store.append(&[record("C", 0)]).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["title"], "A");
        assert_eq!(first["index"], 0);
        assert!(first["appended_at"].is_string());

        // earlier records untouched by the second append
        let third: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(third["title"], "C");
    }

    #[tokio::test]
    async fn test_in_memory_store_preserves_order() {
        let mut store = InMemoryDeckStore::new();
        store.append(&[record("A", 0)]).await.unwrap();
        store.append(&[record("B", 1)]).await.unwrap();

        let titles: Vec<&str> = store.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }
}
