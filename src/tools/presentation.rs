//! Presentation-build tool - formats slide text and appends to the deck store

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::info;

use crate::deck::{format_slides, DeckStore};
use crate::error::Error;
use crate::Result;

use super::{Tool, ToolOutcome};

/// Arguments for `make_presentation`
#[derive(Debug, Deserialize)]
struct PresentationArgs {
    titles: String,
    descriptions: String,
}

/// Builds slides from `^`-separated titles and descriptions and appends
/// them to the deck store.
///
/// The store handle is injected and shared behind a mutex, so appends from
/// concurrent sessions serialize instead of interleaving partial writes.
pub struct MakePresentationTool {
    store: Arc<Mutex<dyn DeckStore>>,
}

impl MakePresentationTool {
    /// Create the tool around a shared deck store handle
    pub fn new(store: Arc<Mutex<dyn DeckStore>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Tool for MakePresentationTool {
    fn name(&self) -> &str {
        "make_presentation"
    }

    fn description(&self) -> &str {
        "Create presentation slides from formatted titles and descriptions. \
         Both arguments are single strings with fields separated by '^'."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "titles": {
                    "type": "string",
                    "description": "Slide titles separated by '^'"
                },
                "descriptions": {
                    "type": "string",
                    "description": "Slide descriptions separated by '^', one per title"
                }
            },
            "required": ["titles", "descriptions"]
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome> {
        let args: PresentationArgs = serde_json::from_value(args)
            .map_err(|e| Error::ToolDecode(format!("make_presentation arguments: {e}")))?;

        let content = format_slides(&args.titles, &args.descriptions);
        info!(slides = content.records.len(), "building presentation");

        self.store.lock().await.append(&content.records).await?;

        let mut report = format!("SUCCESS! Created {} slide(s).", content.records.len());
        if let Some(warning) = content.warning {
            report.push_str(&format!(" Warning: {warning}"));
        }

        Ok(ToolOutcome::Text(report))
    }
}
