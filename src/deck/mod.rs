//! Deck module - slide content formatting and the presentation store.
//!
//! The formatter is a pure function: two delimiter-separated text blobs in,
//! an ordered list of sanitized slide records out. Records are paired
//! positionally; a length mismatch truncates to the shorter side and is
//! reported as a non-fatal warning rather than dropped silently.

mod store;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use store::{DeckStore, InMemoryDeckStore, JsonlDeckStore};

/// Reserved field delimiter in the slide text wire format.
pub const DELIMITER: char = '^';

/// Literal substrings stripped from slide text, applied in this order.
const SANITIZE_DENYLIST: [&str; 4] = ["#", "\r\n", "\n", "/"];

/// A sanitized (title, description, position) triple destined for the deck.
/// Produced only by [`format_slides`]; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRecord {
    pub title: String,
    pub description: String,
    pub index: usize,
}

/// Non-fatal warning: the title and description blobs had different field
/// counts and the trailing fields on the longer side were discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideCountMismatchWarning {
    pub titles: usize,
    pub descriptions: usize,
    /// The discarded trailing fields, unsanitized as received.
    pub discarded: Vec<String>,
}

impl std::fmt::Display for SlideCountMismatchWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "slide count mismatch: {} titles vs {} descriptions; discarded trailing fields: {:?}",
            self.titles, self.descriptions, self.discarded
        )
    }
}

/// Formatter output: ordered records plus an optional mismatch warning.
#[derive(Debug, Clone)]
pub struct DeckContent {
    pub records: Vec<SlideRecord>,
    pub warning: Option<SlideCountMismatchWarning>,
}

/// Remove the fixed denylist of literal substrings, in fixed order.
///
/// Plain substring removal, no pattern matching. Removing literals can
/// never reintroduce a denied literal, so the pass is idempotent.
pub fn sanitize(text: &str) -> String {
    let mut out = text.to_string();
    for needle in SANITIZE_DENYLIST {
        out = out.replace(needle, "");
    }
    out
}

/// Split both blobs on the reserved delimiter and pair fields positionally.
///
/// Pairing is by index up to the shorter field count. Differing counts
/// truncate to the shorter side and attach exactly one
/// [`SlideCountMismatchWarning`] naming the discarded trailing fields.
/// Pairing by title key would collapse duplicate titles and reorder the
/// deck, so it is deliberately not done here.
pub fn format_slides(titles: &str, descriptions: &str) -> DeckContent {
    let title_fields: Vec<&str> = titles.split(DELIMITER).collect();
    let description_fields: Vec<&str> = descriptions.split(DELIMITER).collect();

    let paired = title_fields.len().min(description_fields.len());

    let records = title_fields
        .iter()
        .zip(description_fields.iter())
        .enumerate()
        .map(|(index, (title, description))| SlideRecord {
            title: sanitize(title),
            description: sanitize(description),
            index,
        })
        .collect();

    let warning = if title_fields.len() != description_fields.len() {
        let discarded: Vec<String> = if title_fields.len() > paired {
            title_fields[paired..].iter().map(|s| s.to_string()).collect()
        } else {
            description_fields[paired..].iter().map(|s| s.to_string()).collect()
        };

        let warning = SlideCountMismatchWarning {
            titles: title_fields.len(),
            descriptions: description_fields.len(),
            discarded,
        };
        warn!(%warning, "truncating slide pairing to shorter side");
        Some(warning)
    } else {
        None
    };

    DeckContent { records, warning }
}
