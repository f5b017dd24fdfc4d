//! Knowledge source loading and validation.
//!
//! The source is a JSON array of objects shaped like
//! `{"keywords": ["admission", "apply"], "answer": "Admissions open in June."}`.
//!
//! Invalid elements are skipped, counted and logged; they never fail the
//! whole load.  The load fails only when the source is missing or unreadable,
//! is not a JSON array, or yields zero valid records.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::knowledge::record::{FaqRecord, InvalidRecord, KnowledgeBase};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Errors that can occur while loading the knowledge source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("knowledge source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The source exists but could not be read.
    #[error("failed to read knowledge source: {0}")]
    Io(String),

    /// The source is not valid JSON, or not a JSON array.
    #[error("failed to parse knowledge source: {0}")]
    ParseError(String),

    /// The source parsed but every element was invalid (or it was empty).
    #[error("knowledge source contains no valid records ({skipped} skipped)")]
    EmptyKnowledgeBase { skipped: usize },
}

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    answer: String,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load a knowledge base from a JSON file.
///
/// # Errors
///
/// - [`LoadError::SourceNotFound`]: `path` does not exist.
/// - [`LoadError::Io`]: the file could not be read.
/// - [`LoadError::ParseError`] / [`LoadError::EmptyKnowledgeBase`]: see
///   [`load_str`].
pub fn load(path: impl AsRef<Path>) -> Result<KnowledgeBase, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::SourceNotFound(path.to_path_buf()));
    }

    let content = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::SourceNotFound(path.to_path_buf())
        } else {
            LoadError::Io(e.to_string())
        }
    })?;

    let kb = load_slice(&content)?;
    log::info!(
        "knowledge: loaded {} record(s) from {} ({} skipped)",
        kb.len(),
        path.display(),
        kb.skipped()
    );
    Ok(kb)
}

/// Load a knowledge base from any reader (stream source).
pub fn load_reader(mut reader: impl Read) -> Result<KnowledgeBase, LoadError> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| LoadError::Io(e.to_string()))?;
    load_slice(&content)
}

/// Parse and validate a knowledge base from JSON text.
///
/// ```
/// use faq_responder::knowledge::load_str;
///
/// let kb = load_str(r#"[{"keywords": ["admission"], "answer": "Admissions open in June."}]"#).unwrap();
/// assert_eq!(kb.len(), 1);
/// ```
pub fn load_str(content: &str) -> Result<KnowledgeBase, LoadError> {
    load_slice(content.as_bytes())
}

/// Bytes that are not UTF-8 are rejected by the JSON parser, so they surface
/// as [`LoadError::ParseError`] rather than an I/O failure.
fn load_slice(content: &[u8]) -> Result<KnowledgeBase, LoadError> {
    let value: serde_json::Value =
        serde_json::from_slice(content).map_err(|e| LoadError::ParseError(e.to_string()))?;

    let serde_json::Value::Array(elements) = value else {
        return Err(LoadError::ParseError(
            "expected a JSON array of records".into(),
        ));
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut skipped = 0usize;

    for (index, element) in elements.into_iter().enumerate() {
        match validate(element) {
            Ok(record) => records.push(record),
            Err(reason) => {
                log::warn!("knowledge: skipping record #{index}: {reason}");
                skipped += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(LoadError::EmptyKnowledgeBase { skipped });
    }

    Ok(KnowledgeBase::with_skipped(records, skipped))
}

fn validate(element: serde_json::Value) -> Result<FaqRecord, InvalidRecord> {
    let raw: RawRecord =
        serde_json::from_value(element).map_err(|e| InvalidRecord::Malformed(e.to_string()))?;
    FaqRecord::new(raw.keywords, raw.answer)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
