//! Parsing and printing lesson documents.
//!
//! serde's "missing field X" is accurate but rarely tells a fixture author what
//! the envelope should look like. These helpers keep parsing strict while
//! naming the required top-level fields, and they always recompute the
//! fingerprint rather than trusting the one on disk.

use lesson_core::{BlockList, DOCUMENT_V, LessonDocument};
use serde::de::Error as _;
use serde_json::Value;
use thiserror::Error;

use crate::canonical_json::to_canonical_json_string;

const REQUIRED_TOP_LEVEL_FIELDS: &[&str] = &["v", "blocks"];

#[derive(Error, Debug)]
pub enum DocumentJsonError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error(
        "Invalid lesson JSON: missing required top-level field(s): {}. Required top-level fields: {}.",
        .missing.join(", "),
        .required.join(", ")
    )]
    MissingRequiredTopLevelFields {
        missing: Vec<&'static str>,
        required: Vec<&'static str>,
    },

    #[error(
        "Invalid lesson JSON shape: {0}. Required top-level fields: {required}.",
        required = REQUIRED_TOP_LEVEL_FIELDS.join(", ")
    )]
    InvalidDocumentShape(#[source] serde_json::Error),

    #[error("Unsupported lesson document version {0}. Supported: {DOCUMENT_V}.")]
    UnsupportedVersion(u8),
}

/// Parse a lesson document.
///
/// Accepts the `{ v, fingerprint?, blocks }` envelope. A bare JSON array is
/// rejected with the list of required fields.
pub fn parse_document_json_str(s: &str) -> Result<LessonDocument, DocumentJsonError> {
    let v: Value = serde_json::from_str(s).map_err(DocumentJsonError::InvalidJson)?;
    let obj = v.as_object().ok_or_else(|| {
        DocumentJsonError::InvalidDocumentShape(serde_json::Error::custom("expected a JSON object"))
    })?;

    let missing: Vec<&'static str> = REQUIRED_TOP_LEVEL_FIELDS
        .iter()
        .copied()
        .filter(|k| !obj.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        return Err(DocumentJsonError::MissingRequiredTopLevelFields {
            missing,
            required: REQUIRED_TOP_LEVEL_FIELDS.to_vec(),
        });
    }

    let mut doc: LessonDocument =
        serde_json::from_value(v).map_err(DocumentJsonError::InvalidDocumentShape)?;
    if doc.v != DOCUMENT_V {
        return Err(DocumentJsonError::UnsupportedVersion(doc.v));
    }
    doc.recompute_fingerprint();
    Ok(doc)
}

/// Wrap a list in a fresh envelope with its fingerprint.
pub fn document_from_blocks(blocks: BlockList) -> LessonDocument {
    LessonDocument::new(blocks)
}

/// Human-oriented form; keeps the block field order.
pub fn to_pretty_json(doc: &LessonDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

/// Minified canonical form; equal documents give equal bytes.
pub fn to_minified_json(doc: &LessonDocument) -> Result<String, serde_json::Error> {
    to_canonical_json_string(doc)
}
