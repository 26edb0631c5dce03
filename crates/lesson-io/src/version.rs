//! Wire format version constants.

/// Lesson document envelope version (`v` in `{ v, fingerprint, blocks }`).
pub const DOCUMENT_V: u8 = lesson_core::DOCUMENT_V;

/// Builder script version (`v` in `{ v, ops }`).
pub const SCRIPT_V: u8 = lesson_builder::SCRIPT_V;

/// JSON Schema bundle version for the on-disk schemas under `schemas/`.
///
/// Bump this if the schema constraints change (even if `v` stays the same).
pub const SCHEMA_BUNDLE_V: u8 = 1;
