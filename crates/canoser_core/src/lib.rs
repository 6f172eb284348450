//! Deterministic fixed-width binary encoding for primitive fields and optionals.

/// Cursor, field kinds, field values, and sequence helpers.
pub mod codec;
