mod bytes;
mod error;
mod field;
mod kind;
mod options;
mod sequence;

/// Bounded read cursor and its rewind marker.
pub use bytes::{Checkpoint, Cursor};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Encodable values and the optional payload type.
pub use field::{Field, OptionalField};
/// Type-level field descriptions.
pub use kind::FieldKind;
/// Decoder configuration.
pub use options::DecodeOptions;
/// Multi-field encode and decode entry points.
pub use sequence::{decode_sequence, decode_sequence_from, encode_sequence};
