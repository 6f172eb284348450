use thiserror::Error;

use crate::codec::FieldKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while encoding, decoding, or describing fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
	/// Not enough bytes remained for a requested read.
	#[error("underflow at offset {at}, need {need} bytes, remaining {rem}")]
	Underflow {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Bytes were read but do not form a legal value of the target kind.
	#[error("malformed {kind} value at offset {at}: byte 0x{byte:02x}")]
	MalformedValue {
		/// Kind being decoded.
		kind: FieldKind,
		/// Offset of the offending byte.
		at: usize,
		/// Offending byte.
		byte: u8,
	},
	/// Optional was built around a value of the wrong inner kind.
	#[error("kind mismatch: expected {expected}, got {got}")]
	KindMismatch {
		/// Declared inner kind.
		expected: FieldKind,
		/// Kind of the supplied value.
		got: FieldKind,
	},
	/// Optional nesting exceeded the configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Strict sequence decode left unread bytes behind.
	#[error("trailing bytes after sequence: consumed={consumed}, leftover={leftover}")]
	TrailingBytes {
		/// Bytes consumed by the decoded fields.
		consumed: usize,
		/// Unconsumed bytes.
		leftover: usize,
	},
	/// Textual kind could not be parsed.
	#[error("invalid field kind: {kind}")]
	InvalidKind {
		/// Original user-provided kind string.
		kind: String,
	},
}
