use std::fmt;

use crate::codec::bytes::Cursor;
use crate::codec::{CodecError, DecodeOptions, FieldKind, Result};

mod optional;

pub use optional::OptionalField;

const TRUE_BYTE: u8 = 0x01;
const FALSE_BYTE: u8 = 0x00;

/// One encoded value of a single concrete kind.
///
/// Integers are written little-endian at their fixed width. Booleans are one
/// byte, `0x01` or `0x00`. Optionals are a boolean presence flag followed by
/// the inner encoding when present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
	/// Unsigned 8-bit integer.
	Uint8(u8),
	/// Unsigned 16-bit integer.
	Uint16(u16),
	/// Unsigned 32-bit integer.
	Uint32(u32),
	/// Unsigned 64-bit integer.
	Uint64(u64),
	/// Boolean.
	Bool(bool),
	/// Possibly absent inner value of a declared kind.
	Optional(OptionalField),
}

impl Field {
	/// Kind that decodes back into this field.
	pub fn kind(&self) -> FieldKind {
		match self {
			Self::Uint8(_) => FieldKind::Uint8,
			Self::Uint16(_) => FieldKind::Uint16,
			Self::Uint32(_) => FieldKind::Uint32,
			Self::Uint64(_) => FieldKind::Uint64,
			Self::Bool(_) => FieldKind::Bool,
			Self::Optional(optional) => FieldKind::optional(optional.inner_kind().clone()),
		}
	}

	/// Encode into a fresh buffer.
	pub fn encode(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(self.encoded_len());
		self.encode_into(&mut out);
		out
	}

	/// Append the encoding to `out`.
	pub fn encode_into(&self, out: &mut Vec<u8>) {
		match self {
			Self::Uint8(value) => out.push(*value),
			Self::Uint16(value) => out.extend_from_slice(&value.to_le_bytes()),
			Self::Uint32(value) => out.extend_from_slice(&value.to_le_bytes()),
			Self::Uint64(value) => out.extend_from_slice(&value.to_le_bytes()),
			Self::Bool(value) => out.push(encode_bool(*value)),
			Self::Optional(optional) => {
				out.push(encode_bool(optional.is_present()));
				if let Some(inner) = optional.value() {
					inner.encode_into(out);
				}
			}
		}
	}

	/// Number of bytes [`Field::encode`] produces.
	pub fn encoded_len(&self) -> usize {
		match self {
			Self::Optional(optional) => 1 + optional.value().map_or(0, Field::encoded_len),
			fixed => fixed.kind().fixed_width().unwrap_or_default(),
		}
	}

	/// Decode one field of `kind` with no nesting ceiling.
	///
	/// The kind comes from the caller, so any value [`Field::encode`] produced
	/// decodes back here.
	pub fn decode(kind: &FieldKind, cursor: &mut Cursor<'_>) -> Result<Self> {
		Self::decode_with(kind, cursor, &DecodeOptions::unbounded())
	}

	/// Decode one field of `kind`, rejecting kinds nested deeper than
	/// `options.max_depth`.
	///
	/// Either the whole field is consumed or the cursor is left where it was.
	pub fn decode_with(kind: &FieldKind, cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Self> {
		if kind.depth() > options.max_depth {
			return Err(CodecError::DepthExceeded { max_depth: options.max_depth });
		}

		let start = cursor.checkpoint();
		let at = cursor.pos();
		tracing::trace!(%kind, at, "decoding field");

		let decoded = decode_kind(kind, cursor);
		if let Err(err) = &decoded {
			cursor.restore(start);
			tracing::debug!(%kind, at, error = %err, "field decode failed");
		}
		decoded
	}

	/// Widen any unsigned integer field to `u64`.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::Uint8(value) => Some(u64::from(*value)),
			Self::Uint16(value) => Some(u64::from(*value)),
			Self::Uint32(value) => Some(u64::from(*value)),
			Self::Uint64(value) => Some(*value),
			Self::Bool(_) | Self::Optional(_) => None,
		}
	}

	/// Boolean payload, if this is a boolean field.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// `Some(None)` for an absent optional, `Some(Some(inner))` for a present
	/// one, `None` when this is not an optional at all.
	pub fn as_optional(&self) -> Option<Option<&Field>> {
		match self {
			Self::Optional(optional) => Some(optional.value()),
			_ => None,
		}
	}
}

fn decode_kind(kind: &FieldKind, cursor: &mut Cursor<'_>) -> Result<Field> {
	match kind {
		FieldKind::Uint8 => Ok(Field::Uint8(u8::from_le_bytes(cursor.read_array()?))),
		FieldKind::Uint16 => Ok(Field::Uint16(u16::from_le_bytes(cursor.read_array()?))),
		FieldKind::Uint32 => Ok(Field::Uint32(u32::from_le_bytes(cursor.read_array()?))),
		FieldKind::Uint64 => Ok(Field::Uint64(u64::from_le_bytes(cursor.read_array()?))),
		FieldKind::Bool => decode_bool(kind, cursor).map(Field::Bool),
		FieldKind::Optional(inner) => {
			let value = if decode_bool(kind, cursor)? {
				Some(decode_kind(inner, cursor)?)
			} else {
				None
			};
			Ok(Field::Optional(OptionalField::from_parts(inner.as_ref().clone(), value)))
		}
	}
}

fn encode_bool(value: bool) -> u8 {
	if value { TRUE_BYTE } else { FALSE_BYTE }
}

/// Read a boolean byte; `kind` is the field it belongs to, for error reports.
fn decode_bool(kind: &FieldKind, cursor: &mut Cursor<'_>) -> Result<bool> {
	let at = cursor.pos();
	let [byte] = cursor.read_array::<1>()?;
	match byte {
		TRUE_BYTE => Ok(true),
		FALSE_BYTE => Ok(false),
		_ => Err(CodecError::MalformedValue {
			kind: kind.clone(),
			at,
			byte,
		}),
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Uint8(value) => write!(f, "{value}"),
			Self::Uint16(value) => write!(f, "{value}"),
			Self::Uint32(value) => write!(f, "{value}"),
			Self::Uint64(value) => write!(f, "{value}"),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Optional(optional) => match optional.value() {
				Some(inner) => write!(f, "some({inner})"),
				None => f.write_str("none"),
			},
		}
	}
}

impl From<u8> for Field {
	fn from(value: u8) -> Self {
		Self::Uint8(value)
	}
}

impl From<u16> for Field {
	fn from(value: u16) -> Self {
		Self::Uint16(value)
	}
}

impl From<u32> for Field {
	fn from(value: u32) -> Self {
		Self::Uint32(value)
	}
}

impl From<u64> for Field {
	fn from(value: u64) -> Self {
		Self::Uint64(value)
	}
}

impl From<bool> for Field {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
