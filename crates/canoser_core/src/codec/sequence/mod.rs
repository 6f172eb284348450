use crate::codec::bytes::Cursor;
use crate::codec::{CodecError, DecodeOptions, Field, FieldKind, Result};

/// Decode one field per entry of `kinds`, in order, from a single buffer.
pub fn decode_sequence(kinds: &[FieldKind], bytes: &[u8], options: &DecodeOptions) -> Result<Vec<Field>> {
	let mut cursor = Cursor::new(bytes);
	let fields = decode_sequence_from(kinds, &mut cursor, options)?;

	if options.strict_trailing && !cursor.is_exhausted() {
		return Err(CodecError::TrailingBytes {
			consumed: cursor.pos(),
			leftover: cursor.remaining(),
		});
	}

	Ok(fields)
}

/// Decode one field per entry of `kinds` from an existing cursor.
///
/// Never checks for trailing bytes; the caller owns the rest of the buffer.
pub fn decode_sequence_from(kinds: &[FieldKind], cursor: &mut Cursor<'_>, options: &DecodeOptions) -> Result<Vec<Field>> {
	let mut fields = Vec::with_capacity(kinds.len());
	for kind in kinds {
		fields.push(Field::decode_with(kind, cursor, options)?);
	}
	tracing::debug!(count = fields.len(), consumed = cursor.pos(), "decoded field sequence");
	Ok(fields)
}

/// Concatenate the encodings of `fields`.
pub fn encode_sequence(fields: &[Field]) -> Vec<u8> {
	let mut out = Vec::with_capacity(fields.iter().map(Field::encoded_len).sum());
	for field in fields {
		field.encode_into(&mut out);
	}
	out
}

#[cfg(test)]
mod tests;
