use canoser::codec::{Field, FieldKind};
use serde_json::Value as JsonValue;

use crate::cmd::{CliError, Result};

/// Parse a hex string, ignoring whitespace, `_` separators and a leading `0x`.
pub(crate) fn parse_hex(input: &str) -> Result<Vec<u8>> {
	let trimmed = input.trim();
	let body = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);

	let mut digits = Vec::with_capacity(body.len());
	for ch in body.chars() {
		if ch.is_ascii_whitespace() || ch == '_' {
			continue;
		}
		let digit = ch.to_digit(16).ok_or_else(|| CliError::InvalidHex {
			input: input.to_owned(),
			reason: "non-hex character",
		})?;
		digits.push(digit as u8);
	}

	if digits.len() % 2 != 0 {
		return Err(CliError::InvalidHex {
			input: input.to_owned(),
			reason: "odd number of digits",
		});
	}

	Ok(digits.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Render bytes as contiguous lowercase hex.
pub(crate) fn render_hex(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		out.push_str(&format!("{byte:02x}"));
	}
	out
}

/// Parse decimal or `0x`-prefixed hex unsigned integer literal.
pub(crate) fn parse_uint(value: &str) -> Option<u64> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u64::from_str_radix(stripped, 16)
	} else {
		value.parse::<u64>()
	};
	parsed.ok()
}

/// Parse a kind list entry, rejecting nesting deeper than `max_depth`.
pub(crate) fn parse_kind(text: &str, max_depth: u32) -> Result<FieldKind> {
	Ok(FieldKind::parse_with_depth(text, max_depth)?)
}

/// Convert a decoded field to JSON.
///
/// Absent optionals become `null`. A present optional is its inner value,
/// except when the inner kind is itself optional, where `{"some": ...}` keeps
/// `some(none)` distinct from `none`.
pub(crate) fn field_to_json_value(field: &Field) -> JsonValue {
	match field {
		Field::Uint8(v) => serde_json::json!(v),
		Field::Uint16(v) => serde_json::json!(v),
		Field::Uint32(v) => serde_json::json!(v),
		Field::Uint64(v) => serde_json::json!(v),
		Field::Bool(v) => serde_json::json!(v),
		Field::Optional(optional) => match optional.value() {
			None => JsonValue::Null,
			Some(inner) if matches!(optional.inner_kind(), FieldKind::Optional(_)) => serde_json::json!({ "some": field_to_json_value(inner) }),
			Some(inner) => field_to_json_value(inner),
		},
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
