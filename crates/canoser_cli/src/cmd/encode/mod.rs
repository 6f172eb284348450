use canoser::codec::{DecodeOptions, Field, FieldKind};

use crate::cmd::util::{emit_json, parse_kind, parse_uint, render_hex};
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub kind: String,
	pub value: String,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth", default_value_t = DecodeOptions::DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
}

/// Encode one value literal of the given kind and print its hex form.
pub fn run(args: Args) -> Result<()> {
	let Args { kind, value, json, max_depth } = args;

	let kind = parse_kind(&kind, max_depth)?;
	let field = parse_value(&kind, &value)?;
	let bytes = field.encode();

	if json {
		return emit_json(&EncodeJson {
			kind: kind.to_string(),
			value: field.to_string(),
			len: bytes.len(),
			hex: render_hex(&bytes),
		});
	}

	println!("{}", render_hex(&bytes));
	Ok(())
}

/// Parse a value literal for `kind`.
///
/// Integers accept decimal or `0x` hex, booleans accept `true`/`false`,
/// optionals accept `none`, `some(<inner>)`, or a bare inner literal.
pub(crate) fn parse_value(kind: &FieldKind, text: &str) -> Result<Field> {
	let text = text.trim();
	let invalid = || CliError::InvalidValue {
		kind: kind.to_string(),
		value: text.to_owned(),
	};

	match kind {
		FieldKind::Uint8 => parse_uint(text).and_then(|v| u8::try_from(v).ok()).map(Field::Uint8).ok_or_else(invalid),
		FieldKind::Uint16 => parse_uint(text).and_then(|v| u16::try_from(v).ok()).map(Field::Uint16).ok_or_else(invalid),
		FieldKind::Uint32 => parse_uint(text).and_then(|v| u32::try_from(v).ok()).map(Field::Uint32).ok_or_else(invalid),
		FieldKind::Uint64 => parse_uint(text).map(Field::Uint64).ok_or_else(invalid),
		FieldKind::Bool => {
			if text.eq_ignore_ascii_case("true") {
				Ok(Field::Bool(true))
			} else if text.eq_ignore_ascii_case("false") {
				Ok(Field::Bool(false))
			} else {
				Err(invalid())
			}
		}
		FieldKind::Optional(inner) => {
			if text.eq_ignore_ascii_case("none") || text.eq_ignore_ascii_case("null") {
				return Ok(Field::absent(inner.as_ref().clone()));
			}
			let inner_text = strip_some(text).unwrap_or(text);
			Ok(Field::present(parse_value(inner, inner_text)?))
		}
	}
}

fn strip_some(text: &str) -> Option<&str> {
	let body = text.strip_suffix(')')?;
	let (head, rest) = body.split_at_checked(5)?;
	head.eq_ignore_ascii_case("some(").then_some(rest)
}

#[derive(serde::Serialize)]
struct EncodeJson {
	kind: String,
	value: String,
	len: usize,
	hex: String,
}

#[cfg(test)]
mod tests;
