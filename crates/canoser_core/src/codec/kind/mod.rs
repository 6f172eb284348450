use std::fmt;
use std::str::FromStr;

use crate::codec::{CodecError, DecodeOptions, Result};

/// Type-level description of a field, needed to decode it.
///
/// The encoding carries no type tag, so a decoder is always told which kind
/// to expect at each position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
	/// Unsigned 8-bit integer.
	Uint8,
	/// Unsigned 16-bit little-endian integer.
	Uint16,
	/// Unsigned 32-bit little-endian integer.
	Uint32,
	/// Unsigned 64-bit little-endian integer.
	Uint64,
	/// One-byte boolean.
	Bool,
	/// Presence flag followed by an optional inner value.
	Optional(Box<FieldKind>),
}

impl FieldKind {
	/// Every fixed-width kind, in width order.
	pub const PRIMITIVES: [FieldKind; 5] = [Self::Uint8, Self::Bool, Self::Uint16, Self::Uint32, Self::Uint64];

	/// Wrap `inner` in an optional kind.
	pub fn optional(inner: FieldKind) -> Self {
		Self::Optional(Box::new(inner))
	}

	/// Encoded width in bytes, or `None` when it depends on the value.
	pub fn fixed_width(&self) -> Option<usize> {
		match self {
			Self::Uint8 | Self::Bool => Some(1),
			Self::Uint16 => Some(2),
			Self::Uint32 => Some(4),
			Self::Uint64 => Some(8),
			Self::Optional(_) => None,
		}
	}

	/// Smallest possible encoding: the flag alone for optionals.
	pub fn min_encoded_len(&self) -> usize {
		match self {
			Self::Optional(_) => 1,
			fixed => fixed.fixed_width().unwrap_or_default(),
		}
	}

	/// Largest possible encoding: every flag set plus the innermost width.
	pub fn max_encoded_len(&self) -> usize {
		let depth = usize::try_from(self.depth()).unwrap_or(usize::MAX);
		depth.saturating_add(self.innermost().fixed_width().unwrap_or_default())
	}

	/// Number of optional layers wrapped around the innermost kind.
	pub fn depth(&self) -> u32 {
		let mut depth = 0;
		let mut kind = self;
		while let Self::Optional(inner) = kind {
			depth += 1;
			kind = inner;
		}
		depth
	}

	/// Innermost non-optional kind.
	pub fn innermost(&self) -> &FieldKind {
		let mut kind = self;
		while let Self::Optional(inner) = kind {
			kind = inner;
		}
		kind
	}

	/// Parse a textual kind such as `u32` or `optional<bool>`, rejecting
	/// nesting deeper than `max_depth`.
	pub fn parse_with_depth(text: &str, max_depth: u32) -> Result<Self> {
		let lowered = text.trim().to_ascii_lowercase();
		let mut rest = lowered.as_str();
		let mut depth = 0_u32;
		while let Some(inner) = strip_optional(rest) {
			if depth == max_depth {
				return Err(CodecError::DepthExceeded { max_depth });
			}
			depth += 1;
			rest = inner.trim();
		}

		let mut kind = parse_primitive(rest).ok_or_else(|| CodecError::InvalidKind { kind: text.to_owned() })?;
		for _ in 0..depth {
			kind = Self::optional(kind);
		}
		Ok(kind)
	}

	fn primitive_name(&self) -> &'static str {
		match self {
			Self::Uint8 => "u8",
			Self::Uint16 => "u16",
			Self::Uint32 => "u32",
			Self::Uint64 => "u64",
			Self::Bool => "bool",
			Self::Optional(_) => "optional",
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let depth = self.depth();
		for _ in 0..depth {
			f.write_str("optional<")?;
		}
		f.write_str(self.innermost().primitive_name())?;
		for _ in 0..depth {
			f.write_str(">")?;
		}
		Ok(())
	}
}

impl FromStr for FieldKind {
	type Err = CodecError;

	fn from_str(text: &str) -> Result<Self> {
		Self::parse_with_depth(text, DecodeOptions::DEFAULT_MAX_DEPTH)
	}
}

fn strip_optional(text: &str) -> Option<&str> {
	let body = text.strip_suffix('>')?;
	["optional<", "option<"].into_iter().find_map(|prefix| body.strip_prefix(prefix))
}

fn parse_primitive(text: &str) -> Option<FieldKind> {
	match text {
		"u8" | "uint8" => Some(FieldKind::Uint8),
		"u16" | "uint16" => Some(FieldKind::Uint16),
		"u32" | "uint32" => Some(FieldKind::Uint32),
		"u64" | "uint64" => Some(FieldKind::Uint64),
		"bool" | "boolean" => Some(FieldKind::Bool),
		_ => None,
	}
}

#[cfg(test)]
mod tests;
