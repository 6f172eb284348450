use crate::codec::{CodecError, Field, FieldKind, Result};

/// Optional payload: the declared inner kind plus zero or one inner field.
///
/// The inner kind is kept even when absent so the field still knows what it
/// would decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OptionalField {
	inner: FieldKind,
	value: Option<Box<Field>>,
}

impl OptionalField {
	pub(super) fn from_parts(inner: FieldKind, value: Option<Field>) -> Self {
		Self {
			inner,
			value: value.map(Box::new),
		}
	}

	/// Declared inner kind.
	pub fn inner_kind(&self) -> &FieldKind {
		&self.inner
	}

	/// Inner field when present.
	pub fn value(&self) -> Option<&Field> {
		self.value.as_deref()
	}

	/// Whether the presence flag is set.
	pub fn is_present(&self) -> bool {
		self.value.is_some()
	}

	/// Take the inner field out, if any.
	pub fn into_value(self) -> Option<Field> {
		self.value.map(|inner| *inner)
	}
}

impl Field {
	/// Absent optional of `inner` kind.
	pub fn absent(inner: FieldKind) -> Self {
		Self::Optional(OptionalField::from_parts(inner, None))
	}

	/// Present optional wrapping `value`; the inner kind is taken from it.
	pub fn present(value: Field) -> Self {
		Self::Optional(OptionalField::from_parts(value.kind(), Some(value)))
	}

	/// Optional of `inner` kind, checking that a supplied value matches it.
	pub fn optional(inner: FieldKind, value: Option<Field>) -> Result<Self> {
		if let Some(value) = &value {
			let got = value.kind();
			if got != inner {
				return Err(CodecError::KindMismatch { expected: inner, got });
			}
		}
		Ok(Self::Optional(OptionalField::from_parts(inner, value)))
	}
}
