/// Decoder limits and strictness toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Maximum number of nested optional layers accepted for one field.
	pub max_depth: u32,
	/// Fail sequence decodes that leave unread bytes behind.
	pub strict_trailing: bool,
}

impl DecodeOptions {
	/// Default optional nesting ceiling.
	pub const DEFAULT_MAX_DEPTH: u32 = 32;

	/// Strict trailing-byte checks with no optional nesting ceiling.
	pub fn unbounded() -> Self {
		Self {
			max_depth: u32::MAX,
			..Self::default()
		}
	}
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: Self::DEFAULT_MAX_DEPTH,
			strict_trailing: true,
		}
	}
}
