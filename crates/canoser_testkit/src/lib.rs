//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Create (if needed) and return a per-test scratch file path under the target dir.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("canoser-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	dir.join(name)
}

/// Parse a whitespace-tolerant hex string into bytes.
///
/// Panics on malformed input; test vectors are expected to be well formed.
pub fn hex_bytes(hex: &str) -> Vec<u8> {
	let digits: Vec<u8> = hex.bytes().filter(|byte| !byte.is_ascii_whitespace()).collect();
	assert!(digits.len() % 2 == 0, "odd number of hex digits in {hex:?}");

	digits
		.chunks(2)
		.map(|pair| {
			let text = std::str::from_utf8(pair).expect("hex digits are ascii");
			u8::from_str_radix(text, 16).unwrap_or_else(|_| panic!("invalid hex pair {text:?} in {hex:?}"))
		})
		.collect()
}
