use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cmd::util::parse_hex;
use crate::cmd::{CliError, Result};

/// Ceiling on decompressed `--file` input.
pub const MAX_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Where decode input bytes come from. At most one may be given.
#[derive(clap::Args)]
#[group(multiple = false)]
pub struct InputArgs {
	/// Hex-encoded input bytes.
	#[arg(long)]
	pub hex: Option<String>,
	/// Binary input file, optionally zstd-compressed.
	#[arg(long)]
	pub file: Option<PathBuf>,
}

/// How the decode buffer was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
	/// Parsed from `--hex`.
	Hex,
	/// Read verbatim from `--file`.
	File,
	/// Read from `--file` and inflated from a zstd frame.
	ZstdFile {
		/// On-disk size before decompression.
		compressed_len: usize,
	},
}

impl InputSource {
	/// Stable lowercase label used in text and JSON output.
	pub fn label(self) -> &'static str {
		match self {
			Self::Hex => "hex",
			Self::File => "file",
			Self::ZstdFile { .. } => "zstd",
		}
	}
}

/// Decode buffer plus its provenance.
#[derive(Debug)]
pub struct LoadedInput {
	/// Where `bytes` came from.
	pub source: InputSource,
	/// Bytes to decode.
	pub bytes: Vec<u8>,
}

/// Load input bytes from `--hex` or `--file`.
pub fn load(input: &InputArgs) -> Result<LoadedInput> {
	match (&input.hex, &input.file) {
		(Some(hex), _) => Ok(LoadedInput {
			source: InputSource::Hex,
			bytes: parse_hex(hex)?,
		}),
		(None, Some(path)) => load_file(path),
		(None, None) => Err(CliError::MissingInput),
	}
}

fn load_file(path: &Path) -> Result<LoadedInput> {
	let raw = std::fs::read(path)?;
	tracing::debug!(path = %path.display(), len = raw.len(), "read input file");
	from_file_bytes(path, raw)
}

/// Classify raw file bytes, inflating them when they open with a zstd frame.
pub fn from_file_bytes(path: &Path, raw: Vec<u8>) -> Result<LoadedInput> {
	if !raw.starts_with(&ZSTD_MAGIC) {
		return Ok(LoadedInput {
			source: InputSource::File,
			bytes: raw,
		});
	}

	let bytes = inflate_zstd(path, &raw)?;
	tracing::info!(path = %path.display(), compressed = raw.len(), inflated = bytes.len(), "inflated zstd input");
	Ok(LoadedInput {
		source: InputSource::ZstdFile { compressed_len: raw.len() },
		bytes,
	})
}

fn inflate_zstd(path: &Path, raw: &[u8]) -> Result<Vec<u8>> {
	let zstd_error = |source| CliError::Zstd {
		path: path.to_path_buf(),
		source,
	};

	let decoder = zstd::stream::read::Decoder::new(raw).map_err(zstd_error)?;
	// One byte past the ceiling tells "exactly at the limit" from "over it".
	let mut limited = decoder.take(MAX_DECOMPRESSED_BYTES as u64 + 1);
	let mut out = Vec::new();
	limited.read_to_end(&mut out).map_err(zstd_error)?;

	if out.len() > MAX_DECOMPRESSED_BYTES {
		return Err(CliError::DecompressedTooLarge {
			path: path.to_path_buf(),
			limit: MAX_DECOMPRESSED_BYTES,
		});
	}
	Ok(out)
}
