use std::path::PathBuf;

use canoser::codec::CodecError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Encode/decode failure from the core codec.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON rendering failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Hex input could not be parsed.
	#[error("invalid hex input {input:?}: {reason}")]
	InvalidHex {
		/// User-provided hex text.
		input: String,
		/// What was wrong with it.
		reason: &'static str,
	},
	/// Value literal does not fit the requested kind.
	#[error("invalid {kind} value: {value}")]
	InvalidValue {
		/// Target kind.
		kind: String,
		/// User-provided literal.
		value: String,
	},
	/// Neither `--hex` nor `--file` was supplied.
	#[error("no input: pass --hex or --file")]
	MissingInput,
	/// zstd frame in an input file could not be inflated.
	#[error("corrupt zstd input {}: {source}", path.display())]
	Zstd {
		/// Input file path.
		path: PathBuf,
		/// Decoder failure.
		source: std::io::Error,
	},
	/// Inflated input exceeded the size ceiling.
	#[error("zstd input {} inflates past {limit} bytes", path.display())]
	DecompressedTooLarge {
		/// Input file path.
		path: PathBuf,
		/// Maximum allowed output bytes.
		limit: usize,
	},
}
