use canoser::codec::DecodeOptions;

use crate::cmd::Result;
use crate::cmd::util::{emit_json, parse_kind};

#[derive(clap::Args)]
pub struct Args {
	pub kind: String,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth", default_value_t = DecodeOptions::DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
}

/// Print the canonical name and encoded size bounds of a kind.
pub fn run(args: Args) -> Result<()> {
	let Args { kind, json, max_depth } = args;
	let kind = parse_kind(&kind, max_depth)?;

	let payload = DescribeJson {
		kind: kind.to_string(),
		innermost: kind.innermost().to_string(),
		depth: kind.depth(),
		fixed_width: kind.fixed_width(),
		min_len: kind.min_encoded_len(),
		max_len: kind.max_encoded_len(),
	};

	if json {
		return emit_json(&payload);
	}

	println!("kind: {}", payload.kind);
	match payload.fixed_width {
		Some(width) => println!("width: {width}"),
		None => println!("width: variable"),
	}
	println!("depth: {}", payload.depth);
	println!("innermost: {}", payload.innermost);
	println!("min_len: {}", payload.min_len);
	println!("max_len: {}", payload.max_len);

	Ok(())
}

#[derive(serde::Serialize)]
struct DescribeJson {
	kind: String,
	innermost: String,
	depth: u32,
	fixed_width: Option<usize>,
	min_len: usize,
	max_len: usize,
}
