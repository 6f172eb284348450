use canoser::codec::{DecodeOptions, Field, FieldKind, decode_sequence};

use crate::cmd::Result;
use crate::cmd::input::{InputArgs, LoadedInput, load};
use crate::cmd::util::{emit_json, field_to_json_value, parse_kind};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long, value_delimiter = ',', required = true)]
	pub kinds: Vec<String>,
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long = "allow-trailing")]
	pub allow_trailing: bool,
	#[arg(long = "max-depth", default_value_t = DecodeOptions::DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
	#[arg(long)]
	pub json: bool,
}

/// Decode input bytes as the given comma-separated kind list.
pub fn run(args: Args) -> Result<()> {
	let Args {
		kinds,
		input,
		allow_trailing,
		max_depth,
		json,
	} = args;

	let options = DecodeOptions {
		max_depth,
		strict_trailing: !allow_trailing,
	};
	let kinds = kinds.iter().map(|kind| parse_kind(kind, max_depth)).collect::<Result<Vec<_>>>()?;
	let LoadedInput { source, bytes } = load(&input)?;

	let fields = decode_sequence(&kinds, &bytes, &options)?;
	let consumed: usize = fields.iter().map(Field::encoded_len).sum();
	let leftover = bytes.len() - consumed;

	if json {
		return emit_json(&DecodeJson {
			source: source.label(),
			fields: fields.iter().zip(&kinds).enumerate().map(|(index, (field, kind))| field_json(index, kind, field)).collect(),
			consumed,
			leftover,
		});
	}

	println!("source: {}", source.label());
	println!("fields:");
	for (index, (field, kind)) in fields.iter().zip(&kinds).enumerate() {
		println!("  {index}: {kind} = {field}");
	}
	println!("consumed: {consumed}");
	println!("leftover: {leftover}");

	Ok(())
}

fn field_json(index: usize, kind: &FieldKind, field: &Field) -> FieldJson {
	FieldJson {
		index,
		kind: kind.to_string(),
		value: field_to_json_value(field),
	}
}

#[derive(serde::Serialize)]
struct DecodeJson {
	source: &'static str,
	fields: Vec<FieldJson>,
	consumed: usize,
	leftover: usize,
}

#[derive(serde::Serialize)]
struct FieldJson {
	index: usize,
	kind: String,
	value: serde_json::Value,
}
