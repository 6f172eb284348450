use canoser::codec::{Field, FieldKind};

use super::parse_value;
use crate::cmd::CliError;
use crate::cmd::test_support::{run_canoser, run_canoser_json};

#[test]
fn parses_integer_literals_within_range() {
	assert_eq!(parse_value(&FieldKind::Uint8, "255").expect("u8 max"), Field::Uint8(255));
	assert_eq!(parse_value(&FieldKind::Uint16, "0x0100").expect("hex u16"), Field::Uint16(256));
	assert_eq!(parse_value(&FieldKind::Uint64, "18446744073709551615").expect("u64 max"), Field::Uint64(u64::MAX));

	let err = parse_value(&FieldKind::Uint8, "256").expect_err("u8 overflow");
	assert!(matches!(err, CliError::InvalidValue { ref kind, ref value } if kind == "u8" && value == "256"));
}

#[test]
fn parses_bool_and_optional_literals() {
	assert_eq!(parse_value(&FieldKind::Bool, "TRUE").expect("bool"), Field::Bool(true));
	assert!(parse_value(&FieldKind::Bool, "yes").is_err());

	let kind = FieldKind::optional(FieldKind::Uint8);
	assert_eq!(parse_value(&kind, "none").expect("absent"), Field::absent(FieldKind::Uint8));
	assert_eq!(parse_value(&kind, "some(42)").expect("some"), Field::present(Field::Uint8(42)));
	assert_eq!(parse_value(&kind, "42").expect("bare"), Field::present(Field::Uint8(42)));

	let nested = FieldKind::optional(kind);
	assert_eq!(
		parse_value(&nested, "some(none)").expect("some(none)"),
		Field::present(Field::absent(FieldKind::Uint8))
	);
}

#[test]
fn encode_prints_hex() {
	let output = run_canoser(&["encode", "--kind", "optional<u8>", "some(42)"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "012a");
}

#[test]
fn encode_json_reports_kind_and_len() {
	let json = run_canoser_json(&["encode", "--kind", "u16", "256", "--json"]);
	assert_eq!(json["kind"], "u16");
	assert_eq!(json["len"], 2);
	assert_eq!(json["hex"], "0001");
}

#[test]
fn encode_rejects_out_of_range_value() {
	let output = run_canoser(&["encode", "--kind", "u8", "300"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("invalid u8 value: 300"));
}
