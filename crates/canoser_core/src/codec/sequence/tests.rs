use crate::codec::{CodecError, Cursor, DecodeOptions, Field, FieldKind, decode_sequence, decode_sequence_from, encode_sequence};

#[test]
fn decodes_u8_then_u16_with_no_leftover() {
	let fields = decode_sequence(&[FieldKind::Uint8, FieldKind::Uint16], &[0x05, 0x00, 0x01], &DecodeOptions::default()).expect("sequence decodes");
	assert_eq!(fields, vec![Field::Uint8(5), Field::Uint16(256)]);
}

#[test]
fn strict_mode_rejects_trailing_bytes() {
	let err = decode_sequence(&[FieldKind::Uint8], &[0x05, 0x00, 0x01], &DecodeOptions::default()).expect_err("leftover bytes");
	assert_eq!(err, CodecError::TrailingBytes { consumed: 1, leftover: 2 });
}

#[test]
fn lenient_mode_ignores_trailing_bytes() {
	let options = DecodeOptions {
		strict_trailing: false,
		..DecodeOptions::default()
	};
	let fields = decode_sequence(&[FieldKind::Bool], &[0x01, 0xFF], &options).expect("lenient decode");
	assert_eq!(fields, vec![Field::Bool(true)]);
}

#[test]
fn mixed_sequence_round_trips() {
	let fields = vec![
		Field::Uint32(70_000),
		Field::absent(FieldKind::Uint64),
		Field::Bool(false),
		Field::present(Field::Uint16(513)),
		Field::Uint64(u64::MAX),
	];
	let kinds: Vec<_> = fields.iter().map(Field::kind).collect();

	let bytes = encode_sequence(&fields);
	assert_eq!(bytes.len(), 4 + 1 + 1 + 3 + 8);
	let decoded = decode_sequence(&kinds, &bytes, &DecodeOptions::default()).expect("mixed sequence decodes");
	assert_eq!(decoded, fields);
}

#[test]
fn failing_field_keeps_earlier_consumption() {
	let bytes = [0x01_u8, 0x02];
	let mut cursor = Cursor::new(&bytes);
	let err = decode_sequence_from(&[FieldKind::Bool, FieldKind::Bool], &mut cursor, &DecodeOptions::default()).expect_err("second bool malformed");
	assert!(matches!(err, CodecError::MalformedValue { at: 1, byte: 0x02, .. }));
	assert_eq!(cursor.pos(), 1);
}

#[test]
fn empty_kind_list_decodes_empty_buffer() {
	let fields = decode_sequence(&[], &[], &DecodeOptions::default()).expect("empty sequence");
	assert!(fields.is_empty());
	assert!(encode_sequence(&fields).is_empty());
}

#[test]
fn decodes_mixed_hex_vector() {
	let bytes = canoser_testkit::hex_bytes("2a 01 ff00 00 01 0100000000000000");
	let kinds = [
		FieldKind::Uint8,
		FieldKind::Bool,
		FieldKind::Uint16,
		FieldKind::optional(FieldKind::Uint32),
		FieldKind::optional(FieldKind::Uint64),
	];

	let fields = decode_sequence(&kinds, &bytes, &DecodeOptions::default()).expect("vector decodes");
	assert_eq!(
		fields,
		vec![
			Field::Uint8(42),
			Field::Bool(true),
			Field::Uint16(255),
			Field::absent(FieldKind::Uint32),
			Field::present(Field::Uint64(1)),
		]
	);
	assert_eq!(encode_sequence(&fields), bytes);
}
