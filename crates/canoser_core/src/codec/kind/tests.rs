use crate::codec::{CodecError, FieldKind};

#[test]
fn parses_primitive_names_and_aliases() {
	assert_eq!("u8".parse::<FieldKind>().expect("u8"), FieldKind::Uint8);
	assert_eq!("Uint16".parse::<FieldKind>().expect("Uint16"), FieldKind::Uint16);
	assert_eq!(" u32 ".parse::<FieldKind>().expect("padded u32"), FieldKind::Uint32);
	assert_eq!("uint64".parse::<FieldKind>().expect("uint64"), FieldKind::Uint64);
	assert_eq!("boolean".parse::<FieldKind>().expect("boolean"), FieldKind::Bool);
}

#[test]
fn parses_nested_optional() {
	let kind: FieldKind = "optional<option<u16>>".parse().expect("nested optional parses");
	assert_eq!(kind, FieldKind::optional(FieldKind::optional(FieldKind::Uint16)));
	assert_eq!(kind.depth(), 2);
	assert_eq!(kind.innermost(), &FieldKind::Uint16);
	assert_eq!(kind.to_string(), "optional<optional<u16>>");
}

#[test]
fn rejects_unknown_kind() {
	let err = "i32".parse::<FieldKind>().expect_err("signed ints are not supported");
	assert_eq!(err, CodecError::InvalidKind { kind: "i32".to_owned() });

	let err = "optional<u8".parse::<FieldKind>().expect_err("unbalanced brackets");
	assert!(matches!(err, CodecError::InvalidKind { .. }));
}

#[test]
fn parse_enforces_depth_limit() {
	assert!(FieldKind::parse_with_depth("optional<u8>", 1).is_ok());
	let err = FieldKind::parse_with_depth("optional<optional<u8>>", 1).expect_err("too deep");
	assert_eq!(err, CodecError::DepthExceeded { max_depth: 1 });
}

#[test]
fn reports_fixed_widths() {
	let widths: Vec<_> = FieldKind::PRIMITIVES.iter().map(FieldKind::fixed_width).collect();
	assert_eq!(widths, vec![Some(1), Some(1), Some(2), Some(4), Some(8)]);
	assert_eq!(FieldKind::optional(FieldKind::Uint8).fixed_width(), None);
}

#[test]
fn reports_encoded_length_bounds() {
	assert_eq!(FieldKind::Uint32.min_encoded_len(), 4);
	assert_eq!(FieldKind::Uint32.max_encoded_len(), 4);

	let nested = FieldKind::optional(FieldKind::optional(FieldKind::Uint64));
	assert_eq!(nested.min_encoded_len(), 1);
	assert_eq!(nested.max_encoded_len(), 10);
}
