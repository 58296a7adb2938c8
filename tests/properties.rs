use pbvarint::{
    decode_tag, decode_varint, try_decode_tag, try_decode_varint, varint_size, ErrorKind, Tag,
    WireType, MAX_LEN_64,
};
use proptest::prelude::*;

/// Reference varint encoder used to generate inputs.
fn encode(mut val: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_LEN_64);
    while val >= 0x80 {
        buf.push((val as u8) | 0x80);
        val >>= 7;
    }
    buf.push(val as u8);
    buf
}

fn wire_type() -> impl Strategy<Value = WireType> {
    prop_oneof![
        Just(WireType::Varint),
        Just(WireType::I64),
        Just(WireType::Len),
        Just(WireType::SGroup),
        Just(WireType::EGroup),
        Just(WireType::I32),
    ]
}

proptest! {
    #[test]
    fn varint_roundtrip(val in any::<u64>()) {
        let buf = encode(val);
        prop_assert_eq!(decode_varint(&buf), (val, buf.len() as i32));
        prop_assert_eq!(varint_size(val) as usize, buf.len());
    }

    #[test]
    fn varint_ignores_trailing_bytes(val in any::<u64>(), tail in prop::collection::vec(any::<u8>(), 0..16)) {
        let encoded = encode(val);
        let mut buf = encoded.clone();
        buf.extend(&tail);
        prop_assert_eq!(decode_varint(&buf), (val, encoded.len() as i32));
    }

    #[test]
    fn truncated_varint_is_incomplete(val in any::<u64>()) {
        let buf = encode(val);
        let short = &buf[..buf.len() - 1];
        prop_assert_eq!(decode_varint(short), (0, 0));

        let err = try_decode_varint(short).unwrap_err();
        prop_assert!(err.is_incomplete());
        prop_assert_eq!(err.offset(), short.len());
    }

    #[test]
    fn arbitrary_input_never_exceeds_max_len(buf in prop::collection::vec(any::<u8>(), 0..24)) {
        let (val, consumed) = decode_varint(&buf);
        prop_assert!((-11..=10).contains(&consumed));
        if consumed <= 0 {
            prop_assert_eq!(val, 0);
        }
        if consumed < 0 {
            prop_assert!(buf.len() >= MAX_LEN_64);
        }
    }

    #[test]
    fn tag_roundtrip(field_number in 1u64..(1 << 61), wire_type in wire_type()) {
        let tag = Tag::new(field_number, wire_type);
        let buf = encode(tag.to_raw());

        prop_assert_eq!(
            decode_tag(&buf),
            (field_number as i64, wire_type as u8, buf.len() as i32)
        );
        prop_assert_eq!(try_decode_tag(&buf), Ok((tag, buf.len())));
    }

    #[test]
    fn invalid_wire_type_is_rejected(field_number in 1u64..(1 << 61), wire_type in 6u8..=7) {
        let buf = encode((field_number << 3) | wire_type as u64);

        prop_assert_eq!(decode_tag(&buf), (0, 0, 0));
        let err = try_decode_tag(&buf).unwrap_err();
        prop_assert_eq!(err.kind(), &ErrorKind::InvalidWireType(wire_type));
        prop_assert_eq!(err.offset(), buf.len());
    }
}
