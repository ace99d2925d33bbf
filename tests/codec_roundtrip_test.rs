use bytes::Bytes;
use fulmen::{from_bytes, from_slice, to_bytes, Decode, Encode, Error, OutputBuffer, Reader, Value};

/// Builds a representative tree touching every variant the wire format can
/// round-trip.
fn sample_tree() -> Value {
    Value::Map(vec![
        (Value::string("name"), Value::string("Alice")),
        (Value::string("age"), Value::Int(30)),
        (Value::string("active"), Value::Bool(true)),
        (Value::string("score"), Value::Float64(99.25)),
        (
            Value::string("tags"),
            Value::Array(vec![Value::string("a"), Value::string("b")]),
        ),
        (Value::string("blob"), Value::binary([0xDE, 0xAD, 0xBE, 0xEF])),
        (Value::string("nothing"), Value::Nil),
        (
            Value::string("seen"),
            Value::Timestamp { seconds: 1_704_067_200, nanos: 500 },
        ),
        (
            Value::string("custom"),
            Value::Ext { kind: 42, data: Bytes::from_static(&[1, 2, 3]) },
        ),
    ])
}

#[test]
fn test_roundtrip_nested_tree() {
    let original = sample_tree();
    let encoded = to_bytes(&original).unwrap();
    let decoded = from_bytes(encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_roundtrip_integer_boundaries() {
    let values = [
        Value::UInt(0),
        Value::UInt(127),
        Value::UInt(128),
        Value::UInt(255),
        Value::UInt(256),
        Value::UInt(65535),
        Value::UInt(65536),
        Value::UInt(4_294_967_295),
        Value::UInt(4_294_967_296),
        Value::UInt(u64::MAX),
        Value::Int(-1),
        Value::Int(-32),
        Value::Int(-33),
        Value::Int(-128),
        Value::Int(-129),
        Value::Int(-32768),
        Value::Int(-32769),
        Value::Int(-2_147_483_648),
        Value::Int(-2_147_483_649),
        Value::Int(i64::MIN),
    ];
    for value in &values {
        let encoded = to_bytes(value).unwrap();
        assert_eq!(&from_bytes(encoded).unwrap(), value, "value {value:?}");
    }
}

#[test]
fn test_roundtrip_crosses_integer_variants() {
    // A non-negative Int comes back as UInt; equality still holds because the
    // wire has a single integer tag space.
    let encoded = to_bytes(&Value::Int(5)).unwrap();
    assert_eq!(encoded.as_ref(), &[0x05]);
    let decoded = from_bytes(encoded).unwrap();
    assert!(matches!(decoded, Value::UInt(5)));
    assert_eq!(decoded, Value::Int(5));
}

#[test]
fn test_roundtrip_narrows_floats() {
    let encoded = to_bytes(&Value::Float64(1.5)).unwrap();
    assert_eq!(encoded[0], 0xCA);
    let decoded = from_bytes(encoded).unwrap();
    assert!(matches!(decoded, Value::Float32(_)));
    assert_eq!(decoded, Value::Float64(1.5));

    let encoded = to_bytes(&Value::Float64(0.1)).unwrap();
    assert_eq!(encoded[0], 0xCB);
    assert_eq!(from_bytes(encoded).unwrap(), Value::Float64(0.1));
}

#[test]
fn test_roundtrip_string_length_boundaries() {
    for len in [0usize, 1, 31, 32, 255, 256, 65535, 65536] {
        let value = Value::Str(Bytes::from(vec![b'x'; len]));
        let encoded = to_bytes(&value).unwrap();
        assert_eq!(&from_bytes(encoded).unwrap(), &value, "len {len}");
    }
}

#[test]
fn test_roundtrip_timestamp_forms() {
    let stamps = [
        Value::Timestamp { seconds: 0, nanos: 0 },
        Value::Timestamp { seconds: 1_704_067_200, nanos: 0 },
        Value::Timestamp { seconds: 1_704_067_200, nanos: 500 },
        Value::Timestamp { seconds: i64::from(u32::MAX), nanos: 999_999_999 },
        Value::Timestamp { seconds: -5, nanos: 0 },
        Value::Timestamp { seconds: -5, nanos: 123 },
        Value::Timestamp { seconds: i64::from(u32::MAX) + 1, nanos: 0 },
        Value::Timestamp { seconds: i64::MIN, nanos: 1 },
    ];
    for stamp in &stamps {
        let encoded = to_bytes(stamp).unwrap();
        assert_eq!(&from_bytes(encoded).unwrap(), stamp, "stamp {stamp:?}");
    }
}

#[test]
fn test_roundtrip_ext_lengths() {
    for len in [0usize, 1, 2, 3, 4, 8, 15, 16, 17, 255, 256, 65536] {
        let value = Value::Ext { kind: 9, data: Bytes::from(vec![0xAB; len]) };
        let encoded = to_bytes(&value).unwrap();
        assert_eq!(&from_bytes(encoded).unwrap(), &value, "len {len}");
    }
}

#[test]
fn test_streaming_several_values_off_one_reader() {
    let mut buf = OutputBuffer::new();
    Value::UInt(1).encode(&mut buf).unwrap();
    Value::string("two").encode(&mut buf).unwrap();
    Value::Array(vec![Value::Nil]).encode(&mut buf).unwrap();
    let data = buf.freeze();

    let mut reader = Reader::new(data);
    assert_eq!(Value::decode(&mut reader).unwrap(), Value::UInt(1));
    assert_eq!(reader.position(), 1);
    assert_eq!(Value::decode(&mut reader).unwrap(), Value::string("two"));
    assert_eq!(reader.position(), 5);
    assert_eq!(Value::decode(&mut reader).unwrap(), Value::Array(vec![Value::Nil]));
    assert!(!reader.has_remaining());
}

#[test]
fn test_decoded_payloads_alias_the_input() {
    let encoded = to_bytes(&Value::string("hello")).unwrap();
    let base = encoded.as_ptr() as usize;
    let len = encoded.len();
    let decoded = from_bytes(encoded.clone()).unwrap();
    match decoded {
        Value::Str(view) => {
            let ptr = view.as_ptr() as usize;
            assert!(ptr >= base && ptr + view.len() <= base + len);
        }
        other => panic!("expected Str, got {other:?}"),
    }
}

#[test]
fn test_output_buffer_reuse_across_encodes() {
    let mut buf = OutputBuffer::with_capacity(64).unwrap();
    sample_tree().encode(&mut buf).unwrap();
    let first = buf.as_slice().to_vec();
    buf.clear();
    sample_tree().encode(&mut buf).unwrap();
    assert_eq!(buf.as_slice(), first.as_slice());
}

#[test]
fn test_failure_inside_container_is_terminal() {
    // A three-element array whose middle element is the reserved tag: the
    // already-decoded first element is dropped, and the error is the tag's.
    let result = from_slice(&[0x93, 0xA3, b'a', b'b', b'c', 0xC1, 0x01]);
    assert_eq!(result.unwrap_err(), Error::InvalidTag(0xC1));

    // Same shape, but the stream ends mid-element.
    let result = from_slice(&[0x93, 0xA3, b'a', b'b', b'c', 0xCD, 0x01]);
    assert!(matches!(result.unwrap_err(), Error::TruncatedInput { .. }));
}

#[test]
fn test_partial_container_failure_releases_children() {
    // A three-element array: the first element decodes to a view of the input
    // buffer, the second carries the reserved tag. A leaked sibling would keep
    // the input's refcount elevated after the failed decode returns.
    let input = Bytes::from(vec![0x93, 0xA3, b'a', b'b', b'c', 0xC1, 0x01]);
    let result = from_bytes(input.clone());
    assert_eq!(result.unwrap_err(), Error::InvalidTag(0xC1));
    assert!(input.is_unique());

    // Same check with the failure coming from truncation inside a map value.
    let input = Bytes::from(vec![0x81, 0xA1, b'k', 0xCD, 0x01]);
    let result = from_bytes(input.clone());
    assert!(matches!(result.unwrap_err(), Error::TruncatedInput { .. }));
    assert!(input.is_unique());
}

#[test]
fn test_encoder_never_mutates_input() {
    let original = sample_tree();
    let copy = original.clone();
    let _ = to_bytes(&original).unwrap();
    assert_eq!(original, copy);
}
