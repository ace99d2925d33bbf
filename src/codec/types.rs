use bytes::Bytes;

/// A single MessagePack value.
///
/// Containers exclusively own their children, so dropping a value releases
/// every owned descendant exactly once. `Str`, `Bin` and `Ext` payloads are
/// refcounted `Bytes` views; after a decode they alias the input buffer
/// instead of copying it, and dropping them never frees that buffer.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    /// Unsigned integer; holds everything decoded from the positive fixint
    /// and uint8..uint64 tags.
    UInt(u64),
    /// Signed integer; holds everything decoded from the negative fixint and
    /// int8..int64 tags.
    Int(i64),
    Float32(f32),
    Float64(f64),
    /// String payload. The codec treats it as raw bytes and does not validate
    /// UTF-8.
    Str(Bytes),
    Bin(Bytes),
    Array(Vec<Value>),
    /// Key/value pairs in wire order. Duplicate keys are preserved, not
    /// merged; the format does not forbid them.
    Map(Vec<(Value, Value)>),
    /// Application-defined extension payload. `kind` -1 is reserved for
    /// timestamps and never round-trips as a plain extension.
    Ext { kind: i8, data: Bytes },
    /// Seconds may be pre-epoch; nanos in [0, 999_999_999] is an encoder-side
    /// contract only.
    Timestamp { seconds: i64, nanos: u32 },
}

impl Value {
    /// Builds a `Str` value by copying the given string.
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Bytes::copy_from_slice(s.as_ref().as_bytes()))
    }

    /// Builds a `Bin` value by copying the given bytes.
    pub fn binary(data: impl AsRef<[u8]>) -> Self {
        Value::Bin(Bytes::copy_from_slice(data.as_ref()))
    }

    /// Returns the UTF-8 view of a `Str` value, if it is one and decodes
    /// cleanly.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }
}

/// Value equality compares variant, numeric value, contents and recursive
/// structure. The wire format has a single integer tag space and a
/// narrowest-fit float rule, so the pairs it cannot distinguish compare equal
/// across variants: a non-negative `Int` equals the same `UInt`, and a
/// `Float32` equals the `Float64` it widens to.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::Int(b)) | (Value::Int(b), Value::UInt(a)) => {
                *b >= 0 && *b as u64 == *a
            }
            (Value::Float32(a), Value::Float32(b)) => a == b,
            (Value::Float64(a), Value::Float64(b)) => a == b,
            (Value::Float32(a), Value::Float64(b)) | (Value::Float64(b), Value::Float32(a)) => {
                f64::from(*a) == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bin(a), Value::Bin(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (
                Value::Ext { kind: a_kind, data: a_data },
                Value::Ext { kind: b_kind, data: b_data },
            ) => a_kind == b_kind && a_data == b_data,
            (
                Value::Timestamp { seconds: a_sec, nanos: a_ns },
                Value::Timestamp { seconds: b_sec, nanos: b_ns },
            ) => a_sec == b_sec && a_ns == b_ns,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::UInt(u64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::UInt(u64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt(u64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}
