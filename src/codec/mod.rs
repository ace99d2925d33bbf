// Codec engine for the MessagePack wire format

pub mod decode;
pub mod encode;
pub mod tags;
pub mod types;

use bytes::Bytes;

use crate::internal::buffer::OutputBuffer;
use crate::internal::error::Result;

/// Types that can serialize themselves onto an output buffer.
pub trait Encode {
    fn encode(&self, buf: &mut OutputBuffer) -> Result<()>;
}

/// Types that can deserialize themselves from a reader cursor.
pub trait Decode: Sized {
    fn decode(reader: &mut decode::Reader) -> Result<Self>;
}

/// Encodes a single value into a freshly allocated byte sequence.
pub fn to_bytes(value: &types::Value) -> Result<Bytes> {
    let mut buf = OutputBuffer::new();
    value.encode(&mut buf)?;
    Ok(buf.freeze())
}

/// Decodes a single value from `data`.
///
/// String, binary and extension payloads in the result are views aliasing
/// `data` rather than copies. Trailing bytes after the first value are
/// ignored; use a [`decode::Reader`] directly to stream several values.
pub fn from_bytes(data: Bytes) -> Result<types::Value> {
    let mut reader = decode::Reader::new(data);
    types::Value::decode(&mut reader)
}

/// Decodes a single value from a borrowed slice. The slice is copied once up
/// front; payload views then alias that copy.
pub fn from_slice(data: &[u8]) -> Result<types::Value> {
    from_bytes(Bytes::copy_from_slice(data))
}
