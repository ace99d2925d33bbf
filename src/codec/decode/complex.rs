use crate::codec::decode::{read_value, Reader};
use crate::codec::types::Value;
use crate::internal::error::Result;

/// Reads `len` child values into an array.
///
/// The loop bound is the declared element count, never a sentinel in the
/// stream. Capacity is capped by the bytes actually remaining: every element
/// occupies at least one input byte, so a hostile declared count cannot force
/// a huge allocation before the truncation is detected.
pub fn read_array(reader: &mut Reader, len: usize, depth: usize) -> Result<Value> {
    let mut items = Vec::with_capacity(len.min(reader.remaining()));
    for _ in 0..len {
        items.push(read_value(reader, depth + 1)?);
    }
    Ok(Value::Array(items))
}

/// Reads `len` key/value pairs in wire order, key before value. Duplicate
/// keys are kept as-is.
pub fn read_map(reader: &mut Reader, len: usize, depth: usize) -> Result<Value> {
    let mut entries = Vec::with_capacity(len.min(reader.remaining() / 2));
    for _ in 0..len {
        let key = read_value(reader, depth + 1)?;
        let value = read_value(reader, depth + 1)?;
        entries.push((key, value));
    }
    Ok(Value::Map(entries))
}
