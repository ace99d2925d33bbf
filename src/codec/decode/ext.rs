use crate::codec::decode::Reader;
use crate::codec::tags;
use crate::codec::types::Value;
use crate::internal::error::Result;

/// Reads an extension payload of `len` bytes, type byte first.
///
/// Extension type -1 is reserved for timestamps when the payload length
/// matches one of the three timestamp layouts (4, 8 or 12 bytes), whichever
/// ext family carried it. Type -1 with any other length falls back to an
/// opaque `Ext` value; the type byte alone does not guarantee timestamp
/// semantics.
pub fn read_ext(reader: &mut Reader, len: usize) -> Result<Value> {
    let kind = reader.read_i8()?;
    if kind == tags::TIMESTAMP_TYPE {
        match len {
            4 => {
                let seconds = i64::from(reader.read_u32()?);
                return Ok(Value::Timestamp { seconds, nanos: 0 });
            }
            8 => {
                let nanos = reader.read_u32()?;
                let seconds = i64::from(reader.read_u32()?);
                return Ok(Value::Timestamp { seconds, nanos });
            }
            12 => {
                let nanos = reader.read_u32()?;
                let seconds = reader.read_i64()?;
                return Ok(Value::Timestamp { seconds, nanos });
            }
            _ => {}
        }
    }
    Ok(Value::Ext {
        kind,
        data: reader.take(len)?,
    })
}
