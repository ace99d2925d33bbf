use byteorder::{BigEndian, ByteOrder};

use crate::codec::tags;
use crate::codec::types::Value;
use crate::codec::Encode;
use crate::internal::buffer::OutputBuffer;
use crate::internal::error::Result;

/// Appends an array header announcing `len` elements.
pub fn pack_array_header(buf: &mut OutputBuffer, len: usize) -> Result<()> {
    if len <= tags::FIXARRAY_MAX {
        buf.push(tags::FIXARRAY_BASE | len as u8)
    } else if len <= 0xFFFF {
        let mut field = [0u8; 2];
        BigEndian::write_u16(&mut field, len as u16);
        buf.push(tags::ARRAY16)?;
        buf.append(&field)
    } else {
        let mut field = [0u8; 4];
        BigEndian::write_u32(&mut field, len as u32);
        buf.push(tags::ARRAY32)?;
        buf.append(&field)
    }
}

/// Appends a map header announcing `len` key/value pairs.
pub fn pack_map_header(buf: &mut OutputBuffer, len: usize) -> Result<()> {
    if len <= tags::FIXMAP_MAX {
        buf.push(tags::FIXMAP_BASE | len as u8)
    } else if len <= 0xFFFF {
        let mut field = [0u8; 2];
        BigEndian::write_u16(&mut field, len as u16);
        buf.push(tags::MAP16)?;
        buf.append(&field)
    } else {
        let mut field = [0u8; 4];
        BigEndian::write_u32(&mut field, len as u32);
        buf.push(tags::MAP32)?;
        buf.append(&field)
    }
}

/// Appends an array: size header, then each element depth-first, no
/// separators.
pub fn pack_array(buf: &mut OutputBuffer, items: &[Value]) -> Result<()> {
    pack_array_header(buf, items.len())?;
    for item in items {
        item.encode(buf)?;
    }
    Ok(())
}

/// Appends a map: size header, then each entry as key then value, in order.
pub fn pack_map(buf: &mut OutputBuffer, entries: &[(Value, Value)]) -> Result<()> {
    pack_map_header(buf, entries.len())?;
    for (key, value) in entries {
        key.encode(buf)?;
        value.encode(buf)?;
    }
    Ok(())
}
