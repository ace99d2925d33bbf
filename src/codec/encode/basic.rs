use byteorder::{BigEndian, ByteOrder};

use crate::codec::tags;
use crate::internal::buffer::OutputBuffer;
use crate::internal::error::Result;

/// Appends a nil value.
pub fn pack_nil(buf: &mut OutputBuffer) -> Result<()> {
    buf.push(tags::NIL)
}

/// Appends a boolean value.
pub fn pack_bool(buf: &mut OutputBuffer, value: bool) -> Result<()> {
    buf.push(if value { tags::TRUE } else { tags::FALSE })
}

/// Appends an unsigned integer using the narrowest family that holds it:
/// positive fixint, then uint8/16/32/64.
pub fn pack_uint(buf: &mut OutputBuffer, value: u64) -> Result<()> {
    if value <= 0x7F {
        buf.push(value as u8)
    } else if value <= 0xFF {
        buf.append(&[tags::UINT8, value as u8])
    } else if value <= 0xFFFF {
        let mut field = [0u8; 2];
        BigEndian::write_u16(&mut field, value as u16);
        buf.push(tags::UINT16)?;
        buf.append(&field)
    } else if value <= 0xFFFF_FFFF {
        let mut field = [0u8; 4];
        BigEndian::write_u32(&mut field, value as u32);
        buf.push(tags::UINT32)?;
        buf.append(&field)
    } else {
        let mut field = [0u8; 8];
        BigEndian::write_u64(&mut field, value);
        buf.push(tags::UINT64)?;
        buf.append(&field)
    }
}

/// Appends a signed integer. Non-negative values take the unsigned path;
/// negative values use negative fixint, then int8/16/32/64.
pub fn pack_int(buf: &mut OutputBuffer, value: i64) -> Result<()> {
    if value >= 0 {
        return pack_uint(buf, value as u64);
    }
    if value >= -32 {
        // The two's-complement byte of -32..-1 is the 0xE0..0xFF tag itself.
        buf.push(value as u8)
    } else if value >= i64::from(i8::MIN) {
        buf.append(&[tags::INT8, value as u8])
    } else if value >= i64::from(i16::MIN) {
        let mut field = [0u8; 2];
        BigEndian::write_i16(&mut field, value as i16);
        buf.push(tags::INT16)?;
        buf.append(&field)
    } else if value >= i64::from(i32::MIN) {
        let mut field = [0u8; 4];
        BigEndian::write_i32(&mut field, value as i32);
        buf.push(tags::INT32)?;
        buf.append(&field)
    } else {
        let mut field = [0u8; 8];
        BigEndian::write_i64(&mut field, value);
        buf.push(tags::INT64)?;
        buf.append(&field)
    }
}

/// Appends a float that is already 32-bit.
pub fn pack_f32(buf: &mut OutputBuffer, value: f32) -> Result<()> {
    let mut field = [0u8; 4];
    BigEndian::write_f32(&mut field, value);
    buf.push(tags::FLOAT32)?;
    buf.append(&field)
}

/// Appends a 64-bit float, narrowing to float32 only when the value
/// round-trips exactly through the 32-bit truncation.
pub fn pack_float(buf: &mut OutputBuffer, value: f64) -> Result<()> {
    let narrowed = value as f32;
    if f64::from(narrowed) == value {
        pack_f32(buf, narrowed)
    } else {
        let mut field = [0u8; 8];
        BigEndian::write_f64(&mut field, value);
        buf.push(tags::FLOAT64)?;
        buf.append(&field)
    }
}

/// Appends a string header and payload. Content is written as-is, without
/// UTF-8 validation.
pub fn pack_str(buf: &mut OutputBuffer, data: &[u8]) -> Result<()> {
    let len = data.len();
    if len <= tags::FIXSTR_MAX {
        buf.push(tags::FIXSTR_BASE | len as u8)?;
    } else if len <= 0xFF {
        buf.append(&[tags::STR8, len as u8])?;
    } else if len <= 0xFFFF {
        let mut field = [0u8; 2];
        BigEndian::write_u16(&mut field, len as u16);
        buf.push(tags::STR16)?;
        buf.append(&field)?;
    } else {
        let mut field = [0u8; 4];
        BigEndian::write_u32(&mut field, len as u32);
        buf.push(tags::STR32)?;
        buf.append(&field)?;
    }
    buf.append(data)
}

/// Appends a binary header and payload.
pub fn pack_bin(buf: &mut OutputBuffer, data: &[u8]) -> Result<()> {
    let len = data.len();
    if len <= 0xFF {
        buf.append(&[tags::BIN8, len as u8])?;
    } else if len <= 0xFFFF {
        let mut field = [0u8; 2];
        BigEndian::write_u16(&mut field, len as u16);
        buf.push(tags::BIN16)?;
        buf.append(&field)?;
    } else {
        let mut field = [0u8; 4];
        BigEndian::write_u32(&mut field, len as u32);
        buf.push(tags::BIN32)?;
        buf.append(&field)?;
    }
    buf.append(data)
}

/// Appends an extension value. Payloads of exactly 1/2/4/8/16 bytes use the
/// fixext forms; everything else uses ext8/16/32.
pub fn pack_ext(buf: &mut OutputBuffer, kind: i8, data: &[u8]) -> Result<()> {
    let len = data.len();
    match len {
        1 => buf.append(&[tags::FIXEXT1, kind as u8])?,
        2 => buf.append(&[tags::FIXEXT2, kind as u8])?,
        4 => buf.append(&[tags::FIXEXT4, kind as u8])?,
        8 => buf.append(&[tags::FIXEXT8, kind as u8])?,
        16 => buf.append(&[tags::FIXEXT16, kind as u8])?,
        _ if len <= 0xFF => buf.append(&[tags::EXT8, len as u8, kind as u8])?,
        _ if len <= 0xFFFF => {
            let mut field = [0u8; 2];
            BigEndian::write_u16(&mut field, len as u16);
            buf.push(tags::EXT16)?;
            buf.append(&field)?;
            buf.push(kind as u8)?;
        }
        _ => {
            let mut field = [0u8; 4];
            BigEndian::write_u32(&mut field, len as u32);
            buf.push(tags::EXT32)?;
            buf.append(&field)?;
            buf.push(kind as u8)?;
        }
    }
    buf.append(data)
}

/// Appends a timestamp in the smallest of its three wire layouts:
/// fixext4 (seconds only), fixext8 (nanoseconds + seconds, both 32-bit), or
/// ext8 length 12 (32-bit nanoseconds + 64-bit signed seconds).
pub fn pack_timestamp(buf: &mut OutputBuffer, seconds: i64, nanos: u32) -> Result<()> {
    let fits_u32 = (0..=i64::from(u32::MAX)).contains(&seconds);
    if nanos == 0 && fits_u32 {
        let mut field = [0u8; 4];
        BigEndian::write_u32(&mut field, seconds as u32);
        buf.append(&[tags::FIXEXT4, tags::TIMESTAMP_TYPE as u8])?;
        buf.append(&field)
    } else if fits_u32 {
        let mut field = [0u8; 8];
        BigEndian::write_u32(&mut field[..4], nanos);
        BigEndian::write_u32(&mut field[4..], seconds as u32);
        buf.append(&[tags::FIXEXT8, tags::TIMESTAMP_TYPE as u8])?;
        buf.append(&field)
    } else {
        let mut field = [0u8; 12];
        BigEndian::write_u32(&mut field[..4], nanos);
        BigEndian::write_i64(&mut field[4..], seconds);
        buf.append(&[tags::EXT8, 12, tags::TIMESTAMP_TYPE as u8])?;
        buf.append(&field)
    }
}
