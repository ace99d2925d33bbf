use crate::codec::decode::Reader;
use crate::codec::types::Value;
use crate::internal::error::Result;

/// Reads a big-endian IEEE-754 single-precision payload.
pub fn read_f32(reader: &mut Reader) -> Result<Value> {
    Ok(Value::Float32(reader.read_f32()?))
}

/// Reads a big-endian IEEE-754 double-precision payload.
pub fn read_f64(reader: &mut Reader) -> Result<Value> {
    Ok(Value::Float64(reader.read_f64()?))
}

/// Reads `len` payload bytes as a string view into the input buffer. The
/// content is not validated as UTF-8.
pub fn read_str(reader: &mut Reader, len: usize) -> Result<Value> {
    Ok(Value::Str(reader.take(len)?))
}

/// Reads `len` payload bytes as a binary view into the input buffer.
pub fn read_bin(reader: &mut Reader, len: usize) -> Result<Value> {
    Ok(Value::Bin(reader.take(len)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::error::Error;

    #[test]
    fn test_read_str_view() {
        let mut reader = Reader::from_slice(b"hello world");
        assert_eq!(read_str(&mut reader, 5).unwrap(), Value::string("hello"));
        assert_eq!(reader.position(), 5);
    }

    #[test]
    fn test_read_str_not_utf8_validated() {
        let mut reader = Reader::from_slice(&[0xFF, 0xFE, 0xFD]);
        let value = read_str(&mut reader, 3).unwrap();
        match value {
            Value::Str(bytes) => assert_eq!(bytes.as_ref(), &[0xFF, 0xFE, 0xFD]),
            other => panic!("expected Str, got {other:?}"),
        }
    }

    #[test]
    fn test_read_bin_truncated() {
        let mut reader = Reader::from_slice(&[1, 2]);
        assert_eq!(
            read_bin(&mut reader, 3).unwrap_err(),
            Error::TruncatedInput { needed: 3, remaining: 2 }
        );
    }

    #[test]
    fn test_read_floats() {
        let mut reader = Reader::from_slice(&[0x3F, 0xC0, 0x00, 0x00]);
        assert_eq!(read_f32(&mut reader).unwrap(), Value::Float32(1.5));
        let mut reader =
            Reader::from_slice(&[0x3F, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(read_f64(&mut reader).unwrap(), Value::Float64(1.5));
    }
}
