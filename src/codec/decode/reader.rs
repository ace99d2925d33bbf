use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::internal::error::{Error, Result};

/// Bounded cursor over an input buffer.
///
/// Every read checks the bytes remaining first; shortfall is reported as
/// `TruncatedInput` and the cursor is left where it was. Payload slices
/// handed out by [`Reader::take`] share the backing allocation of the input,
/// so decoded views stay valid for as long as anyone holds them.
#[derive(Debug, Clone)]
pub struct Reader {
    data: Bytes,
    position: usize,
}

impl Reader {
    pub fn new(data: Bytes) -> Self {
        Reader { data, position: 0 }
    }

    /// Builds a reader over a borrowed slice, copying it once.
    pub fn from_slice(data: &[u8]) -> Self {
        Reader::new(Bytes::copy_from_slice(data))
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the input.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }

    /// Advances past `len` bytes and returns the window just consumed.
    fn consume(&mut self, len: usize) -> Result<&[u8]> {
        if self.remaining() < len {
            return Err(Error::TruncatedInput {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let start = self.position;
        self.position += len;
        Ok(&self.data[start..self.position])
    }

    /// Takes `len` payload bytes as a view sharing the input's backing
    /// buffer.
    pub fn take(&mut self, len: usize) -> Result<Bytes> {
        if self.remaining() < len {
            return Err(Error::TruncatedInput {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let view = self.data.slice(self.position..self.position + len);
        self.position += len;
        Ok(view)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.consume(1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.consume(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.consume(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(BigEndian::read_u64(self.consume(8)?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.consume(2)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.consume(4)?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.consume(8)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.consume(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.consume(8)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_reads() {
        let mut reader = Reader::from_slice(&[0x01, 0x02, 0x00, 0x00, 0x00, 0x2A]);
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        assert_eq!(reader.read_u32().unwrap(), 42);
        assert_eq!(reader.position(), 6);
        assert!(!reader.has_remaining());
    }

    #[test]
    fn test_truncated_read_reports_counts() {
        let mut reader = Reader::from_slice(&[0x01]);
        let err = reader.read_u32().unwrap_err();
        assert_eq!(err, Error::TruncatedInput { needed: 4, remaining: 1 });
        // A failed read leaves the cursor in place.
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
    }

    #[test]
    fn test_take_aliases_the_input() {
        let input = Bytes::from_static(b"abcdef");
        let base = input.as_ptr() as usize;
        let mut reader = Reader::new(input);
        reader.read_u8().unwrap();
        let view = reader.take(3).unwrap();
        assert_eq!(view.as_ref(), b"bcd");
        assert_eq!(view.as_ptr() as usize, base + 1);
    }

    #[test]
    fn test_take_past_end() {
        let mut reader = Reader::from_slice(&[1, 2, 3]);
        assert_eq!(
            reader.take(4).unwrap_err(),
            Error::TruncatedInput { needed: 4, remaining: 3 }
        );
    }
}
