use bytes::Bytes;

use crate::internal::error::{Error, Result};

/// Growable output sink for the encoder.
///
/// Growth is amortized through `Vec::try_reserve`, so a failed reservation
/// surfaces as `Error::OutOfMemory` instead of aborting the process. On an
/// encode failure the bytes appended so far are left in place; they carry no
/// defined meaning and callers are expected to discard them.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Creates an empty buffer. No allocation happens until the first append.
    pub fn new() -> Self {
        OutputBuffer { data: Vec::new() }
    }

    /// Creates a buffer with room for `capacity` bytes up front.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve(capacity)
            .map_err(|_| Error::OutOfMemory(capacity))?;
        Ok(OutputBuffer { data })
    }

    /// Appends raw bytes to the end of the buffer.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        self.data
            .try_reserve(bytes.len())
            .map_err(|_| Error::OutOfMemory(bytes.len()))?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends a single byte.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.data.try_reserve(1).map_err(|_| Error::OutOfMemory(1))?;
        self.data.push(byte);
        Ok(())
    }

    /// Empties the buffer, keeping its backing storage for reuse.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer into an immutable `Bytes` handle.
    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }
}
