/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::ByteIoError;

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
///
/// The writer never grows its buffer, callers size the
/// output up front and every write is checked against it.
pub struct ByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> ByteWriter<'a> {
    /// Create a new writer for the stream
    pub fn new(data: &'a mut [u8]) -> ByteWriter<'a> {
        ByteWriter {
            buffer:   data,
            position: 0
        }
    }
    /// Return number of unwritten bytes in this stream
    ///
    /// # Example
    /// ```
    /// use dip_core::bytestream::ByteWriter;
    /// let mut storage = [0;10];
    ///
    /// let writer = ByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_left(),10); // no bytes were written
    /// ```
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if the byte writer can support
    /// the following write
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Write all of `buf` or nothing at all
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        let end = self.position.saturating_add(buf.len());

        match self.buffer.get_mut(self.position..end) {
            Some(m_bytes) => {
                m_bytes.copy_from_slice(buf);
                self.position = end;
                Ok(())
            }
            None => Err(ByteIoError::NotEnoughBuffer(buf.len(), self.bytes_left()))
        }
    }
}

macro_rules! write_single_type {
    ($name:tt,$int_type:tt) => {
        impl<'a> ByteWriter<'a> {
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                let bytes = byte.to_le_bytes();
                self.write_all(&bytes)
            }
        }
    };
}

write_single_type!(write_u16_le_err, u16);
write_single_type!(write_u32_le_err, u32);
write_single_type!(write_i32_le_err, i32);
