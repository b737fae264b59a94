/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::ByteIoError;

/// An in-memory reader with little endian reads
///
/// # Example
/// ```
/// use dip_core::bytestream::ByteReader;
///
/// let mut reader = ByteReader::new(b"BM\x36\x00\x00\x00");
/// assert_eq!(reader.get_u16_le_err().unwrap(), 0x4D42);
/// assert_eq!(reader.get_u32_le_err().unwrap(), 54);
/// ```
pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader starting at the first byte of `stream`
    pub const fn new(stream: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream,
            position: 0
        }
    }
    /// Current read offset from the start of the stream
    #[inline(always)]
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Total length of the underlying stream
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.stream.len()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }
    /// Number of bytes that have not been read yet
    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }
    #[inline(always)]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Check if the stream can satisfy a read of `num` bytes
    #[inline(always)]
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }
    /// Move the read offset `num` bytes forward
    pub fn skip(&mut self, num: usize) -> Result<(), ByteIoError> {
        if !self.has(num) {
            return Err(ByteIoError::NotEnoughBytes(num, self.remaining()));
        }
        self.position += num;
        Ok(())
    }
    /// Move the read offset to an absolute position
    pub fn set_position(&mut self, position: usize) -> Result<(), ByteIoError> {
        if position > self.stream.len() {
            return Err(ByteIoError::SeekError(position, self.stream.len()));
        }
        self.position = position;
        Ok(())
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Read exactly `N` bytes or error out without advancing
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.read_exact_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    /// Fill `buf` completely from the stream
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let end = self.position.saturating_add(buf.len());

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                buf.copy_from_slice(bytes);
                self.position = end;
                Ok(())
            }
            None => Err(ByteIoError::NotEnoughBytes(buf.len(), self.remaining()))
        }
    }
}

macro_rules! get_single_type {
    ($name:tt,$int_type:tt) => {
        impl<'a> ByteReader<'a> {
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;
                Ok($int_type::from_le_bytes(space))
            }
        }
    };
}

get_single_type!(get_u16_le_err, u16);
get_single_type!(get_u32_le_err, u32);
get_single_type!(get_i32_le_err, i32);
