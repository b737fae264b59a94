/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! The reader works on an in-memory slice and the writer on a
//! preallocated output slice, every read and write is bounds checked and
//! reports how much was requested and how much was available.
use core::fmt::{Debug, Display, Formatter};

pub use reader::ByteReader;
pub use writer::ByteWriter;

mod reader;
mod writer;

/// Errors raised by [`ByteReader`] and [`ByteWriter`]
#[derive(Clone, Eq, PartialEq)]
pub enum ByteIoError {
    /// Not enough bytes to satisfy a read
    ///
    /// Arguments are `(requested, available)`
    NotEnoughBytes(usize, usize),
    /// Not enough space to satisfy a write
    ///
    /// Arguments are `(requested, available)`
    NotEnoughBuffer(usize, usize),
    /// A seek went past the end of the stream
    SeekError(usize, usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ByteIoError::SeekError(position, len) => {
                writeln!(f, "Cannot seek to {position}, stream length is {len}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for ByteIoError {}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}
