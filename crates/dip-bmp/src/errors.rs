/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use dip_core::bytestream::ByteIoError;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The output buffer is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// Bits per pixel do not give 3 or 4 byte pixels
    UnsupportedDepth(u16),
    /// Width or height is zero or negative
    ZeroDimension(&'static str),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// Generic message
    GenericStatic(&'static str),
    /// A calculation overflowed
    OverFlowOccurred,
    /// The stream ended before the headers or pixels were complete
    IoErrors(ByteIoError)
}

impl BmpDecoderErrors {
    /// Whether the error comes from reading too little data, as
    /// opposed to reading data that is not a supported bitmap
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoErrors(_))
    }
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(
                    f,
                    "Unsupported bits per pixel {depth}, only 24 and 32 bit images are supported"
                )
            }
            Self::ZeroDimension(dimension) => {
                writeln!(f, "Image {dimension} is zero or negative, invalid image")
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::GenericStatic(header) => {
                writeln!(f, "{}", header)
            }
            Self::OverFlowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BmpDecoderErrors {}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

/// BMP errors that can occur during encoding
#[non_exhaustive]
pub enum BmpEncoderErrors {
    /// Pixel buffer length does not match the header,
    /// expected a size but got another size
    DimensionsMisMatch(usize, usize),
    /// Dimensions cannot be represented in the header fields
    TooLargeDimensions(usize),
    /// Writing to the output failed
    IoErrors(ByteIoError),
    StdIoErrors(std::io::Error)
}

impl Debug for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel buffer length mismatch, expected {expected} bytes but found {found}"
                )
            }
            Self::TooLargeDimensions(found) => {
                writeln!(f, "Too large dimensions, {found} cannot be stored in a bmp header")
            }
            Self::IoErrors(err) => writeln!(f, "{:?}", err),
            Self::StdIoErrors(err) => writeln!(f, "{}", err)
        }
    }
}

impl Display for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BmpEncoderErrors {}

impl From<ByteIoError> for BmpEncoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpEncoderErrors::IoErrors(value)
    }
}

impl From<std::io::Error> for BmpEncoderErrors {
    fn from(value: std::io::Error) -> Self {
        BmpEncoderErrors::StdIoErrors(value)
    }
}
