/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for packed bitmaps
use std::io::Write;

use dip_core::bytestream::ByteWriter;

use crate::common::{BmpHeaders, HEADERS_SIZE};
use crate::BmpEncoderErrors;

/// A bitmap encoder
///
/// The headers are written back exactly as given, callers that change the
/// image dimensions update them first with [`BmpHeaders::set_dimensions`].
///
/// # Example
/// - Encode a 2 by 2 BGR image
/// ```
/// use dip_bmp::{BmpEncoder, BmpHeaders};
///
/// let headers = BmpHeaders::new(2, 2, 3);
/// let pixels = [0_u8; 12];
///
/// let bytes = BmpEncoder::new(&headers).encode(&pixels).unwrap();
/// assert_eq!(&bytes[..2], b"BM");
/// assert_eq!(bytes.len(), 54 + 12);
/// ```
pub struct BmpEncoder<'a> {
    headers: &'a BmpHeaders
}

impl<'a> BmpEncoder<'a> {
    /// Create a new encoder that will write `headers` in front of
    /// the pixels
    pub const fn new(headers: &'a BmpHeaders) -> BmpEncoder<'a> {
        BmpEncoder { headers }
    }

    /// Encode the pixels returning a vector containing
    /// encoded contents or an error if anything occurs
    pub fn encode(&self, pixels: &[u8]) -> Result<Vec<u8>, BmpEncoderErrors> {
        let expected = self.headers.pixel_len();

        if expected != pixels.len() {
            return Err(BmpEncoderErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        let out_size = expected
            .checked_add(HEADERS_SIZE)
            .ok_or(BmpEncoderErrors::TooLargeDimensions(expected))?;

        let mut output = vec![0; out_size];
        let mut stream = ByteWriter::new(&mut output);

        self.headers.write(&mut stream)?;
        stream.write_all(pixels)?;

        Ok(output)
    }

    /// Encode the pixels and write them to `sink`
    ///
    /// Returns the number of bytes written
    pub fn encode_to<W: Write>(
        &self, pixels: &[u8], sink: &mut W
    ) -> Result<usize, BmpEncoderErrors> {
        let bytes = self.encode(pixels)?;
        sink.write_all(&bytes)?;

        Ok(bytes.len())
    }
}
