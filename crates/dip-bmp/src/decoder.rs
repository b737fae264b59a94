/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder for packed, uncompressed bitmaps
//!
//! The file is laid out as
//!
//! ```text
//!  offset 0  ┌──────────────────────┐
//!            │ file header (14)     │
//!  offset 14 ├──────────────────────┤
//!            │ info header (40)     │
//!  offset 54 ├──────────────────────┤
//!            │ width*height*channels│
//!            │ raw pixel bytes      │
//!            └──────────────────────┘
//! ```
//!
//! Rows carry no padding and are kept in the order they are stored,
//! the row order is reported via [`BmpHeaders::is_bottom_up`].

use dip_core::bytestream::{ByteIoError, ByteReader};
use dip_core::log::{trace, warn};
use dip_core::options::DecoderOptions;

use crate::common::{BmpHeaders, BMP_MAGIC, HEADERS_SIZE, INFO_HEADER_SIZE};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a bitmap this crate can decode
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read info header size
            if let Some(sz) = bytes.get(14) {
                return usize::from(*sz) == INFO_HEADER_SIZE;
            }
        }
    }
    false
}

/// A bitmap decoder
///
/// Headers are parsed lazily, the first call to any method that needs
/// them decodes them and caches the result.
pub struct BmpDecoder<'a> {
    bytes:   ByteReader<'a>,
    options: DecoderOptions,
    headers: Option<BmpHeaders>
}

impl<'a> BmpDecoder<'a> {
    /// Create a new bmp decoder that reads data from
    /// `data`
    pub fn new(data: &'a [u8]) -> BmpDecoder<'a> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The buffer from which we will read data from
    /// * `options`:  Limits and strictness for this decoder
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> BmpDecoder<'a> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            headers: None
        }
    }

    /// Decode headers stored in the bmp file
    ///
    /// # Returns
    /// - Ok(()) Indicates everything was okay during header parsing
    /// - Err: Error that occurred when decoding headers
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.headers.is_some() {
            return Ok(());
        }
        self.bytes.set_position(0)?;

        if self.bytes.get_u16_le_err()? != BMP_MAGIC {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }
        self.bytes.set_position(0)?;

        let headers = BmpHeaders::read(&mut self.bytes)?;
        let info = &headers.info;

        trace!("File size: {}", headers.file.size);
        trace!("Pixel data offset: {}", headers.file.pixel_data_offset);
        trace!("Width: {}", info.width);
        trace!("Height: {}", info.height);
        trace!("Bits per pixel: {}", info.bits_per_pixel);
        trace!("Compression: {}", info.compression);

        if info.width <= 0 {
            return Err(BmpDecoderErrors::ZeroDimension("width"));
        }
        if info.height == 0 {
            return Err(BmpDecoderErrors::ZeroDimension("height"));
        }
        if headers.width() > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                headers.width()
            ));
        }
        if headers.height() > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                headers.height()
            ));
        }
        if !matches!(info.bits_per_pixel, 24 | 32) {
            return Err(BmpDecoderErrors::UnsupportedDepth(info.bits_per_pixel));
        }
        if info.compression != 0 {
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::GenericStatic(
                    "Compressed bitmaps are not supported"
                ));
            }
            warn!(
                "Compression type {} ignored, pixels will be read as raw bytes",
                info.compression
            );
        }
        if headers.file.pixel_data_offset as usize != HEADERS_SIZE {
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::GenericStatic(
                    "Pixel data does not follow the headers"
                ));
            }
            warn!(
                "Pixel data offset {} ignored, reading pixels at {}",
                headers.file.pixel_data_offset, HEADERS_SIZE
            );
        }

        self.headers = Some(headers);

        Ok(())
    }

    /// Return the headers or `None` if they haven't been decoded
    pub const fn headers(&self) -> Option<&BmpHeaders> {
        self.headers.as_ref()
    }

    /// Get dimensions of the image
    ///
    /// This is a tuple of width,height
    ///
    /// # Returns
    /// - `Some((width,height))`  - The image dimensions
    /// - `None`: Indicates that the image headers weren't decoded
    ///    or an error occurred during decoding the headers
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.headers.as_ref().map(|h| (h.width(), h.height()))
    }

    /// Bytes per pixel, or `None` if headers weren't decoded
    pub fn channels(&self) -> Option<usize> {
        self.headers.as_ref().map(BmpHeaders::channels)
    }

    /// Return the expected size of the output buffer
    ///
    /// Returns `None` if headers haven't been decoded or if calculation overflows
    pub fn output_buf_size(&self) -> Option<usize> {
        let headers = self.headers.as_ref()?;

        headers
            .width()
            .checked_mul(headers.height())?
            .checked_mul(headers.channels())
    }

    /// Decode an image returning the decoded bytes as an
    /// allocated `Vec<u8>` or an error if decoding could not be completed
    ///
    /// Also see [`decode_into`](Self::decode_into) which decodes into
    /// a pre-allocated buffer
    pub fn decode(&mut self) -> Result<Vec<u8>, BmpDecoderErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buf_size()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        // headers may claim far more pixels than the file holds
        self.bytes.set_position(HEADERS_SIZE)?;
        if !self.bytes.has(output_size) {
            return Err(BmpDecoderErrors::IoErrors(ByteIoError::NotEnoughBytes(
                output_size,
                self.bytes.remaining()
            )));
        }
        let mut output = vec![0_u8; output_size];
        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode an encoded image into a buffer or return an error
    /// if something bad occurred
    ///
    /// Only the first [`output_buf_size`](Self::output_buf_size) bytes of
    /// `buf` are written.
    pub fn decode_into(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buf_size()
            .ok_or(BmpDecoderErrors::OverFlowOccurred)?;

        if buf.len() < output_size {
            return Err(BmpDecoderErrors::TooSmallBuffer(output_size, buf.len()));
        }

        self.bytes.set_position(HEADERS_SIZE)?;
        self.bytes.read_exact_bytes(&mut buf[..output_size])?;

        if !self.bytes.eof() {
            trace!("{} trailing bytes after pixel data", self.bytes.remaining());
        }
        Ok(())
    }
}
