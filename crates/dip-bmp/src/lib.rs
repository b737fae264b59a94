/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A BMP decoder and encoder for the packed bitmap layout
//!
//! The layout handled here is the classic one written by most image tools
//! for truecolor images:
//!
//! - a 14 byte file header starting with `BM`
//! - a 40 byte `BITMAPINFOHEADER`
//! - `width*height*(bits_per_pixel/8)` raw bytes with no row padding
//!
//! Headers are kept around after decoding, so an image can be written back
//! with exactly the header it was read with, save for the fields a transform
//! explicitly changed.
//!
//! # Supported formats
//! - 24 bit (3 channel) and 32 bit (4 channel) uncompressed pixels
//!
//! # Unsupported formats
//! - Palettes, RLE and bitfield compression
//!
//! # Example
//! ```
//! use dip_bmp::{BmpDecoder, BmpEncoder, BmpHeaders};
//!
//! let headers = BmpHeaders::new(2, 1, 3);
//! let pixels = [1, 2, 3, 4, 5, 6];
//! let bytes = BmpEncoder::new(&headers).encode(&pixels).unwrap();
//!
//! let mut decoder = BmpDecoder::new(&bytes);
//! assert_eq!(decoder.decode().unwrap(), pixels);
//! assert_eq!(decoder.headers(), Some(&headers));
//! ```

pub use crate::common::{BmpFileHeader, BmpHeaders, BmpInfoHeader, BMP_MAGIC, HEADERS_SIZE};
pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::encoder::BmpEncoder;
pub use crate::errors::{BmpDecoderErrors, BmpEncoderErrors};

mod common;
mod decoder;
mod encoder;
mod errors;
