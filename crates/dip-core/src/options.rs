/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! The options are a builder, each setter consumes and returns
//! the options so they can be chained.
//!
//! ```
//! use dip_core::options::DecoderOptions;
//!
//! let options = DecoderOptions::default()
//!     .set_max_width(2048)
//!     .set_strict_mode(true);
//! assert_eq!(options.max_width(), 2048);
//! ```

/// Default maximum width and height the decoder accepts
const DEFAULT_MAX_DIMENSIONS: usize = 1 << 14;

/// Options influencing how bitmaps are decoded
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderOptions {
    /// Maximum width for which the decoder will
    /// not try to decode images larger than
    /// the specified width.
    max_width:   usize,
    /// Maximum height for which the decoder will
    /// not try to decode images larger than the specified height
    max_height:  usize,
    /// Treat recoverable oddities in the headers as errors
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:   DEFAULT_MAX_DIMENSIONS,
            max_height:  DEFAULT_MAX_DIMENSIONS,
            strict_mode: false
        }
    }
}

impl DecoderOptions {
    /// Options that refuse anything questionable
    pub fn new_safe() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }

    /// Options used by the command line front-end.
    ///
    /// Dimension limits are lifted, the user asked for the file explicitly.
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// In strict mode a pixel data offset that disagrees with the
    /// packed header layout is an error instead of a warning
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }
}
