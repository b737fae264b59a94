/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Reduce the bit depth of an image
//!
//! Every byte keeps its top `keep_bits` bits, the rest are cleared,
//! which truncates values toward zero in steps of `2^(8-keep_bits)`
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

use crate::utils::invalid_parameter;

/// Simulate a lower bit depth
///
/// This touches every byte, alpha included
pub struct Quantize {
    keep_bits: u8
}

impl Quantize {
    /// Create a new quantize operation keeping `keep_bits` most
    /// significant bits of each byte
    #[must_use]
    pub fn new(keep_bits: u8) -> Quantize {
        Quantize { keep_bits }
    }
}

impl OperationsTrait for Quantize {
    fn name(&self) -> &'static str {
        "Quantize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.keep_bits > 8 {
            return Err(invalid_parameter(
                "keep_bits",
                format!("{} is more than the 8 bits in a byte", self.keep_bits)
            ));
        }
        quantize(image.pixels_mut(), self.keep_bits);

        Ok(())
    }
}

/// Keep the `keep_bits` most significant bits of every byte
///
/// # Panics
/// If `keep_bits` is greater than 8
#[allow(clippy::cast_possible_truncation)]
pub fn quantize(channel: &mut [u8], keep_bits: u8) {
    assert!(keep_bits <= 8, "Cannot keep more than 8 bits");

    let mask = (0xFF_u16 << (8 - keep_bits)) as u8;

    for pix in channel {
        *pix &= mask;
    }
}
