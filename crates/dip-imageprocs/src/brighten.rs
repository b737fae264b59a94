/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Add a constant to the color channels of an image
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

use crate::utils::COLOR_CHANNELS;

/// Brighten or darken an image
///
/// The delta is added to the blue, green and red bytes of every pixel,
/// results are clamped to `[0,255]`. Alpha is left untouched.
pub struct Brighten {
    delta: i16
}

impl Brighten {
    /// Create a new brighten operation, negative values darken
    #[must_use]
    pub fn new(delta: i16) -> Brighten {
        Brighten { delta }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let channels = image.channels();
        brighten(image.pixels_mut(), channels, self.delta);

        Ok(())
    }
}

/// Add `delta` to the first three bytes of each `channels` wide pixel
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn brighten(pixels: &mut [u8], channels: usize, delta: i16) {
    for pixel in pixels.chunks_exact_mut(channels) {
        for pix in pixel.iter_mut().take(COLOR_CHANNELS) {
            *pix = (i16::from(*pix) + delta).clamp(0, 255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::brighten::brighten;

    #[test]
    fn brighten_saturates() {
        let mut pixels = [10, 240, 128, 10, 240, 128];
        brighten(&mut pixels, 3, 20);
        assert_eq!(pixels, [30, 255, 148, 30, 255, 148]);

        brighten(&mut pixels, 3, -40);
        assert_eq!(pixels, [0, 215, 108, 0, 215, 108]);
    }

    #[test]
    fn alpha_is_untouched() {
        let mut pixels = [1, 2, 3, 4, 250, 250, 250, 250];
        brighten(&mut pixels, 4, 40);
        assert_eq!(pixels, [41, 42, 43, 4, 255, 255, 255, 250]);
    }
}
