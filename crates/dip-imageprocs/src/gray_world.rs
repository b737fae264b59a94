/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Gray world white balance
//!
//! Assumes the average color of a scene is gray. Each color channel is
//! scaled by `gray/mean(channel)` where `gray` is the mean of the three
//! channel means.
//!
//! A scaled value is only stored when it lies in `[0,255]`, values that would
//! overflow keep their original value instead of clipping.
use dip_core::log::debug;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

use crate::utils::COLOR_CHANNELS;

/// Balance the color channels of an image
#[derive(Default)]
pub struct GrayWorld;

impl GrayWorld {
    #[must_use]
    pub fn new() -> GrayWorld {
        GrayWorld
    }
}

impl OperationsTrait for GrayWorld {
    fn name(&self) -> &'static str {
        "Gray world"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let channels = image.channels();
        gray_world(image.pixels_mut(), channels);

        Ok(())
    }
}

/// Per channel means of the first three channels
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn channel_means(pixels: &[u8], channels: usize) -> [f64; 3] {
    let mut sums = [0.0_f64; 3];
    let mut count = 0_usize;

    for pixel in pixels.chunks_exact(channels) {
        for (sum, pix) in sums.iter_mut().zip(pixel) {
            *sum += f64::from(*pix);
        }
        count += 1;
    }
    sums.map(|sum| sum / count as f64)
}

/// Apply gray world balancing in place
///
/// A channel whose mean is zero produces non finite scale factors, such
/// values are never stored and the channel is left as is.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn gray_world(pixels: &mut [u8], channels: usize) {
    if channels < COLOR_CHANNELS {
        return;
    }
    let means = channel_means(pixels, channels);
    let gray = (means[0] + means[1] + means[2]) / 3.0;

    debug!("Channel means {:?}, gray value {}", means, gray);

    for pixel in pixels.chunks_exact_mut(channels) {
        for (pix, mean) in pixel.iter_mut().zip(means) {
            let scaled = f64::from(*pix) * gray / mean;

            if (0.0..=255.0).contains(&scaled) {
                *pix = scaled as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gray_world::{channel_means, gray_world};

    #[test]
    fn uniform_gray_is_identity() {
        let mut pixels = vec![128_u8; 10 * 10 * 3];
        gray_world(&mut pixels, 3);
        assert!(pixels.iter().all(|x| *x == 128));
    }

    #[test]
    fn channels_are_pulled_to_the_same_mean() {
        // blue 60, green 120, red 180, gray is 120
        let mut pixels = [60, 120, 180, 60, 120, 180];
        gray_world(&mut pixels, 3);
        assert_eq!(pixels, [120, 120, 120, 120, 120, 120]);
    }

    #[test]
    fn overflowing_values_keep_their_value() {
        // blue mean 60, gray 90: 110*90/60 = 165, 10*90/60 = 15
        // red mean 120: green and red pixels are scaled by 90/90 and 90/120
        let mut pixels = [110, 90, 200, 10, 90, 40];
        let means = channel_means(&pixels, 3);
        assert_eq!(means, [60.0, 90.0, 120.0]);

        gray_world(&mut pixels, 3);
        assert_eq!(pixels, [165, 90, 150, 15, 90, 30]);

        // blue mean 100, gray 200: 250*2 would overflow and is kept
        let mut pixels = [250, 250, 250, 0, 250, 250, 50, 250, 250];
        gray_world(&mut pixels, 3);
        assert_eq!(pixels[0], 250);
        assert_eq!(pixels[3], 0);
        assert_eq!(pixels[6], 100);
    }

    #[test]
    fn zero_mean_channel_is_kept() {
        let mut pixels = [0, 100, 50, 4, 0, 100, 50, 4];
        gray_world(&mut pixels, 4);
        assert_eq!(pixels[0], 0);
        assert_eq!(pixels[3], 4);
    }
}
