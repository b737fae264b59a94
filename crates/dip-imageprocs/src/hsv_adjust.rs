/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Adjust the saturation and value of an image
//!
//! Each pixel is converted to HSV with hue in degrees `[0,360)` and
//! saturation/value in `[0,1]`, saturation and value are scaled and the
//! pixel is converted back with the six sector formula.
//! Converted channels are truncated, not rounded.
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

use crate::utils::invalid_parameter;

/// Scale the saturation and value of an image
///
/// # Example
///
/// ```
/// use dip_image::image::Image;
/// use dip_image::traits::OperationsTrait;
/// use dip_imageprocs::hsv_adjust::HsvAdjust;
///
/// // gray pixels carry no saturation, only value changes them
/// let mut image = Image::fill(100, 4, 4, 3);
/// HsvAdjust::new(3.0, 1.0).execute(&mut image).unwrap();
/// assert!(image.pixels().iter().all(|x| *x == 100));
/// ```
pub struct HsvAdjust {
    saturation: f64,
    value:      f64
}

impl HsvAdjust {
    /// Create a new hsv adjust filter
    ///
    /// # Arguments
    /// - saturation: The saturation scaling factor, a value of 0 produces a grayscale image,
    ///   1 has no effect. Saturation is clamped to 1
    /// - value: The value scaling factor, value is clamped to 1
    #[must_use]
    pub fn new(saturation: f64, value: f64) -> HsvAdjust {
        HsvAdjust { saturation, value }
    }
}

impl OperationsTrait for HsvAdjust {
    fn name(&self) -> &'static str {
        "Hsv adjust"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        for (name, factor) in [("saturation", self.saturation), ("value", self.value)] {
            if !(factor.is_finite() && factor >= 0.0) {
                return Err(invalid_parameter(
                    name,
                    format!("{factor} is not a non-negative finite number")
                ));
            }
        }
        let channels = image.channels();
        enhance_saturation(image.pixels_mut(), channels, self.saturation, self.value);

        Ok(())
    }
}

/// Convert an RGB triple to hue (degrees), saturation and value
#[must_use]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let min_val = f64::from(r.min(g).min(b));
    let max_val = f64::from(r.max(g).max(b));
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));

    let v = max_val / 255.0;
    let delta = max_val - min_val;

    let s = if max_val == 0.0 { 0.0 } else { delta / max_val };

    let mut h = if delta == 0.0 {
        0.0
    } else if r == max_val {
        (g - b) / delta
    } else if g == max_val {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h *= 60.0;

    if h < 0.0 {
        h += 360.0;
    }
    (h, s, v)
}

/// Convert hue (degrees), saturation and value back to an RGB triple
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let to_u8 = |x: f64| (x * 255.0) as u8;

    if s == 0.0 {
        let gray = to_u8(v);
        return (gray, gray, gray);
    }
    let h = h / 60.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q)
    };
    (to_u8(r), to_u8(g), to_u8(b))
}

/// Scale saturation and value of every pixel
///
/// The first three bytes are converted in stored order as red, green and
/// blue, a fourth byte is left alone.
pub fn enhance_saturation(pixels: &mut [u8], channels: usize, saturation: f64, value: f64) {
    for pixel in pixels.chunks_exact_mut(channels) {
        let [r, g, b, ..] = pixel else {
            continue;
        };
        let (h, s, v) = rgb_to_hsv(*r, *g, *b);

        let s = (s * saturation).clamp(0.0, 1.0);
        let v = (v * value).min(1.0);

        let (new_r, new_g, new_b) = hsv_to_rgb(h, s, v);
        (*r, *g, *b) = (new_r, new_g, new_b);
    }
}
