/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Resize an image to new dimensions
use dip_core::log::trace;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

use crate::utils::invalid_parameter;

mod bilinear;

/// How source coordinates are computed for each output pixel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResizeMethod {
    /// Source coordinates use integer division,
    /// `sx = x*(in_width-1)/(out_width-1)`, so every output pixel copies the
    /// nearest lower-left source sample
    #[default]
    BilinearTruncated,
    /// Source coordinates keep their fractional part and the four
    /// neighbours are blended
    Bilinear
}

#[derive(Copy, Clone, Debug)]
enum ResizeTarget {
    Dimensions(usize, usize),
    Rate(f32)
}

/// Resize an image
///
/// Header width, height and image size are updated, the row order is kept.
///
/// # Example
/// ```
/// use dip_image::image::Image;
/// use dip_image::traits::OperationsTrait;
/// use dip_imageprocs::resize::{Resize, ResizeMethod};
///
/// let mut image = Image::fill(7, 30, 20, 3);
/// Resize::by_rate(1.5, ResizeMethod::default()).execute(&mut image).unwrap();
/// assert_eq!(image.dimensions(), (20, 13));
/// ```
pub struct Resize {
    target: ResizeTarget,
    method: ResizeMethod
}

impl Resize {
    /// Resize to exact dimensions
    #[must_use]
    pub fn new(new_width: usize, new_height: usize, method: ResizeMethod) -> Resize {
        Resize {
            target: ResizeTarget::Dimensions(new_width, new_height),
            method
        }
    }

    /// Resize by a rate, rates above 1 shrink the image
    ///
    /// See [`dimensions_for_rate`] for how the new dimensions are derived
    #[must_use]
    pub fn by_rate(rate: f32, method: ResizeMethod) -> Resize {
        Resize {
            target: ResizeTarget::Rate(rate),
            method
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let channels = image.channels();

        let (new_width, new_height) = match self.target {
            ResizeTarget::Dimensions(w, h) => (w, h),
            ResizeTarget::Rate(rate) => {
                if !(rate.is_finite() && rate > 0.0) {
                    return Err(invalid_parameter(
                        "rate",
                        format!("{rate} is not a positive finite number")
                    ));
                }
                dimensions_for_rate(width, height, rate)
            }
        };
        if new_width == 0 || new_height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                format!("cannot resize {width}x{height} to {new_width}x{new_height}")
            ));
        }
        trace!("Resizing {width}x{height} to {new_width}x{new_height}");

        let mut new_pixels = vec![0; new_width * new_height * channels];

        resize(
            image.pixels(),
            &mut new_pixels,
            self.method,
            channels,
            width,
            height,
            new_width,
            new_height
        );
        image.set_pixels(new_pixels, new_width, new_height)
    }
}

/// Dimensions of an image scaled by `1/rate`
///
/// The height is truncated, the width is rounded to the nearest
/// multiple of 4. Computed in single precision.
///
/// # Example
/// ```
/// use dip_imageprocs::resize::dimensions_for_rate;
///
/// assert_eq!(dimensions_for_rate(512, 512, 1.5), (340, 341));
/// assert_eq!(dimensions_for_rate(512, 512, 1.0 / 1.5), (768, 768));
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn dimensions_for_rate(width: usize, height: usize, rate: f32) -> (usize, usize) {
    let new_height = (height as f32 / rate) as usize;
    let new_width = ((width as f32 / rate / 4.0).round() * 4.0) as usize;

    (new_width, new_height)
}

/// Resize an interleaved image to new dimensions
///
/// # Arguments
/// - in_image: The interleaved source pixels
/// - out_image: Where we will store the new resized pixels
/// - method: The resizing method to use
/// - channels: Bytes per pixel
/// - in_width: `in_image`'s width
/// - in_height:  `in_image`'s height.
/// - out_width: The expected width
/// - out_height: The expected height.
///
/// Neighbours past the last row or column are clamped to it.
///
/// # Panics
/// - `in_width*in_height*channels` do not match `in_image.len()`.
/// - `out_width*out_height*channels` do not match `out_image.len()`.
#[allow(clippy::too_many_arguments)]
pub fn resize(
    in_image: &[u8], out_image: &mut [u8], method: ResizeMethod, channels: usize,
    in_width: usize, in_height: usize, out_width: usize, out_height: usize
) {
    assert_eq!(in_image.len(), in_width * in_height * channels);
    assert_eq!(out_image.len(), out_width * out_height * channels);

    if in_image.is_empty() || out_image.is_empty() {
        return;
    }
    match method {
        ResizeMethod::BilinearTruncated => {
            bilinear::bilinear_impl::<true>(
                in_image, out_image, channels, in_width, in_height, out_width, out_height
            );
        }
        ResizeMethod::Bilinear => {
            bilinear::bilinear_impl::<false>(
                in_image, out_image, channels, in_width, in_height, out_width, out_height
            );
        }
    }
}
