/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Box blur filter
//!
//! Each interior pixel becomes the truncated mean of the `(2r+1)x(2r+1)`
//! window around it. Pixels closer than `radius` to an edge are not
//! touched, the window never leaves the image.
use dip_core::log::trace;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

/// Perform a box blur
///
/// Radius is a measure of how many
/// pixels to include in the box blur.
///
/// The greater the radius, the more pronounced the box blur
#[derive(Default)]
pub struct BoxBlur {
    radius: usize
}

impl BoxBlur {
    /// Create a new blur operation.
    ///
    /// # Arguments
    /// - radius: The radius of the blur, larger the value the more pronounced the blur
    #[must_use]
    pub fn new(radius: usize) -> BoxBlur {
        BoxBlur { radius }
    }
}

impl OperationsTrait for BoxBlur {
    fn name(&self) -> &'static str {
        "Box blur"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let channels = image.channels();

        trace!("Running box blur with radius {}", self.radius);

        let mut scratch_space = vec![0; image.pixels().len()];
        box_blur(
            image.pixels_mut(),
            &mut scratch_space,
            width,
            height,
            channels,
            self.radius
        );

        Ok(())
    }
}

/// Blur an interleaved image in place
///
/// `scratch_space` must be as large as `in_out_image`, it receives a copy of
/// the input so that every window reads unblurred values.
///
/// All channels, alpha included, are blurred.
#[allow(clippy::cast_possible_truncation)]
pub fn box_blur(
    in_out_image: &mut [u8], scratch_space: &mut [u8], width: usize, height: usize,
    channels: usize, radius: usize
) {
    // a window that does not fit the address space does not fit the image either
    let Some(diameter) = radius.checked_mul(2).and_then(|d| d.checked_add(1)) else {
        return;
    };

    if radius == 0 || width < diameter || height < diameter || channels == 0 {
        return;
    }
    let stride = width * channels;
    let scratch_space = &mut scratch_space[..in_out_image.len()];
    scratch_space.copy_from_slice(in_out_image);

    // per channel summed area table, one extra row and column of zeros
    let table_stride = (width + 1) * channels;
    let mut table = vec![0_u64; (height + 1) * table_stride];

    for y in 0..height {
        let mut row_sum = vec![0_u64; channels];

        for x in 0..width {
            for c in 0..channels {
                row_sum[c] += u64::from(scratch_space[y * stride + x * channels + c]);

                table[(y + 1) * table_stride + (x + 1) * channels + c] =
                    table[y * table_stride + (x + 1) * channels + c] + row_sum[c];
            }
        }
    }

    let area = (diameter * diameter) as u64;

    for y in radius..height - radius {
        let (top, bottom) = (y - radius, y + radius + 1);

        for x in radius..width - radius {
            let (left, right) = (x - radius, x + radius + 1);

            for c in 0..channels {
                let sum = table[bottom * table_stride + right * channels + c]
                    + table[top * table_stride + left * channels + c]
                    - table[top * table_stride + right * channels + c]
                    - table[bottom * table_stride + left * channels + c];

                in_out_image[y * stride + x * channels + c] = (sum / area) as u8;
            }
        }
    }
}
