/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Sharpen an image with an integer convolution kernel
//!
//! Two 3x3 kernels are provided
//! ```text
//! laplacian           strong laplacian
//! ┌────┬────┬────┐    ┌────┬────┬────┐
//! │  0 │ -1 │  0 │    │ -1 │ -1 │ -1 │
//! ├────┼────┼────┤    ├────┼────┼────┤
//! │ -1 │  5 │ -1 │    │ -1 │  9 │ -1 │
//! ├────┼────┼────┤    ├────┼────┼────┤
//! │  0 │ -1 │  0 │    │ -1 │ -1 │ -1 │
//! └────┴────┴────┘    └────┴────┴────┘
//! ```
//! The weighted sum is clamped to `[0,255]`, pixels closer to the
//! edge than half the kernel size keep their value.
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

use crate::utils::{invalid_parameter, COLOR_CHANNELS};

/// A square kernel with an odd side length
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Kernel {
    size:    usize,
    weights: Vec<i32>
}

impl Kernel {
    /// Identity plus the 4-neighbour laplacian
    pub const LAPLACIAN: [i32; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];
    /// Identity plus the 8-neighbour laplacian
    pub const STRONG_LAPLACIAN: [i32; 9] = [-1, -1, -1, -1, 9, -1, -1, -1, -1];

    /// Create a kernel from row major weights
    ///
    /// # Errors
    /// If `size` is even or `weights` does not hold `size*size` values
    pub fn new(size: usize, weights: Vec<i32>) -> Result<Kernel, ImageErrors> {
        if size % 2 == 0 {
            return Err(invalid_parameter(
                "kernel",
                format!("size {size} is even, a kernel needs a center")
            ));
        }
        if weights.len() != size * size {
            return Err(invalid_parameter(
                "kernel",
                format!(
                    "{} weights given for a {size}x{size} kernel",
                    weights.len()
                )
            ));
        }
        Ok(Kernel { size, weights })
    }

    /// Create a 3x3 kernel
    #[must_use]
    pub fn from_3x3(weights: [i32; 9]) -> Kernel {
        Kernel {
            size:    3,
            weights: weights.to_vec()
        }
    }

    #[must_use]
    pub fn laplacian() -> Kernel {
        Kernel::from_3x3(Kernel::LAPLACIAN)
    }

    #[must_use]
    pub fn strong_laplacian() -> Kernel {
        Kernel::from_3x3(Kernel::STRONG_LAPLACIAN)
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn weights(&self) -> &[i32] {
        &self.weights
    }
}

/// Sharpen the color channels of an image
pub struct Sharpen {
    kernel: Kernel
}

impl Sharpen {
    #[must_use]
    pub fn new(kernel: Kernel) -> Sharpen {
        Sharpen { kernel }
    }
}

impl OperationsTrait for Sharpen {
    fn name(&self) -> &'static str {
        "Sharpen"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let channels = image.channels();
        let source = image.pixels().to_vec();

        convolve_color(
            &source,
            image.pixels_mut(),
            width,
            height,
            channels,
            &self.kernel
        );
        Ok(())
    }
}

/// Convolve the first three channels of an interleaved image with `kernel`
///
/// Only the interior of `out_image` is written, callers wanting the border
/// preserved pass a copy of `in_image`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn convolve_color(
    in_image: &[u8], out_image: &mut [u8], width: usize, height: usize, channels: usize,
    kernel: &Kernel
) {
    let size = kernel.size();
    let half = size / 2;

    if width < size || height < size || channels == 0 {
        return;
    }
    let stride = width * channels;
    let weights = kernel.weights();

    for y in half..height - half {
        for x in half..width - half {
            for c in 0..channels.min(COLOR_CHANNELS) {
                let mut sum = 0_i64;

                for (j, kernel_row) in weights.chunks_exact(size).enumerate() {
                    let row = (y + j - half) * stride;

                    for (i, weight) in kernel_row.iter().enumerate() {
                        let pix = in_image[row + (x + i - half) * channels + c];
                        sum += i64::from(pix) * i64::from(*weight);
                    }
                }
                out_image[y * stride + x * channels + c] = sum.clamp(0, 255) as u8;
            }
        }
    }
}
