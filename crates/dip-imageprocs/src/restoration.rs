/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Motion blur restoration with a Wiener filter
//!
//! A linear motion blur is modelled by a line shaped point spread function,
//! which is inverted in the frequency domain by [`wiener_filter`]. Each color
//! channel is restored independently with the same filter.
use dip_core::log::trace;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;
use ndarray::Array2;

pub use crate::restoration::fft::{fft2d, ifft2d, FftPlans};
pub use crate::restoration::psf::synthesize_psf;
pub use crate::restoration::wiener::{
    fftshift, filter_2d_freq, restore, to_u8_min_max, wiener_filter
};
use crate::utils::{invalid_parameter, COLOR_CHANNELS};

mod fft;
mod psf;
mod wiener;

/// Parameters of the motion blur to undo
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RestorationParams {
    /// Length of the blur streak in pixels
    pub length: f64,
    /// Direction of the streak in degrees, counter-clockwise from the x axis
    pub angle:  f64,
    /// Signal to noise ratio, the filter uses its inverse
    pub snr:    f64
}

impl RestorationParams {
    pub const fn new(length: f64, angle: f64, snr: f64) -> RestorationParams {
        RestorationParams { length, angle, snr }
    }

    /// Check the parameters can produce a usable filter
    ///
    /// # Errors
    /// Non finite values, a negative length or a non positive snr
    pub fn validate(&self) -> Result<(), ImageErrors> {
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(invalid_parameter(
                "length",
                format!("{} must be a finite non-negative number", self.length)
            ));
        }
        if !self.angle.is_finite() {
            return Err(invalid_parameter(
                "angle",
                format!("{} is not a finite number", self.angle)
            ));
        }
        if !self.snr.is_finite() || self.snr <= 0.0 {
            return Err(invalid_parameter(
                "snr",
                format!("{} must be a finite positive number", self.snr)
            ));
        }
        Ok(())
    }

    /// Noise to signal ratio
    pub fn nsr(&self) -> f64 {
        1.0 / self.snr
    }
}

/// Restore a motion blurred image
///
/// Only the largest even sized region starting at the top left corner of
/// the picture is restored, an odd last row or column keeps its values.
/// Alpha is never touched.
pub struct WienerRestore {
    params: RestorationParams
}

impl WienerRestore {
    #[must_use]
    pub fn new(params: RestorationParams) -> WienerRestore {
        WienerRestore { params }
    }
}

impl OperationsTrait for WienerRestore {
    fn name(&self) -> &'static str {
        "Wiener restore"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        self.params.validate()?;

        let (width, height) = image.dimensions();
        let channels = image.channels();
        let bottom_up = image.is_bottom_up();

        let cols = width & !1;
        let rows = height & !1;

        if cols == 0 || rows == 0 {
            return Err(invalid_parameter(
                "dimensions",
                format!("{width}x{height} image has no even sized region to restore")
            ));
        }
        let start = std::time::Instant::now();

        let psf = synthesize_psf(rows, cols, self.params.length, self.params.angle);
        let filter = wiener_filter(&psf, self.params.nsr());
        let plans = FftPlans::new(rows, cols);

        // stored row of picture row `r`
        let stored_row = |r: usize| if bottom_up { height - 1 - r } else { r };

        let pixels = image.pixels_mut();

        for c in 0..COLOR_CHANNELS {
            let channel = Array2::from_shape_fn((rows, cols), |(r, x)| {
                f64::from(pixels[(stored_row(r) * width + x) * channels + c])
            });
            let restored = restore(channel.view(), &filter, &plans);

            for ((r, x), value) in restored.indexed_iter() {
                pixels[(stored_row(r) * width + x) * channels + c] = *value;
            }
        }
        trace!(
            "Restored {cols}x{rows} region in {:?}",
            start.elapsed()
        );
        Ok(())
    }
}
