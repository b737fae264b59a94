/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Frequency domain Wiener deconvolution
//!
//! For a point spread function `h` with spectrum `H`, the filter is
//! ```text
//! G = Re(H) / (Re(H)² + nsr)
//! ```
//! which assumes a real, symmetric PSF so the imaginary part of `H` can be
//! ignored.
use ndarray::{Array2, ArrayView2};

use crate::restoration::fft::{fft2d, ifft2d, FftPlans};

/// Swap the quadrants of a matrix so the zero frequency moves between the
/// corner and the center
///
/// The quadrants are `cols/2 x rows/2`, for odd sizes the last row and
/// column stay in place.
pub fn fftshift(input: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = input.dim();
    let (cy, cx) = (rows / 2, cols / 2);
    let mut output = input.clone();

    if cy == 0 || cx == 0 {
        return output;
    }
    for r in 0..2 * cy {
        for c in 0..2 * cx {
            output[[(r + cy) % (2 * cy), (c + cx) % (2 * cx)]] = input[[r, c]];
        }
    }
    output
}

/// Build the Wiener filter of a point spread function
///
/// # Arguments
/// - psf: The point spread function, centered in the matrix
/// - nsr: Noise to signal ratio, `1/snr`
pub fn wiener_filter(psf: &Array2<f64>, nsr: f64) -> Array2<f64> {
    let (rows, cols) = psf.dim();
    let plans = FftPlans::new(rows, cols);

    let shifted = fftshift(psf);
    let spectrum = fft2d(shifted.view(), &plans);

    spectrum.mapv(|h| h.re / (h.re * h.re + nsr))
}

/// Multiply the spectrum of `input` with `filter` and return the real part
/// of the inverse transform
///
/// The forward transform is scaled by `1/(rows*cols)`, the inverse is not.
///
/// # Panics
/// If `filter` and `input` differ in size
#[allow(clippy::cast_precision_loss)]
pub fn filter_2d_freq(
    input: ArrayView2<f64>, filter: &Array2<f64>, plans: &FftPlans
) -> Array2<f64> {
    assert_eq!(input.dim(), filter.dim(), "Filter size mismatch");

    let (rows, cols) = input.dim();
    let scale = 1.0 / (rows * cols) as f64;

    let mut spectrum = fft2d(input, plans);
    spectrum.zip_mut_with(filter, |s, g| *s *= g * scale);

    ifft2d(&spectrum, plans).mapv(|v| v.re)
}

/// Round and saturate to `u8` then stretch to the full `[0,255]` range
///
/// A constant result maps to 0.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn to_u8_min_max(input: &Array2<f64>) -> Array2<u8> {
    let saturated = input.mapv(|v| v.round_ties_even().clamp(0.0, 255.0) as u8);

    let min = saturated.iter().copied().min().unwrap_or(0);
    let max = saturated.iter().copied().max().unwrap_or(0);

    if max == min {
        return saturated.mapv(|_| 0);
    }
    let scale = 255.0 / f64::from(max - min);

    saturated.mapv(|v| (f64::from(v - min) * scale).round_ties_even().clamp(0.0, 255.0) as u8)
}

/// Restore a single channel with a precomputed Wiener filter
pub fn restore(channel: ArrayView2<f64>, filter: &Array2<f64>, plans: &FftPlans) -> Array2<u8> {
    let filtered = filter_2d_freq(channel, filter, plans);
    to_u8_min_max(&filtered)
}
