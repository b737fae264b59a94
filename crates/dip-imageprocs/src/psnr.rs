/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Peak signal to noise ratio
//!
//! ```text
//! PSNR = 10·log10(255²/MSE)
//! ```
//! with the mean squared error taken over every byte. Identical inputs
//! have an infinite PSNR.
use dip_image::errors::{ImageErrors, ImageOperationsErrors};
use dip_image::image::Image;

/// Calculate the PSNR between two equally sized byte buffers
///
/// # Errors
/// If the lengths differ or the buffers are empty
#[allow(clippy::cast_precision_loss)]
pub fn psnr(reference: &[u8], candidate: &[u8]) -> Result<f64, ImageErrors> {
    if reference.len() != candidate.len() {
        return Err(ImageErrors::DimensionsMisMatch(
            reference.len(),
            candidate.len()
        ));
    }
    if reference.is_empty() {
        return Err(ImageErrors::GenericStr("Cannot compute PSNR of empty images"));
    }
    let sum: u64 = reference
        .iter()
        .zip(candidate)
        .map(|(a, b)| {
            let diff = u64::from(a.abs_diff(*b));
            diff * diff
        })
        .sum();

    if sum == 0 {
        return Ok(f64::INFINITY);
    }
    let mse = sum as f64 / reference.len() as f64;

    Ok(10.0 * (255.0 * 255.0 / mse).log10())
}

/// Calculate the PSNR between two images
///
/// # Errors
/// If the images differ in dimensions or channel count
pub fn psnr_image(reference: &Image, candidate: &Image) -> Result<f64, ImageErrors> {
    let (rw, rh) = reference.dimensions();
    let (cw, ch) = candidate.dimensions();

    if (rw, rh, reference.channels()) != (cw, ch, candidate.channels()) {
        return Err(ImageErrors::OperationsError(
            ImageOperationsErrors::SizeMismatch(
                (rw, rh, reference.channels()),
                (cw, ch, candidate.channels())
            )
        ));
    }
    psnr(reference.pixels(), candidate.pixels())
}
