/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Linear contrast stretch around mid gray
//!
//! Each value is moved away from (or toward) 128
//! ```text
//! R' = F(R-128)+128
//! ```
//! and clamped to `[0,255]`
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

use crate::utils::invalid_parameter;

/// Adjust the contrast of an image
///
/// Factors above 1 increase contrast, factors between 0 and 1 reduce it.
/// Every byte is adjusted, alpha included.
pub struct Contrast {
    factor: f64
}

impl Contrast {
    /// Create a new contrast filter
    #[must_use]
    pub fn new(factor: f64) -> Contrast {
        Contrast { factor }
    }
}

impl OperationsTrait for Contrast {
    fn name(&self) -> &'static str {
        "Contrast"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if !self.factor.is_finite() {
            return Err(invalid_parameter(
                "contrast",
                format!("{} is not a finite number", self.factor)
            ));
        }
        contrast_u8(image.pixels_mut(), self.factor);

        Ok(())
    }
}

/// Calculate the contrast of an image
///
/// See module docs for formula
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn contrast_u8(channel: &mut [u8], factor: f64) {
    for pix in channel {
        let float_pix = f64::from(*pix);
        let new_val = ((factor * (float_pix - 128.0)) + 128.0).clamp(0.0, 255.0);

        *pix = new_val as u8;
    }
}
