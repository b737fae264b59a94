/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use dip_image::errors::{ImageErrors, ImageOperationsErrors};

/// Number of color channels, alpha excluded
pub(crate) const COLOR_CHANNELS: usize = 3;

pub(crate) fn invalid_parameter(name: &'static str, reason: String) -> ImageErrors {
    ImageErrors::OperationsError(ImageOperationsErrors::InvalidParameter(name, reason))
}
