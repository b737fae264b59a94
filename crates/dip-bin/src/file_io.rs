/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use dip_core::options::DecoderOptions;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::IntoImage;
use log::debug;

/// A bitmap on disk, decoded when the pipeline asks for it
pub struct BmpFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl BmpFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> BmpFile {
        BmpFile { file_path, options }
    }
}

impl IntoImage for BmpFile {
    fn into_image(self) -> Result<Image, ImageErrors> {
        debug!("Reading {:?}", self.file_path);
        Image::open_with_options(&self.file_path, self.options)
    }
}
