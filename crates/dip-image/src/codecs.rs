/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Reading and writing images from memory and files
use std::io::Write;
use std::path::Path;

use dip_bmp::{BmpDecoder, BmpEncoder};
use dip_core::log::trace;
use dip_core::options::DecoderOptions;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::IntoImage;

impl Image {
    /// Decode a bitmap held in memory
    ///
    /// # Arguments
    /// - data: The encoded bytes
    /// - options: Limits and strictness for the decoder
    pub fn read(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
        BmpDecoder::new_with_options(data, options).into_image()
    }

    /// Open a bitmap file with default decoder options
    pub fn open<P: AsRef<Path>>(file: P) -> Result<Image, ImageErrors> {
        Self::open_with_options(file, DecoderOptions::default())
    }

    /// Open a bitmap file with the specified custom decoder options
    ///
    /// # Example
    ///  -  Decode a file with strict mode enabled and only expect images with less
    ///  than 100 pixels in width
    ///
    /// ```no_run
    /// use dip_core::options::DecoderOptions;
    /// use dip_image::image::Image;
    /// let options = DecoderOptions::default().set_strict_mode(true).set_max_width(100);
    /// let image = Image::open_with_options("input1.bmp", options).unwrap();
    /// ```
    pub fn open_with_options<P: AsRef<Path>>(
        file: P, options: DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let path = file.as_ref();
        trace!("Reading {:?}", path);

        let data = std::fs::read(path)?;
        Self::read(&data, options)
    }

    /// Encode the image returning a vector containing the bitmap bytes
    pub fn write_to_vec(&self) -> Result<Vec<u8>, ImageErrors> {
        Ok(BmpEncoder::new(self.headers()).encode(self.pixels())?)
    }

    /// Encode the image into `sink`
    ///
    /// Returns the number of bytes written
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<usize, ImageErrors> {
        Ok(BmpEncoder::new(self.headers()).encode_to(self.pixels(), sink)?)
    }

    /// Save the image to a file, replacing it if it exists
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), ImageErrors> {
        trace!("Writing {:?}", file.as_ref());
        // open a file for which we will write directly to
        let mut file = std::io::BufWriter::new(
            std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(file)?
        );
        self.write_to(&mut file)?;
        file.flush()?;

        Ok(())
    }
}
