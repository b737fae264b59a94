/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The bitmap image representation
//!
//! Pixels are stored interleaved as they appear in the file,
//! `pixels[(y * width + x) * channels + c]` with channel 0 being blue.
//! `y` counts stored rows, so for a bottom-up bitmap row 0 is the bottom
//! row of the picture.
use dip_bmp::BmpHeaders;

use crate::errors::ImageErrors;

/// Represents a single bitmap image and the headers it is written back with
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    headers: BmpHeaders,
    pixels:  Vec<u8>
}

impl Image {
    /// Create an image from headers and pixels
    ///
    /// # Errors
    /// If the pixel length does not match `width*height*channels` of the headers
    pub fn from_headers(headers: BmpHeaders, pixels: Vec<u8>) -> Result<Image, ImageErrors> {
        if headers.pixel_len() != pixels.len() {
            return Err(ImageErrors::DimensionsMisMatch(
                headers.pixel_len(),
                pixels.len()
            ));
        }
        Ok(Image { headers, pixels })
    }

    /// Create a new bottom-up image from raw interleaved pixels
    ///
    /// # Errors
    /// If the pixel length does not match `width*height*channels`
    pub fn from_u8(
        pixels: &[u8], width: usize, height: usize, channels: usize
    ) -> Result<Image, ImageErrors> {
        Image::from_headers(BmpHeaders::new(width, height, channels), pixels.to_vec())
    }

    /// Create an image with every byte set to `value`
    pub fn fill(value: u8, width: usize, height: usize, channels: usize) -> Image {
        Image {
            headers: BmpHeaders::new(width, height, channels),
            pixels:  vec![value; width * height * channels]
        }
    }

    /// Create an image by calling `func` for every pixel
    ///
    /// The function receives the x and y coordinates in stored row order
    /// and a mutable slice of `channels` bytes to fill in
    ///
    /// # Example
    /// ```
    /// use dip_image::image::Image;
    ///
    /// let image = Image::from_fn(4, 2, 3, |x, y, pix| {
    ///     pix.fill((x + y) as u8);
    /// });
    /// assert_eq!(image.pixels()[3..6], [1, 1, 1]);
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, channels: usize, mut func: F) -> Image
    where
        F: FnMut(usize, usize, &mut [u8])
    {
        let mut image = Image::fill(0, width, height, channels);

        if channels == 0 || width == 0 {
            return image;
        }
        for (y, row) in image.pixels.chunks_exact_mut(width * channels).enumerate() {
            for (x, pix) in row.chunks_exact_mut(channels).enumerate() {
                func(x, y, pix);
            }
        }
        image
    }

    /// Return the image dimensions as width, height
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.headers.width(), self.headers.height())
    }

    /// Number of interleaved bytes per pixel
    pub const fn channels(&self) -> usize {
        self.headers.channels()
    }

    /// Whether stored row 0 is the bottom row of the picture
    pub const fn is_bottom_up(&self) -> bool {
        self.headers.is_bottom_up()
    }

    pub const fn headers(&self) -> &BmpHeaders {
        &self.headers
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the image returning the raw pixels
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Replace the pixels with a buffer of different dimensions.
    ///
    /// Header width, height and image size are updated to match,
    /// the row order and every other header field are kept.
    ///
    /// # Errors
    /// If `pixels` is not `width*height*channels` long or the dimensions
    /// do not fit the header
    pub fn set_pixels(
        &mut self, pixels: Vec<u8>, width: usize, height: usize
    ) -> Result<(), ImageErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(self.channels()))
            .ok_or(ImageErrors::GenericStr("Image dimensions overflow"))?;

        if expected != pixels.len() {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        self.headers
            .set_dimensions(width, height)
            .map_err(|_| ImageErrors::GenericStr("Image dimensions too large for a bmp header"))?;
        self.pixels = pixels;

        Ok(())
    }
}
