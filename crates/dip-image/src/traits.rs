/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits that image operations and sources implement
use dip_bmp::BmpDecoder;

use crate::errors::ImageErrors;
use crate::image::Image;

/// An operation that manipulates an image in place
///
/// Implementors provide [`execute_impl`](OperationsTrait::execute_impl),
/// callers use [`execute`](OperationsTrait::execute) which first checks the
/// image can be handled by this operation.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation, manipulating the image struct
    ///
    /// This is not meant to be called directly, see
    /// [`execute`](OperationsTrait::execute)
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Channel counts this operation can handle
    fn supported_channels(&self) -> &'static [usize] {
        &[3, 4]
    }

    /// Execute a simple operation on the image
    /// manipulating the image struct
    ///
    /// # Errors
    /// Unsupported channel counts and any operations error
    /// will be propagated to the caller
    ///
    /// # Example
    /// ```
    /// use dip_image::errors::ImageErrors;
    /// use dip_image::image::Image;
    /// use dip_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "invert"
    ///     }
    ///     fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
    ///         image.pixels_mut().iter_mut().for_each(|x| *x = 255 - *x);
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut image = Image::fill(10, 2, 2, 3);
    /// Invert.execute(&mut image)?;
    /// assert!(image.pixels().iter().all(|x| *x == 245));
    /// # Ok::<(), ImageErrors>(())
    /// ```
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let channels = image.channels();

        if !self.supported_channels().contains(&channels) {
            return Err(ImageErrors::UnsupportedChannels(self.name(), channels));
        }
        self.execute_impl(image)
    }
}

/// Anything that can be turned into an image
pub trait IntoImage {
    fn into_image(self) -> Result<Image, ImageErrors>;
}

impl IntoImage for Image {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Ok(self)
    }
}

impl<'a> IntoImage for BmpDecoder<'a> {
    fn into_image(mut self) -> Result<Image, ImageErrors> {
        let pixels = self.decode()?;
        let headers = self
            .headers()
            .copied()
            .ok_or(ImageErrors::GenericStr("Headers were not decoded"))?;

        Image::from_headers(headers, pixels)
    }
}
