/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flop : Reflect pixels around the central y-axis
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::traits::OperationsTrait;

/// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
#[derive(Default)]
pub struct Flop;

impl Flop {
    /// Create a new flop implementation
    #[must_use]
    pub fn new() -> Flop {
        Self
    }
}

impl OperationsTrait for Flop {
    fn name(&self) -> &'static str {
        "Flop"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, _) = image.dimensions();
        let channels = image.channels();

        flop(image.pixels_mut(), width, channels);

        Ok(())
    }
}

/// Flop an interleaved image
///
/// Pixels swap places, the bytes inside a pixel keep their order.
///
/// # Panics
/// If `width*channels` does not evenly divide the image
pub fn flop(in_out_image: &mut [u8], width: usize, channels: usize) {
    let stride = width * channels;

    if stride == 0 {
        return;
    }
    assert_eq!(
        in_out_image.len() % stride,
        0,
        "Width does not evenly divide image"
    );

    for row in in_out_image.chunks_exact_mut(stride) {
        let (left_to_right, right_to_left) = row.split_at_mut((width / 2) * channels);

        // the middle pixel of an odd row stays in place
        let right_to_left = &mut right_to_left[(width % 2) * channels..];

        for (ltr, rtl) in left_to_right
            .chunks_exact_mut(channels)
            .zip(right_to_left.chunks_exact_mut(channels).rev())
        {
            ltr.swap_with_slice(rtl);
        }
    }
}
