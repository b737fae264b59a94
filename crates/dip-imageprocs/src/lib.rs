/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `dip-image`
//!
//! Every routine exists twice, as a free function working on an interleaved
//! `u8` slice and as an operation struct implementing the `OperationsTrait`
//! defined by dip-image.
//!
//! Color aware routines (brighten, sharpen, gray world, hsv) only touch the
//! first three bytes of each pixel, a fourth alpha byte is passed through.
//!
//! # Example
//! - Brighten an image by 20
//! ```
//! use dip_image::image::Image;
//! use dip_image::traits::OperationsTrait;
//! use dip_imageprocs::brighten::Brighten;
//!
//! let mut image = Image::fill(100, 8, 8, 3);
//! Brighten::new(20).execute(&mut image).unwrap();
//! assert!(image.pixels().iter().all(|x| *x == 120));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::many_single_char_names
)]

pub mod box_blur;
pub mod brighten;
pub mod contrast;
pub mod flop;
pub mod gray_world;
pub mod hsv_adjust;
pub mod psnr;
pub mod quantize;
pub mod resize;
pub mod restoration;
pub mod sharpen;
mod utils;
