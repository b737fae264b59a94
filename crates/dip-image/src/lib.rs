/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The image type shared by the dip tools
//!
//! An [`Image`](crate::image::Image) is an interleaved, 8 bit per channel
//! bitmap together with the headers it was decoded with.
//! Pixels are kept in file order, that is BGR(A) and with rows in the order the
//! headers announce.
//!
//! Processing routines implement [`OperationsTrait`](crate::traits::OperationsTrait)
//! and can be run one by one or chained with a [`Pipeline`](crate::pipelines::Pipeline)
//!
//! # Example
//! ```no_run
//! use dip_image::image::Image;
//!
//! let image = Image::open("input1.bmp")?;
//! let (width, height) = image.dimensions();
//! println!("{width}x{height}, {} channels", image.channels());
//! image.save("copy.bmp")?;
//! # Ok::<(), dip_image::errors::ImageErrors>(())
//! ```
pub mod codecs;
pub mod errors;
pub mod image;
pub mod pipelines;
mod serde;
pub mod traits;
