/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use dip_bmp::{BmpDecoderErrors, BmpEncoderErrors};

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// The bitmap could not be decoded
    ImageDecodeErrors(BmpDecoderErrors),
    /// The bitmap could not be encoded
    EncodeErrors(BmpEncoderErrors),
    /// A file could not be opened, read or written
    IoErrors(std::io::Error),
    /// Pixel buffer does not match the dimensions, expected
    /// one length but found another
    DimensionsMisMatch(usize, usize),
    /// The operation cannot run on images with this many channels
    UnsupportedChannels(&'static str, usize),
    NoImageForOperations,
    OperationsError(ImageOperationsErrors),
    GenericString(String),
    GenericStr(&'static str)
}

/// Errors that may occur during image operations
pub enum ImageOperationsErrors {
    /// A parameter is outside the range the operation accepts
    InvalidParameter(&'static str, String),
    /// Two images that must agree in size do not
    SizeMismatch((usize, usize, usize), (usize, usize, usize)),
    /// Generic errors
    Generic(&'static str),
    /// Generic errors which have more context
    GenericString(String)
}

impl ImageErrors {
    /// Whether this error was caused by a missing, unreadable or
    /// truncated file rather than by its contents
    pub const fn is_io_error(&self) -> bool {
        match self {
            Self::IoErrors(_) => true,
            Self::ImageDecodeErrors(err) => err.is_io_error(),
            _ => false
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageDecodeErrors(ref error) => {
                writeln!(f, "Bmp decoding failed: {:?}", error)
            }
            Self::EncodeErrors(ref error) => {
                writeln!(f, "Bmp encoding failed: {:?}", error)
            }
            Self::IoErrors(ref error) => writeln!(f, "{}", error),
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {} but found {}",
                    expected, found
                )
            }
            Self::UnsupportedChannels(operation, found) => {
                writeln!(
                    f,
                    "Operation {operation} does not support images with {found} channels"
                )
            }
            Self::NoImageForOperations => {
                writeln!(f, "No image found for which we can execute operations")
            }
            Self::OperationsError(ref error) => writeln!(f, "{:?}", error),
            Self::GenericString(err) => writeln!(f, "{}", err),
            Self::GenericStr(err) => writeln!(f, "{}", err)
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for ImageErrors {}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(name, reason) => {
                writeln!(f, "Invalid value for {name}: {reason}")
            }
            Self::SizeMismatch(expected, found) => {
                writeln!(
                    f,
                    "Image size mismatch, expected {:?} (w, h, c) but found {:?}",
                    expected, found
                )
            }
            Self::Generic(reason) => writeln!(f, "{:}", reason),
            Self::GenericString(err) => writeln!(f, "{}", err)
        }
    }
}

impl From<BmpDecoderErrors> for ImageErrors {
    fn from(from: BmpDecoderErrors) -> Self {
        ImageErrors::ImageDecodeErrors(from)
    }
}

impl From<BmpEncoderErrors> for ImageErrors {
    fn from(from: BmpEncoderErrors) -> Self {
        ImageErrors::EncodeErrors(from)
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(from: std::io::Error) -> Self {
        ImageErrors::IoErrors(from)
    }
}

impl From<ImageOperationsErrors> for ImageErrors {
    fn from(from: ImageOperationsErrors) -> Self {
        ImageErrors::OperationsError(from)
    }
}

impl From<String> for ImageErrors {
    fn from(from: String) -> Self {
        ImageErrors::GenericString(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(from: &'static str) -> Self {
        ImageErrors::GenericStr(from)
    }
}
