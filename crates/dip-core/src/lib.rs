/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by all dip crates
//!
//! It currently contains
//!
//! - A bytestream reader and writer with little endian reads and writes
//! - Decoder options
//! - A log facade that forwards to the `log` crate when the `log` feature is enabled
//!
//! # Features
//!  - `log`: Forward `trace!`,`debug!`... to the `log` crate, on by default.
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![macro_use]

pub mod bytestream;
pub mod log;
pub mod options;
