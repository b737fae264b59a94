/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use dip_core::options::DecoderOptions;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use log::warn;

use crate::serde::Metadata;

/// Decode a file and describe its headers as pretty printed JSON
///
/// # Errors
/// If the file cannot be read or decoded
pub fn probe_file(file: &Path, options: DecoderOptions) -> Result<String, ImageErrors> {
    let size = std::fs::metadata(file)?.len();
    // we only describe the file, so accept any size
    let options = options
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let image = Image::open_with_options(file, options)?;
    let metadata = Metadata::new(file, size, &image);

    serde_json::to_string_pretty(&metadata)
        .map_err(|err| ImageErrors::GenericString(format!("Could not serialize metadata: {err}")))
}

/// Probe input files, extract metadata, and print to standard output.
///
/// Missing files are reported and skipped.
pub fn probe_input_files(files: &[&Path], options: DecoderOptions) -> Result<(), ImageErrors> {
    for file in files {
        if !file.exists() {
            warn!("Skipping {:?}, file does not exist", file);
            continue;
        }
        println!("{}", probe_file(file, options)?);
    }
    Ok(())
}
