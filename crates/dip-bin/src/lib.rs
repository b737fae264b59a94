/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The `dip` command line tool
//!
//! Every command reads a bitmap named after an image number from the
//! working directory and writes one or more processed bitmaps next to it,
//! e.g. `dip brighten 2 1` reads `input2.bmp` and writes `output2_1.bmp`.

use std::path::PathBuf;
use std::process::exit;

use clap::ArgMatches;
use dip_image::errors::ImageErrors;
use log::error;

pub use crate::cmd_args::create_cmd_args;
pub use crate::cmd_parsers::parameters::{EnhanceParams, ParameterTable, RestoreParams};
pub use crate::probe_files::probe_file;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

/// Run the command described by already parsed arguments
///
/// Returns the files written.
///
/// # Errors
/// Any decoding, processing or encoding error, and unusable parameters
pub fn run(options: &ArgMatches) -> Result<Vec<PathBuf>, ImageErrors> {
    let parsed_opts = cmd_parsers::global_options::parse_options(options);

    create_and_exec_workflow_from_cmd(options, &parsed_opts)
}

pub fn main() {
    let cmd = create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(options) => options,
        Err(err) => {
            // --help and --version are reported as errors too
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            exit(code);
        }
    };

    cmd_parsers::global_options::setup_logger(&options);

    if let Err(err) = run(&options) {
        println!();
        error!(" Could not complete workflow, reason {:?}", err);
        println!();
        exit(1);
    }
}
