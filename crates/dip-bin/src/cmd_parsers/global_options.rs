/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use dip_core::options::DecoderOptions;
use log::{info, Level};

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub dir:             PathBuf,
    pub config:          Option<PathBuf>,
    pub probe:           bool,
    pub decoder_options: DecoderOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            dir:             PathBuf::from("."),
            config:          None,
            probe:           false,
            decoder_options: DecoderOptions::new_cmd()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(dir) = options.get_one::<PathBuf>("dir") {
        info!("Working directory {:?}", dir);
        cmd_options.dir.clone_from(dir);
    }
    if let Some(config) = options.get_one::<PathBuf>("config") {
        info!("Reading parameters from {:?}", config);
        cmd_options.config = Some(config.clone());
    }
    cmd_options.probe = options.get_flag("probe");
    cmd_options.decoder_options = get_decoder_options(options);

    cmd_options
}

/// Pick the log level from the logging flags, `Warn` if none was given
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }
    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
