/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

fn image_id() -> Arg {
    Arg::new("id")
        .help("Image number, reads input<id>.bmp")
        .required(true)
        .value_parser(value_parser!(u32))
}

fn degree() -> Arg {
    Arg::new("degree")
        .help("Enhancement degree, either 1 or 2")
        .required(true)
        .value_parser(value_parser!(u8).range(1..=2))
}

fn smooth() -> Arg {
    Arg::new("smooth")
        .long("smooth")
        .action(ArgAction::SetTrue)
        .help("Sample at fractional source coordinates")
        .long_help("Use fractional source coordinates when resizing.\nBy default source coordinates are truncated to whole pixels before interpolating.")
}

#[rustfmt::skip]
fn restore() -> Command {
    Command::new("restore")
        .about("Undo motion blur with a Wiener filter, writes output<id>.bmp")
        .arg(image_id())
        .arg(Arg::new("length")
            .long("length")
            .help("Length of the blur streak in pixels")
            .value_parser(value_parser!(f64)))
        .arg(Arg::new("angle")
            .long("angle")
            .help("Direction of the blur in degrees, counter-clockwise from the x axis")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f64)))
        .arg(Arg::new("snr")
            .long("snr")
            .help("Signal to noise ratio of the blurred image")
            .value_parser(value_parser!(f64)))
        .arg(Arg::new("reference")
            .long("reference")
            .help("Unblurred image to score the result against")
            .long_help("Unblurred image to score the result against.\nDefaults to input<id>_ori.bmp, the score is skipped if the file does not exist")
            .value_parser(value_parser!(PathBuf)))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("dip")
        .about("Classic image processing transforms over uncompressed bitmaps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("flip")
            .about("Mirror the image horizontally, writes output<id>_flip.bmp")
            .arg(image_id()))
        .subcommand(Command::new("quantize")
            .about("Keep 6, 4 and 2 bits per sample, writes output<id>_1.bmp to output<id>_3.bmp")
            .arg(image_id()))
        .subcommand(Command::new("scale")
            .about("Shrink and enlarge by 1.5, writes output<id>_down.bmp and output<id>_up.bmp")
            .arg(image_id())
            .arg(smooth()))
        .subcommand(Command::new("basic")
            .about("Run flip, quantize and scale")
            .arg(image_id())
            .arg(smooth()))
        .subcommand(Command::new("brighten")
            .about("Raise the brightness of a dark image")
            .arg(image_id())
            .arg(degree()))
        .subcommand(Command::new("sharpen")
            .about("Sharpen with a Laplacian kernel")
            .arg(image_id())
            .arg(degree()))
        .subcommand(Command::new("denoise")
            .about("Smooth noise away with a box blur")
            .arg(image_id())
            .arg(degree()))
        .subcommand(Command::new("balance")
            .about("Balance colors with the gray world assumption")
            .arg(image_id())
            .arg(degree()))
        .subcommand(Command::new("enhance")
            .about("Adjust saturation, value and contrast of output<id>_1.bmp")
            .arg(image_id())
            .arg(degree()))
        .subcommand(restore())
        .arg(Arg::new("dir")
            .short('C')
            .long("dir")
            .help("Directory holding the input and output files")
            .default_value(".")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("config")
            .long("config")
            .help("JSON file replacing the built-in parameter tables")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the headers of the input files as JSON instead of processing them"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the processing steps"))
        .group(ArgGroup::new("logging")
            .args(["debug", "trace", "warn", "info"]))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Reject bitmaps whose headers disagree with the pixel layout"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Largest width accepted when decoding")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Largest height accepted when decoding")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
}
