/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use dip_core::options::DecoderOptions;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::pipelines::Pipeline;
use dip_image::traits::{IntoImage, OperationsTrait};
use dip_imageprocs::box_blur::BoxBlur;
use dip_imageprocs::brighten::Brighten;
use dip_imageprocs::contrast::Contrast;
use dip_imageprocs::flop::Flop;
use dip_imageprocs::gray_world::GrayWorld;
use dip_imageprocs::hsv_adjust::HsvAdjust;
use dip_imageprocs::psnr::psnr_image;
use dip_imageprocs::quantize::Quantize;
use dip_imageprocs::resize::{Resize, ResizeMethod};
use dip_imageprocs::restoration::WienerRestore;
use dip_imageprocs::sharpen::Sharpen;
use log::{info, warn};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::parameters::ParameterTable;
use crate::file_io::BmpFile;
use crate::probe_files::probe_input_files;

/// Bits kept by `quantize`, output suffix is the number of dropped bits halved
const QUANTIZE_BITS: [(u8, u8); 3] = [(1, 6), (2, 4), (3, 2)];
/// Rates for `scale`, above 1 shrinks
const SCALE_RATES: [(&str, f32); 2] = [("down", 1.5), ("up", 1.0 / 1.5)];

/// One output file and the operations producing it from the input
struct Job {
    output:     String,
    operations: Vec<Box<dyn OperationsTrait>>
}

impl Job {
    fn new(output: String, operations: Vec<Box<dyn OperationsTrait>>) -> Job {
        Job { output, operations }
    }
}

fn get_arg<T: Clone + Send + Sync + 'static>(
    args: &ArgMatches, name: &'static str
) -> Result<T, ImageErrors> {
    args.get_one::<T>(name)
        .cloned()
        .ok_or_else(|| ImageErrors::GenericString(format!("Missing argument `{name}`")))
}

fn flip_jobs(id: u32) -> Vec<Job> {
    vec![Job::new(format!("output{id}_flip.bmp"), vec![Box::new(Flop::new())])]
}

fn quantize_jobs(id: u32) -> Vec<Job> {
    QUANTIZE_BITS
        .iter()
        .map(|(suffix, bits)| {
            let ops: Vec<Box<dyn OperationsTrait>> = vec![Box::new(Quantize::new(*bits))];
            Job::new(format!("output{id}_{suffix}.bmp"), ops)
        })
        .collect()
}

fn scale_jobs(id: u32, args: &ArgMatches) -> Vec<Job> {
    let method = if args.get_flag("smooth") {
        ResizeMethod::Bilinear
    } else {
        ResizeMethod::BilinearTruncated
    };
    SCALE_RATES
        .iter()
        .map(|(suffix, rate)| {
            let ops: Vec<Box<dyn OperationsTrait>> = vec![Box::new(Resize::by_rate(*rate, method))];
            Job::new(format!("output{id}_{suffix}.bmp"), ops)
        })
        .collect()
}

/// Build the jobs a command runs on its input
fn create_jobs(
    command: &str, id: u32, args: &ArgMatches, table: &ParameterTable
) -> Result<Vec<Job>, ImageErrors> {
    let jobs = match command {
        "flip" => flip_jobs(id),
        "quantize" => quantize_jobs(id),
        "scale" => scale_jobs(id, args),
        "basic" => {
            let mut jobs = flip_jobs(id);
            jobs.extend(quantize_jobs(id));
            jobs.extend(scale_jobs(id, args));
            jobs
        }
        "brighten" | "sharpen" | "denoise" | "balance" | "enhance" => {
            let degree = get_arg::<u8>(args, "degree")?;
            let output = format!("output{id}_{degree}.bmp");

            let operations: Vec<Box<dyn OperationsTrait>> = match command {
                "brighten" => vec![Box::new(Brighten::new(table.brighten_delta(degree)))],
                "sharpen" => vec![Box::new(Sharpen::new(table.sharpen_kernel(degree)))],
                "denoise" => vec![Box::new(BoxBlur::new(table.denoise_radius(degree)))],
                "balance" => vec![Box::new(GrayWorld::new())],
                _ => match table.enhance_params(id) {
                    Some(params) => vec![
                        Box::new(HsvAdjust::new(params.saturation, params.value)),
                        Box::new(Contrast::new(params.contrast))
                    ],
                    None => {
                        warn!("No enhancement parameters for image {id}, output will equal input");
                        vec![]
                    }
                }
            };
            vec![Job::new(output, operations)]
        }
        "restore" => {
            let params = table.restore_params(
                id,
                args.get_one::<f64>("length").copied(),
                args.get_one::<f64>("angle").copied(),
                args.get_one::<f64>("snr").copied()
            )?;
            info!(
                "Restoring with length {}, angle {}, snr {}",
                params.length, params.angle, params.snr
            );
            vec![Job::new(
                format!("output{id}.bmp"),
                vec![Box::new(WienerRestore::new(params.into()))]
            )]
        }
        _ => {
            return Err(ImageErrors::GenericString(format!(
                "Unknown command `{command}`"
            )))
        }
    };
    Ok(jobs)
}

fn run_job(
    image: Image, operations: Vec<Box<dyn OperationsTrait>>
) -> Result<Image, ImageErrors> {
    let mut pipeline = Pipeline::<BmpFile>::new();

    pipeline.chain_image(image);

    for operation in operations {
        pipeline.chain_operations(operation);
    }
    pipeline.advance_to_end()?;

    pipeline
        .into_images()
        .pop()
        .ok_or(ImageErrors::NoImageForOperations)
}

/// Compare the restored image against an unblurred reference
fn score(reference: &Path, restored: &Image, options: DecoderOptions) -> Result<f64, ImageErrors> {
    let reference = Image::open_with_options(reference, options)?;
    psnr_image(&reference, restored)
}

/// Run the command given on the command line
///
/// Returns the paths of all written files, nothing is written when probing.
pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<Vec<PathBuf>, ImageErrors> {
    info!("Creating workflows from input");

    let Some((command, sub_args)) = args.subcommand() else {
        return Err(ImageErrors::GenericStr("No command given"));
    };
    let id = get_arg::<u32>(sub_args, "id")?;

    let table = match &cmd_opts.config {
        Some(config) => ParameterTable::from_file(config)?,
        None => ParameterTable::default()
    };

    let input = if command == "enhance" {
        cmd_opts.dir.join(format!("output{id}_1.bmp"))
    } else {
        cmd_opts.dir.join(format!("input{id}.bmp"))
    };
    let reference = (command == "restore").then(|| match sub_args.get_one::<PathBuf>("reference") {
        Some(path) => cmd_opts.dir.join(path),
        None => cmd_opts.dir.join(format!("input{id}_ori.bmp"))
    });

    if cmd_opts.probe {
        let mut files = vec![input.as_path()];
        files.extend(reference.as_deref());

        probe_input_files(&files, cmd_opts.decoder_options)?;
        return Ok(vec![]);
    }

    let jobs = create_jobs(command, id, sub_args, &table)?;
    let image = BmpFile::new(input, cmd_opts.decoder_options).into_image()?;

    let mut written = Vec::with_capacity(jobs.len());

    for job in jobs {
        let output = cmd_opts.dir.join(&job.output);
        let result = run_job(image.clone(), job.operations)?;

        result.save(&output)?;
        info!("Wrote {:?}", output);

        if let Some(reference) = &reference {
            if reference.exists() {
                match score(reference, &result, cmd_opts.decoder_options) {
                    Ok(value) => {
                        info!("PSNR against {:?}: {value}", reference);
                        println!("PSNR: {value}");
                    }
                    Err(err) => warn!("Could not compute PSNR against {:?}: {:?}", reference, err)
                }
            } else {
                info!("No reference image at {:?}, skipping PSNR", reference);
            }
        }
        written.push(output);
    }
    Ok(written)
}
