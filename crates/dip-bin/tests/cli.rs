/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use dip_bin::{create_cmd_args, probe_file, run};
use dip_core::options::DecoderOptions;
use dip_image::image::Image;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dip-bin-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn dir_arg(dir: &Path) -> String {
    dir.to_string_lossy().to_string()
}

fn test_image(width: usize, height: usize) -> Image {
    Image::from_fn(width, height, 3, |x, y, pix| {
        pix[0] = (x * 7 % 256) as u8;
        pix[1] = (y * 11 % 256) as u8;
        pix[2] = ((x * y) % 256) as u8;
    })
}

fn run_args(args: &[&str]) -> Result<Vec<PathBuf>, dip_image::errors::ImageErrors> {
    let matches = create_cmd_args().try_get_matches_from(args).unwrap();
    run(&matches)
}

#[test]
fn degree_must_be_one_or_two() {
    let err = create_cmd_args()
        .try_get_matches_from(["dip", "brighten", "1", "3"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);

    assert!(create_cmd_args()
        .try_get_matches_from(["dip", "brighten", "1", "2"])
        .is_ok());
}

#[test]
fn usage_errors() {
    let cmd = create_cmd_args;

    assert!(cmd().try_get_matches_from(["dip", "brighten", "1"]).is_err());
    assert!(cmd().try_get_matches_from(["dip", "flip", "one"]).is_err());
    assert!(cmd().try_get_matches_from(["dip", "resize", "1"]).is_err());
    assert!(cmd()
        .try_get_matches_from(["dip", "--debug", "--trace", "flip", "1"])
        .is_err());
    assert!(cmd()
        .try_get_matches_from(["dip", "restore", "1", "--angle", "-30"])
        .is_ok());
}

#[test]
fn flip_writes_mirrored_image() {
    let dir = scratch_dir("flip");
    let image = test_image(5, 3);
    image.save(dir.join("input7.bmp")).unwrap();

    let written = run_args(&["dip", "-C", &dir_arg(&dir), "flip", "7"]).unwrap();
    assert_eq!(written, vec![dir.join("output7_flip.bmp")]);

    let flipped = Image::open(dir.join("output7_flip.bmp")).unwrap();
    assert_eq!(flipped.dimensions(), (5, 3));
    // first pixel of each row is the last pixel of the input row
    for y in 0..3 {
        let out = &flipped.pixels()[y * 15..y * 15 + 3];
        let inp = &image.pixels()[y * 15 + 12..y * 15 + 15];
        assert_eq!(out, inp);
    }
}

#[test]
fn basic_writes_every_output() {
    let dir = scratch_dir("basic");
    test_image(30, 20).save(dir.join("input1.bmp")).unwrap();

    let written = run_args(&["dip", "--dir", &dir_arg(&dir), "basic", "1"]).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "output1_flip.bmp",
            "output1_1.bmp",
            "output1_2.bmp",
            "output1_3.bmp",
            "output1_down.bmp",
            "output1_up.bmp"
        ]
    );

    let two_bits = Image::open(dir.join("output1_3.bmp")).unwrap();
    assert!(two_bits.pixels().iter().all(|x| x % 64 == 0));

    let down = Image::open(dir.join("output1_down.bmp")).unwrap();
    assert_eq!(down.dimensions(), (20, 13));

    let up = Image::open(dir.join("output1_up.bmp")).unwrap();
    assert_eq!(up.dimensions().0 % 4, 0);
}

#[test]
fn parameter_file_replaces_defaults() {
    let dir = scratch_dir("config");
    Image::fill(100, 4, 4, 3)
        .save(dir.join("input2.bmp"))
        .unwrap();
    std::fs::write(dir.join("params.json"), r#"{ "brighten": [5, 7] }"#).unwrap();

    let config = dir_arg(&dir.join("params.json"));
    run_args(&["dip", "-C", &dir_arg(&dir), "--config", &config, "brighten", "2", "2"]).unwrap();

    let out = Image::open(dir.join("output2_2.bmp")).unwrap();
    assert!(out.pixels().iter().all(|x| *x == 107));

    run_args(&["dip", "-C", &dir_arg(&dir), "brighten", "2", "1"]).unwrap();
    let out = Image::open(dir.join("output2_1.bmp")).unwrap();
    assert!(out.pixels().iter().all(|x| *x == 120));
}

#[test]
fn extreme_parameter_values_do_not_abort() {
    let dir = scratch_dir("extreme");
    let image = test_image(6, 5);
    image.save(dir.join("input3.bmp")).unwrap();
    Image::fill(255, 5, 5, 3)
        .save(dir.join("input4.bmp"))
        .unwrap();
    std::fs::write(
        dir.join("params.json"),
        r#"{
            "denoise": [18446744073709551615, 9223372036854775807],
            "sharpen": [
                [2147483647, 2147483647, 2147483647, 0, 100000000, 0, 0, 0, 0],
                [0, 0, 0, 0, 1, 0, 0, 0, 0]
            ]
        }"#
    )
    .unwrap();
    let config = dir_arg(&dir.join("params.json"));

    for degree in ["1", "2"] {
        run_args(&["dip", "-C", &dir_arg(&dir), "--config", &config, "denoise", "3", degree])
            .unwrap();
        let out = Image::open(dir.join(format!("output3_{degree}.bmp"))).unwrap();
        assert_eq!(out.pixels(), image.pixels());
    }

    run_args(&["dip", "-C", &dir_arg(&dir), "--config", &config, "sharpen", "4", "1"]).unwrap();
    let out = Image::open(dir.join("output4_1.bmp")).unwrap();
    assert!(out.pixels().iter().all(|x| *x == 255));
}

#[test]
fn enhance_reads_first_output_and_copies_unknown_ids() {
    let dir = scratch_dir("enhance");
    let image = test_image(6, 4);
    image.save(dir.join("output9_1.bmp")).unwrap();

    run_args(&["dip", "-C", &dir_arg(&dir), "enhance", "9", "2"]).unwrap();

    let out = Image::open(dir.join("output9_2.bmp")).unwrap();
    assert_eq!(out, image);
}

#[test]
fn restore_needs_parameters_for_unknown_images() {
    let dir = scratch_dir("restore");
    test_image(16, 12).save(dir.join("input5.bmp")).unwrap();
    test_image(16, 12).save(dir.join("input5_ori.bmp")).unwrap();

    assert!(run_args(&["dip", "-C", &dir_arg(&dir), "restore", "5"]).is_err());

    let written = run_args(&[
        "dip",
        "-C",
        &dir_arg(&dir),
        "restore",
        "5",
        "--length",
        "5",
        "--angle",
        "30",
        "--snr",
        "40"
    ])
    .unwrap();
    assert_eq!(written, vec![dir.join("output5.bmp")]);

    let out = Image::open(dir.join("output5.bmp")).unwrap();
    assert_eq!(out.dimensions(), (16, 12));
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = scratch_dir("missing");
    let err = run_args(&["dip", "-C", &dir_arg(&dir), "denoise", "42", "1"]).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn probe_writes_nothing() {
    let dir = scratch_dir("probe");
    test_image(8, 2).save(dir.join("input3.bmp")).unwrap();

    let written = run_args(&["dip", "-C", &dir_arg(&dir), "--probe", "balance", "3", "1"]).unwrap();
    assert!(written.is_empty());
    assert!(!dir.join("output3_1.bmp").exists());

    let json = probe_file(&dir.join("input3.bmp"), DecoderOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["width"], 8);
    assert_eq!(value["metadata"]["height"], 2);
    assert_eq!(value["size"], 54 + 8 * 2 * 3);
}
