/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use dip_core::options::DecoderOptions;
use dip_image::errors::ImageErrors;
use dip_image::image::Image;
use dip_image::pipelines::Pipeline;
use dip_image::traits::OperationsTrait;
use nanorand::Rng;

struct AddOne;

impl OperationsTrait for AddOne {
    fn name(&self) -> &'static str {
        "add one"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        image
            .pixels_mut()
            .iter_mut()
            .for_each(|x| *x = x.saturating_add(1));
        Ok(())
    }
}

fn random_image(width: usize, height: usize, channels: usize) -> Image {
    let mut rand = nanorand::WyRand::new_seed(42);
    let mut pixels = vec![0_u8; width * height * channels];
    rand.fill(&mut pixels);
    Image::from_u8(&pixels, width, height, channels).unwrap()
}

#[test]
fn read_what_was_written() {
    let image = random_image(17, 5, 3);
    let bytes = image.write_to_vec().unwrap();

    let decoded = Image::read(&bytes, DecoderOptions::default()).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn save_and_open_from_disk() {
    let image = random_image(9, 4, 4);
    let path = std::env::temp_dir().join(format!("dip-image-save-{}.bmp", std::process::id()));

    image.save(&path).unwrap();
    let opened = Image::open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(opened, image);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Image::open("/this/path/does/not/exist.bmp").unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn mismatched_pixels_are_rejected() {
    assert!(Image::from_u8(&[0; 10], 2, 2, 3).is_err());

    let mut image = Image::fill(0, 2, 2, 3);
    assert!(image.set_pixels(vec![0; 11], 2, 2).is_err());
}

#[test]
fn set_pixels_updates_headers() {
    let mut image = Image::fill(9, 4, 4, 3);
    image.set_pixels(vec![1; 8 * 2 * 3], 8, 2).unwrap();

    assert_eq!(image.dimensions(), (8, 2));
    assert_eq!(image.headers().info.image_size, 48);
    assert!(image.is_bottom_up());
}

#[test]
fn operations_reject_unsupported_channels() {
    let mut image = Image::fill(0, 2, 2, 1);
    let err = AddOne.execute(&mut image).unwrap_err();

    assert!(matches!(err, ImageErrors::UnsupportedChannels("add one", 1)));
}

#[test]
fn pipeline_runs_every_operation_in_order() {
    let mut pipeline = Pipeline::<Image>::new();
    pipeline
        .chain_image(Image::fill(10, 3, 3, 3))
        .chain_operations(Box::new(AddOne))
        .chain_operations(Box::new(AddOne));

    pipeline.advance_to_end().unwrap();

    let images = pipeline.into_images();
    assert!(images[0].pixels().iter().all(|x| *x == 12));
}

#[test]
fn pipeline_decodes_its_source() {
    let image = random_image(3, 3, 3);
    let bytes = image.write_to_vec().unwrap();

    let mut pipeline = Pipeline::new();
    pipeline.chain_decoder(dip_bmp::BmpDecoder::new(&bytes));
    pipeline.advance_to_end().unwrap();

    assert_eq!(pipeline.images(), &[image]);
}

#[test]
fn empty_pipeline_is_an_error() {
    let mut pipeline = Pipeline::<Image>::new();
    assert!(pipeline.advance_to_end().is_err());
}

#[test]
fn metadata_serializes_to_json() {
    let image = Image::fill(0, 6, 2, 3);
    let json = serde_json::to_value(&image).unwrap();

    assert_eq!(json["width"], 6);
    assert_eq!(json["height"], 2);
    assert_eq!(json["channels"], 3);
    assert_eq!(json["info_header"]["bits_per_pixel"], 24);
}
