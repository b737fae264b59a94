/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Properties every operation must keep when run through the image pipeline
use dip_core::options::DecoderOptions;
use dip_image::image::Image;
use dip_image::pipelines::Pipeline;
use dip_image::traits::OperationsTrait;
use dip_imageprocs::box_blur::BoxBlur;
use dip_imageprocs::brighten::Brighten;
use dip_imageprocs::contrast::Contrast;
use dip_imageprocs::flop::Flop;
use dip_imageprocs::gray_world::GrayWorld;
use dip_imageprocs::hsv_adjust::HsvAdjust;
use dip_imageprocs::psnr::{psnr, psnr_image};
use dip_imageprocs::quantize::Quantize;
use dip_imageprocs::resize::{Resize, ResizeMethod};
use dip_imageprocs::restoration::{
    fft2d, fftshift, ifft2d, restore, synthesize_psf, wiener_filter, FftPlans, RestorationParams,
    WienerRestore
};
use dip_imageprocs::sharpen::{Kernel, Sharpen};
use nanorand::Rng;
use ndarray::Array2;

fn random_image(width: usize, height: usize, channels: usize, seed: u64) -> Image {
    let mut pixels = vec![0_u8; width * height * channels];
    nanorand::WyRand::new_seed(seed).fill(&mut pixels);
    Image::from_u8(&pixels, width, height, channels).unwrap()
}

#[test]
fn flop_twice_is_identity() {
    for (width, channels) in [(7, 3), (8, 4), (1, 3)] {
        let original = random_image(width, 5, channels, 1);
        let mut image = original.clone();

        Flop::new().execute(&mut image).unwrap();
        Flop::new().execute(&mut image).unwrap();
        assert_eq!(image, original);
    }
}

#[test]
fn quantize_produces_multiples() {
    for keep in 1..=8_u8 {
        let mut image = random_image(16, 16, 3, u64::from(keep));
        Quantize::new(keep).execute(&mut image).unwrap();

        let step = 1_u16 << (8 - keep);
        assert!(image.pixels().iter().all(|x| u16::from(*x) % step == 0));
    }
    let original = random_image(16, 16, 4, 9);
    let mut image = original.clone();
    Quantize::new(8).execute(&mut image).unwrap();
    assert_eq!(image, original);

    assert!(Quantize::new(9).execute(&mut image).is_err());
}

#[test]
fn box_blur_keeps_border() {
    let radius = 2;
    let (width, height, channels) = (13, 9, 3);
    let original = random_image(width, height, channels, 4);
    let mut image = original.clone();

    BoxBlur::new(radius).execute(&mut image).unwrap();

    for y in 0..height {
        for x in 0..width {
            let border = x < radius || y < radius || x >= width - radius || y >= height - radius;
            if border {
                let i = (y * width + x) * channels;
                assert_eq!(image.pixels()[i..i + channels], original.pixels()[i..i + channels]);
            }
        }
    }
}

#[test]
fn resize_by_rate_keeps_width_multiple_of_four() {
    for (width, height) in [(512, 512), (37, 21), (100, 3), (641, 480)] {
        for rate in [1.5_f32, 1.0 / 1.5] {
            for method in [ResizeMethod::BilinearTruncated, ResizeMethod::Bilinear] {
                let mut image = random_image(width, height, 3, 5);
                Resize::by_rate(rate, method).execute(&mut image).unwrap();

                let (w, h) = image.dimensions();
                assert_eq!(w % 4, 0);
                assert_eq!(image.pixels().len(), w * h * 3);
            }
        }
    }
}

#[test]
fn resized_image_survives_reencoding() {
    let mut image = random_image(37, 21, 3, 6);
    Resize::new(20, 11, ResizeMethod::default())
        .execute(&mut image)
        .unwrap();

    let bytes = image.write_to_vec().unwrap();
    let decoded = Image::read(&bytes, DecoderOptions::default()).unwrap();

    assert_eq!(decoded.dimensions(), (20, 11));
    assert_eq!(decoded.pixels().len(), 20 * 11 * 3);
    assert_eq!(decoded, image);
}

#[test]
fn gray_world_on_uniform_gray_is_identity() {
    let original = Image::fill(128, 9, 7, 3);
    let mut image = original.clone();
    GrayWorld::new().execute(&mut image).unwrap();
    assert_eq!(image, original);
}

#[test]
fn gray_pixels_only_change_in_value() {
    let mut image = Image::fill(100, 4, 4, 3);
    HsvAdjust::new(3.0, 1.0).execute(&mut image).unwrap();
    assert!(image.pixels().iter().all(|x| *x == 100));

    HsvAdjust::new(3.0, 1.5).execute(&mut image).unwrap();
    assert!(image.pixels().iter().all(|x| *x == 150));
}

#[test]
fn uniform_image_is_fixed_point_of_sharpen() {
    let original = Image::fill(90, 6, 6, 3);

    for kernel in [Kernel::laplacian(), Kernel::strong_laplacian()] {
        let mut image = original.clone();
        Sharpen::new(kernel).execute(&mut image).unwrap();
        assert_eq!(image, original);
    }
}

#[test]
fn enhance_chain_runs_in_order() {
    let image = random_image(24, 16, 3, 7);

    let mut pipeline = Pipeline::<Image>::new();
    pipeline.chain_image(image.clone());
    pipeline.chain_operations(Box::new(HsvAdjust::new(1.3, 1.4)));
    pipeline.chain_operations(Box::new(Contrast::new(1.2)));
    pipeline.advance_to_end().unwrap();

    let mut expected = image;
    HsvAdjust::new(1.3, 1.4).execute(&mut expected).unwrap();
    Contrast::new(1.2).execute(&mut expected).unwrap();

    assert_eq!(pipeline.images()[0], expected);
}

#[test]
fn brighten_saturates() {
    let mut image = Image::fill(250, 3, 3, 4);
    Brighten::new(20).execute(&mut image).unwrap();

    for pix in image.pixels().chunks_exact(4) {
        assert_eq!(pix, &[255, 255, 255, 250]);
    }
}

#[test]
fn restoration_spans_full_range_and_scores() {
    let reference = random_image(32, 24, 3, 8);
    let mut image = reference.clone();

    WienerRestore::new(RestorationParams::new(5.0, 30.0, 50.0))
        .execute(&mut image)
        .unwrap();

    for c in 0..3 {
        let channel = image.pixels().iter().skip(c).step_by(3);
        assert_eq!(channel.clone().copied().min(), Some(0));
        assert_eq!(channel.copied().max(), Some(255));
    }
    let score = psnr_image(&reference, &image).unwrap();
    assert!(score.is_finite() && score > 0.0);
    assert_eq!(psnr_image(&image, &image).unwrap(), f64::INFINITY);
}

#[test]
fn restoration_of_flat_image_is_black() {
    let mut image = Image::fill(120, 8, 8, 3);
    WienerRestore::new(RestorationParams::new(5.0, 0.0, 30.0))
        .execute(&mut image)
        .unwrap();
    assert!(image.pixels().iter().all(|x| *x == 0));
}

#[test]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn restoration_undoes_a_known_motion_blur() {
    const SIZE: usize = 64;

    let sharp = Array2::from_shape_fn((SIZE, SIZE), |(r, c)| {
        if (r / 8 + c / 8) % 2 == 1 {
            255.0
        } else {
            0.0
        }
    });
    let plans = FftPlans::new(SIZE, SIZE);
    let psf = synthesize_psf(SIZE, SIZE, 9.0, 30.0);

    // circular convolution with the streak, the inverse transform is unscaled
    let mut spectrum = fft2d(sharp.view(), &plans);
    let streak = fft2d(fftshift(&psf).view(), &plans);
    spectrum.zip_mut_with(&streak, |s, h| *s *= *h);
    let scale = (SIZE * SIZE) as f64;
    let blurred = ifft2d(&spectrum, &plans).mapv(|v| (v.re / scale).round().clamp(0.0, 255.0));

    let restored = restore(blurred.view(), &wiener_filter(&psf, 1.0 / 100.0), &plans);

    let reference: Vec<u8> = sharp.iter().map(|v| *v as u8).collect();
    let blurred: Vec<u8> = blurred.iter().map(|v| *v as u8).collect();
    let restored: Vec<u8> = restored.iter().copied().collect();

    let before = psnr(&reference, &blurred).unwrap();
    let after = psnr(&reference, &restored).unwrap();
    assert!(after > before + 5.0, "{before} dB blurred, {after} dB restored");
}
