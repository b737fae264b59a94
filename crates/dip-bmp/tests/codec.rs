/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use dip_bmp::{probe_bmp, BmpDecoder, BmpDecoderErrors, BmpEncoder, BmpHeaders};
use dip_core::bytestream::ByteIoError;
use dip_core::options::DecoderOptions;
use nanorand::Rng;

fn random_pixels(len: usize) -> Vec<u8> {
    let mut rand = nanorand::WyRand::new_seed(0xB17_3A9);
    let mut pixels = vec![0_u8; len];
    rand.fill(&mut pixels);
    pixels
}

fn encode(headers: &BmpHeaders, pixels: &[u8]) -> Vec<u8> {
    BmpEncoder::new(headers).encode(pixels).unwrap()
}

#[test]
fn decode_what_was_encoded() {
    for channels in [3, 4] {
        let headers = BmpHeaders::new(13, 7, channels);
        let pixels = random_pixels(headers.pixel_len());
        let bytes = encode(&headers, &pixels);

        assert!(probe_bmp(&bytes));

        let mut decoder = BmpDecoder::new(&bytes);
        let decoded = decoder.decode().unwrap();

        assert_eq!(decoded, pixels);
        assert_eq!(decoder.dimensions(), Some((13, 7)));
        assert_eq!(decoder.channels(), Some(channels));
        assert_eq!(decoder.headers(), Some(&headers));
    }
}

#[test]
fn encoded_bytes_are_headers_then_pixels() {
    let mut headers = BmpHeaders::new(2, 2, 3);
    headers.info.x_pixels_per_meter = 2835;
    headers.file.reserved1 = 7;

    let pixels = random_pixels(12);
    let bytes = encode(&headers, &pixels);

    assert_eq!(bytes.len(), 54 + 12);
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), 66);
    assert_eq!(u16::from_le_bytes(bytes[6..8].try_into().unwrap()), 7);
    assert_eq!(u32::from_le_bytes(bytes[10..14].try_into().unwrap()), 54);
    assert_eq!(u32::from_le_bytes(bytes[14..18].try_into().unwrap()), 40);
    assert_eq!(i32::from_le_bytes(bytes[38..42].try_into().unwrap()), 2835);
    assert_eq!(&bytes[54..], &pixels[..]);
}

#[test]
fn bad_magic_is_rejected() {
    let headers = BmpHeaders::new(4, 4, 3);
    let mut bytes = encode(&headers, &random_pixels(48));
    bytes[0] = b'P';

    assert!(!probe_bmp(&bytes));
    let err = BmpDecoder::new(&bytes).decode().unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::InvalidMagicBytes));
}

#[test]
fn truncated_pixels_are_an_io_error() {
    let headers = BmpHeaders::new(4, 4, 3);
    let bytes = encode(&headers, &random_pixels(48));

    let err = BmpDecoder::new(&bytes[..bytes.len() - 1])
        .decode()
        .unwrap_err();
    assert!(err.is_io_error());

    let err = BmpDecoder::new(&bytes[..20]).decode().unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn oversized_headers_fail_before_allocating() {
    let headers = BmpHeaders::new(1, 1, 4);
    let mut bytes = encode(&headers, &[1, 2, 3, 4]);
    // claim 16384x16384 while only one pixel follows
    bytes[18..22].copy_from_slice(&16384_i32.to_le_bytes());
    bytes[22..26].copy_from_slice(&16384_i32.to_le_bytes());

    let err = BmpDecoder::new(&bytes).decode().unwrap_err();
    assert!(err.is_io_error());
    assert!(matches!(
        err,
        BmpDecoderErrors::IoErrors(ByteIoError::NotEnoughBytes(1_073_741_824, 4))
    ));
}

#[test]
fn unsupported_depth_is_rejected() {
    let mut headers = BmpHeaders::new(4, 4, 3);
    headers.info.bits_per_pixel = 8;
    let bytes = encode(&headers, &random_pixels(16));

    let err = BmpDecoder::new(&bytes).decode().unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::UnsupportedDepth(8)));
}

#[test]
fn zero_dimensions_are_rejected() {
    let headers = BmpHeaders::new(0, 4, 3);
    let bytes = encode(&headers, &[]);

    let err = BmpDecoder::new(&bytes).decode_headers().unwrap_err();
    assert!(matches!(err, BmpDecoderErrors::ZeroDimension("width")));
}

#[test]
fn limits_are_honoured() {
    let headers = BmpHeaders::new(10, 3, 3);
    let bytes = encode(&headers, &random_pixels(90));
    let options = DecoderOptions::default().set_max_width(8);

    let err = BmpDecoder::new_with_options(&bytes, options)
        .decode()
        .unwrap_err();
    assert!(matches!(
        err,
        BmpDecoderErrors::TooLargeDimensions("width", 8, 10)
    ));
}

#[test]
fn odd_pixel_offset_only_fails_in_strict_mode() {
    let mut headers = BmpHeaders::new(2, 2, 3);
    headers.file.pixel_data_offset = 122;
    let pixels = random_pixels(12);
    let bytes = encode(&headers, &pixels);

    assert_eq!(BmpDecoder::new(&bytes).decode().unwrap(), pixels);

    let strict = DecoderOptions::default().set_strict_mode(true);
    assert!(BmpDecoder::new_with_options(&bytes, strict)
        .decode()
        .is_err());
}

#[test]
fn top_down_rows_are_kept_as_stored() {
    let mut headers = BmpHeaders::new(3, 2, 3);
    headers.info.height = -2;
    let pixels = random_pixels(18);
    let bytes = encode(&headers, &pixels);

    let mut decoder = BmpDecoder::new(&bytes);
    assert_eq!(decoder.decode().unwrap(), pixels);

    let decoded_headers = decoder.headers().unwrap();
    assert!(!decoded_headers.is_bottom_up());
    assert_eq!(decoded_headers.height(), 2);
}

#[test]
fn resized_headers_are_written_back() {
    let mut headers = BmpHeaders::new(6, 4, 3);
    headers.set_dimensions(8, 2).unwrap();

    let pixels = random_pixels(8 * 2 * 3);
    let bytes = encode(&headers, &pixels);
    let mut decoder = BmpDecoder::new(&bytes);

    assert_eq!(decoder.decode().unwrap(), pixels);
    let info = decoder.headers().unwrap().info;
    assert_eq!((info.width, info.height), (8, 2));
    assert_eq!(info.image_size, 48);
}

#[test]
fn encoder_checks_pixel_length() {
    let headers = BmpHeaders::new(2, 2, 3);
    assert!(BmpEncoder::new(&headers).encode(&[0; 11]).is_err());
}
