/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Source coordinate and weight of the next sample for output position `pos`
#[inline(always)]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn source_position<const TRUNCATE: bool>(
    pos: usize, in_len: usize, out_len: usize
) -> (usize, f32) {
    if out_len <= 1 {
        return (0, 0.0);
    }
    if TRUNCATE {
        (pos * (in_len - 1) / (out_len - 1), 0.0)
    } else {
        let source = pos as f32 * (in_len - 1) as f32 / (out_len - 1) as f32;
        let floor = source.floor();

        (floor as usize, source - floor)
    }
}

/// Bilinear interpolation of an interleaved image
///
/// When `TRUNCATE` is true, source coordinates use integer division and
/// both weights are zero.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn bilinear_impl<const TRUNCATE: bool>(
    in_image: &[u8], out_image: &mut [u8], channels: usize, in_width: usize, in_height: usize,
    out_width: usize, out_height: usize
) {
    let in_stride = in_width * channels;

    for (y, out_row) in out_image
        .chunks_exact_mut(out_width * channels)
        .enumerate()
        .take(out_height)
    {
        let (y0, b) = source_position::<TRUNCATE>(y, in_height, out_height);
        // clamp to the last row, the sample below the bottom row does not exist
        let y0 = y0.min(in_height - 1);
        let y1 = (y0 + 1).min(in_height - 1);

        let row0 = &in_image[y0 * in_stride..(y0 + 1) * in_stride];
        let row1 = &in_image[y1 * in_stride..(y1 + 1) * in_stride];

        for (x, out_pix) in out_row.chunks_exact_mut(channels).enumerate() {
            let (x0, a) = source_position::<TRUNCATE>(x, in_width, out_width);
            let x0 = x0.min(in_width - 1);
            let x1 = (x0 + 1).min(in_width - 1);

            for (c, out) in out_pix.iter_mut().enumerate() {
                let p00 = f32::from(row0[x0 * channels + c]);
                let p10 = f32::from(row0[x1 * channels + c]);
                let p01 = f32::from(row1[x0 * channels + c]);
                let p11 = f32::from(row1[x1 * channels + c]);

                let interpolated_pixel = p00 * (1.0 - a) * (1.0 - b)
                    + p01 * (1.0 - a) * b
                    + p10 * a * (1.0 - b)
                    + p11 * a * b;

                *out = interpolated_pixel as u8;
            }
        }
    }
}
