/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Linear motion blur point spread function
use ndarray::Array2;

/// Create a normalized motion blur kernel of `rows x cols`
///
/// A one pixel wide streak of `length` pixels is drawn through
/// `(cols/2, rows/2)` at `angle` degrees counter-clockwise from the
/// positive x axis (rows grow downwards), then the matrix is divided by its
/// sum so that it adds up to 1.
///
/// The streak reaches `round(length/2)` pixels to each side of the center,
/// halves are rounded to even. Pixels outside the matrix are dropped.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn synthesize_psf(rows: usize, cols: usize, length: f64, angle: f64) -> Array2<f64> {
    let mut h = Array2::<f64>::zeros((rows, cols));

    if rows == 0 || cols == 0 {
        return h;
    }
    let (cx, cy) = ((cols / 2) as f64, (rows / 2) as f64);
    let half = (length.max(0.0) / 2.0).round_ties_even();
    let (sin, cos) = angle.to_radians().sin_cos();

    // end points, y is flipped since rows grow downwards
    let (x0, y0) = ((cx - half * cos).round(), (cy + half * sin).round());
    let (x1, y1) = ((cx + half * cos).round(), (cy - half * sin).round());

    let steps = (x1 - x0).abs().max((y1 - y0).abs()) as usize;

    for step in 0..=steps {
        let t = if steps == 0 {
            0.0
        } else {
            step as f64 / steps as f64
        };
        let x = (x0 + (x1 - x0) * t).round();
        let y = (y0 + (y1 - y0) * t).round();

        if x >= 0.0 && y >= 0.0 && (x as usize) < cols && (y as usize) < rows {
            h[[y as usize, x as usize]] = 255.0;
        }
    }

    let sum = h.sum();
    if sum > 0.0 {
        h /= sum;
    }
    h
}

#[cfg(test)]
mod tests {
    use crate::restoration::psf::synthesize_psf;

    #[test]
    fn psf_sums_to_one() {
        for (length, angle) in [(25.0, 42.0), (30.0, 42.0), (1.0, 0.0), (9.0, 90.0)] {
            let psf = synthesize_psf(64, 48, length, angle);
            assert!((psf.sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn horizontal_streak_lies_on_the_center_row() {
        let psf = synthesize_psf(9, 11, 6.0, 0.0);
        // half length 3 around column 5
        for col in 0..11 {
            let expected = if (2..=8).contains(&col) { 1.0 / 7.0 } else { 0.0 };
            assert!((psf[[4, col]] - expected).abs() < 1e-12);
        }
        assert!((psf.row(4).sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn positive_angles_rise_to_the_right() {
        let psf = synthesize_psf(9, 9, 4.0, 45.0);
        // center (4,4), reaching 2*cos(45) pixels along each axis
        assert!(psf[[3, 5]] > 0.0);
        assert!(psf[[4, 4]] > 0.0);
        assert!(psf[[5, 3]] > 0.0);
        assert_eq!(psf[[3, 3]], 0.0);
        assert_eq!(psf[[5, 5]], 0.0);
    }

    #[test]
    fn zero_length_is_a_single_point() {
        let psf = synthesize_psf(4, 4, 0.0, 30.0);
        assert_eq!(psf[[2, 2]], 1.0);
    }
}
