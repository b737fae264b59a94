/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! 2D discrete Fourier transforms as row then column passes of planned 1D FFTs
use std::sync::Arc;

use ndarray::{Array2, ArrayView2};
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Forward and inverse plans for one matrix size
pub struct FftPlans {
    rows:        usize,
    cols:        usize,
    row_forward: Arc<dyn Fft<f64>>,
    col_forward: Arc<dyn Fft<f64>>,
    row_inverse: Arc<dyn Fft<f64>>,
    col_inverse: Arc<dyn Fft<f64>>
}

impl FftPlans {
    /// Plan transforms for `rows x cols` matrices
    pub fn new(rows: usize, cols: usize) -> FftPlans {
        let mut planner = FftPlanner::new();

        FftPlans {
            rows,
            cols,
            row_forward: planner.plan_fft_forward(cols),
            col_forward: planner.plan_fft_forward(rows),
            row_inverse: planner.plan_fft_inverse(cols),
            col_inverse: planner.plan_fft_inverse(rows)
        }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

/// Forward 2D DFT of a real matrix, unscaled
///
/// # Panics
/// If the plans were made for another size
pub fn fft2d(input: ArrayView2<f64>, plans: &FftPlans) -> Array2<Complex<f64>> {
    assert_eq!(input.dim(), plans.dimensions(), "FFT plan size mismatch");

    let mut output = input.mapv(|v| Complex::new(v, 0.0));
    transform(&mut output, &plans.row_forward, &plans.col_forward);
    output
}

/// Inverse 2D DFT, unscaled
///
/// # Panics
/// If the plans were made for another size
pub fn ifft2d(input: &Array2<Complex<f64>>, plans: &FftPlans) -> Array2<Complex<f64>> {
    assert_eq!(input.dim(), plans.dimensions(), "FFT plan size mismatch");

    let mut output = input.clone();
    transform(&mut output, &plans.row_inverse, &plans.col_inverse);
    output
}

fn transform(
    data: &mut Array2<Complex<f64>>, row_plan: &Arc<dyn Fft<f64>>, col_plan: &Arc<dyn Fft<f64>>
) {
    let (rows, cols) = data.dim();

    if rows == 0 || cols == 0 {
        return;
    }
    // 1. Transform rows
    let mut row_vec = vec![Complex::new(0.0, 0.0); cols];

    for mut row in data.rows_mut() {
        for (dst, src) in row_vec.iter_mut().zip(row.iter()) {
            *dst = *src;
        }
        row_plan.process(&mut row_vec);
        for (dst, src) in row.iter_mut().zip(&row_vec) {
            *dst = *src;
        }
    }

    // 2. Transform columns
    let mut col_vec = vec![Complex::new(0.0, 0.0); rows];

    for mut col in data.columns_mut() {
        for (dst, src) in col_vec.iter_mut().zip(col.iter()) {
            *dst = *src;
        }
        col_plan.process(&mut col_vec);
        for (dst, src) in col.iter_mut().zip(&col_vec) {
            *dst = *src;
        }
    }
}
