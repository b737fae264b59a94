/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Degree and image number dependent parameters
//!
//! Commands that take a degree pick the first entry of each pair for
//! degree 1 and the second for degree 2. Enhancement and restoration
//! parameters are chosen per image number.
//!
//! The built-in tables can be replaced by a JSON file, any field left
//! out keeps its default
//! ```json
//! {
//!     "brighten": [10, 30],
//!     "restore": { "3": { "length": 20, "angle": 10, "snr": 40 } }
//! }
//! ```
use std::collections::BTreeMap;
use std::path::Path;

use dip_image::errors::ImageErrors;
use dip_imageprocs::restoration::RestorationParams;
use dip_imageprocs::sharpen::Kernel;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnhanceParams {
    pub saturation: f64,
    pub value:      f64,
    pub contrast:   f64
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestoreParams {
    pub length: f64,
    pub angle:  f64,
    pub snr:    f64
}

impl From<RestoreParams> for RestorationParams {
    fn from(value: RestoreParams) -> Self {
        RestorationParams::new(value.length, value.angle, value.snr)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterTable {
    /// Brightness offsets
    pub brighten: [i16; 2],
    /// Box blur radii
    pub denoise:  [usize; 2],
    /// 3x3 sharpening kernels in row major order
    pub sharpen:  [[i32; 9]; 2],
    pub enhance:  BTreeMap<u32, EnhanceParams>,
    pub restore:  BTreeMap<u32, RestoreParams>
}

impl Default for ParameterTable {
    fn default() -> Self {
        let enhance = [
            (1, (1.3, 1.4, 1.2)),
            (2, (0.7, 1.5, 1.2)),
            (3, (1.4, 1.6, 1.1)),
            (4, (1.4, 0.8, 1.4))
        ]
        .into_iter()
        .map(|(id, (saturation, value, contrast))| {
            let params = EnhanceParams {
                saturation,
                value,
                contrast
            };
            (id, params)
        })
        .collect();

        let restore = [(1, (25.0, 42.0, 30.0)), (2, (30.0, 42.0, 80.0))]
            .into_iter()
            .map(|(id, (length, angle, snr))| (id, RestoreParams { length, angle, snr }))
            .collect();

        ParameterTable {
            brighten: [20, 40],
            denoise:  [3, 5],
            sharpen:  [Kernel::LAPLACIAN, Kernel::STRONG_LAPLACIAN],
            enhance,
            restore
        }
    }
}

const fn degree_index(degree: u8) -> usize {
    if degree >= 2 {
        1
    } else {
        0
    }
}

impl ParameterTable {
    /// Read a table from a JSON file
    ///
    /// # Errors
    /// If the file cannot be read or is not a valid table
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ParameterTable, ImageErrors> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let table = ParameterTable::from_json(&contents)?;

        debug!("Loaded parameters from {:?}", path.as_ref());
        Ok(table)
    }

    /// Parse a table from a JSON string
    ///
    /// # Errors
    /// If the string is not a valid table
    pub fn from_json(contents: &str) -> Result<ParameterTable, ImageErrors> {
        serde_json::from_str(contents)
            .map_err(|err| ImageErrors::GenericString(format!("Invalid parameter file: {err}")))
    }

    pub const fn brighten_delta(&self, degree: u8) -> i16 {
        self.brighten[degree_index(degree)]
    }

    pub const fn denoise_radius(&self, degree: u8) -> usize {
        self.denoise[degree_index(degree)]
    }

    pub fn sharpen_kernel(&self, degree: u8) -> Kernel {
        Kernel::from_3x3(self.sharpen[degree_index(degree)])
    }

    pub fn enhance_params(&self, id: u32) -> Option<EnhanceParams> {
        self.enhance.get(&id).copied()
    }

    /// Restoration parameters of an image
    ///
    /// Any value given in `overrides` replaces the table entry. For an image
    /// without an entry all three overrides must be present.
    ///
    /// # Errors
    /// If the image has no entry and an override is missing
    pub fn restore_params(
        &self, id: u32, length: Option<f64>, angle: Option<f64>, snr: Option<f64>
    ) -> Result<RestoreParams, ImageErrors> {
        if let (Some(length), Some(angle), Some(snr)) = (length, angle, snr) {
            return Ok(RestoreParams { length, angle, snr });
        }
        let Some(params) = self.restore.get(&id) else {
            return Err(ImageErrors::GenericString(format!(
                "No restoration parameters for image {id}, pass --length, --angle and --snr"
            )));
        };
        Ok(RestoreParams {
            length: length.unwrap_or(params.length),
            angle:  angle.unwrap_or(params.angle),
            snr:    snr.unwrap_or(params.snr)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::cmd_parsers::parameters::{EnhanceParams, ParameterTable};

    #[test]
    fn defaults_follow_degree() {
        let table = ParameterTable::default();

        assert_eq!(table.brighten_delta(1), 20);
        assert_eq!(table.brighten_delta(2), 40);
        assert_eq!(table.denoise_radius(1), 3);
        assert_eq!(table.denoise_radius(2), 5);
        assert_eq!(table.sharpen_kernel(1).weights()[4], 5);
        assert_eq!(table.sharpen_kernel(2).weights()[4], 9);
    }

    #[test]
    fn enhance_params_per_image() {
        let table = ParameterTable::default();
        assert_eq!(table.enhance_params(9), None);
        assert_eq!(
            table.enhance_params(2),
            Some(EnhanceParams {
                saturation: 0.7,
                value:      1.5,
                contrast:   1.2
            })
        );
    }

    #[test]
    fn restore_needs_all_overrides_for_unknown_ids() {
        let table = ParameterTable::default();

        assert!(table.restore_params(3, Some(10.0), Some(0.0), None).is_err());
        let params = table
            .restore_params(3, Some(10.0), Some(0.0), Some(5.0))
            .unwrap();
        assert_eq!(params.length, 10.0);

        let params = table.restore_params(2, None, Some(10.0), None).unwrap();
        assert_eq!((params.length, params.angle, params.snr), (30.0, 10.0, 80.0));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "brighten": [10, 30], "restore": { "3": { "length": 20, "angle": 10, "snr": 40 } } }"#;
        let table = ParameterTable::from_json(json).unwrap();

        assert_eq!(table.brighten_delta(2), 30);
        assert_eq!(table.denoise_radius(2), 5);
        assert_eq!(table.restore.len(), 1);
        assert_eq!(table.restore[&3].snr, 40.0);

        assert!(ParameterTable::from_json("{ \"brighten\": 3 }").is_err());
    }
}
