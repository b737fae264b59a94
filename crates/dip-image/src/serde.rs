/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::image::Image;

impl Serialize for Image {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 6;
        let mut state = serializer.serialize_struct("Metadata", STRUCT_FIELDS)?;
        let (width, height) = self.dimensions();

        state.serialize_field("width", &width)?;
        state.serialize_field("height", &height)?;
        state.serialize_field("channels", &self.channels())?;
        state.serialize_field("bottom_up", &self.is_bottom_up())?;
        state.serialize_field("file_header", &self.headers().file)?;
        state.serialize_field("info_header", &self.headers().info)?;

        state.end()
    }
}
