/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use dip_core::bytestream::{ByteIoError, ByteReader, ByteWriter};

/// `BM` read as a little endian u16
pub const BMP_MAGIC: u16 = 0x4D42;
/// Size of the packed file header
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the packed `BITMAPINFOHEADER`
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the first pixel byte
pub const HEADERS_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// The 14 byte file header
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmpFileHeader {
    pub file_type:         u16,
    pub size:              u32,
    pub reserved1:         u16,
    pub reserved2:         u16,
    pub pixel_data_offset: u32
}

/// The 40 byte information header
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmpInfoHeader {
    pub header_size:        u32,
    pub width:              i32,
    /// Positive for bottom-up row order, negative for top-down
    pub height:             i32,
    pub planes:             u16,
    pub bits_per_pixel:     u16,
    pub compression:        u32,
    pub image_size:         u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used:        u32,
    pub colors_important:   u32
}

/// Both headers of a bitmap file.
///
/// A decoded image keeps these around as the template it is written back with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BmpHeaders {
    pub file: BmpFileHeader,
    pub info: BmpInfoHeader
}

impl BmpHeaders {
    /// Create headers for a bottom-up image of the given dimensions
    /// with `channels` bytes per pixel
    ///
    /// Dimensions are expected to fit the 32 bit header fields,
    /// larger values wrap.
    pub fn new(width: usize, height: usize, channels: usize) -> BmpHeaders {
        let image_size = width * height * channels;

        BmpHeaders {
            file: BmpFileHeader {
                file_type:         BMP_MAGIC,
                size:              (image_size + HEADERS_SIZE) as u32,
                reserved1:         0,
                reserved2:         0,
                pixel_data_offset: HEADERS_SIZE as u32
            },
            info: BmpInfoHeader {
                header_size:        INFO_HEADER_SIZE as u32,
                width:              width as i32,
                height:             height as i32,
                planes:             1,
                bits_per_pixel:     (channels * 8) as u16,
                compression:        0,
                image_size:         image_size as u32,
                x_pixels_per_meter: 0,
                y_pixels_per_meter: 0,
                colors_used:        0,
                colors_important:   0
            }
        }
    }

    /// Image width in pixels
    pub const fn width(&self) -> usize {
        self.info.width.unsigned_abs() as usize
    }

    /// Image height in pixels, regardless of row order
    pub const fn height(&self) -> usize {
        self.info.height.unsigned_abs() as usize
    }

    /// Bytes per pixel, `bits_per_pixel/8`
    pub const fn channels(&self) -> usize {
        (self.info.bits_per_pixel / 8) as usize
    }

    /// Whether the first stored row is the bottom row of the picture
    pub const fn is_bottom_up(&self) -> bool {
        self.info.height > 0
    }

    /// Expected length of the pixel array
    pub const fn pixel_len(&self) -> usize {
        self.width() * self.height() * self.channels()
    }

    /// Update width, height and image size after a resize.
    ///
    /// The sign of the height field, hence row order, is preserved.
    /// Every other field, including the file size, is left as is.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<(), usize> {
        let new_width = i32::try_from(width).map_err(|_| width)?;
        let new_height = i32::try_from(height).map_err(|_| height)?;
        let image_size = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(self.channels()))
            .and_then(|x| u32::try_from(x).ok())
            .ok_or(width.saturating_mul(height))?;

        self.info.width = new_width;
        self.info.height = if self.info.height < 0 {
            -new_height
        } else {
            new_height
        };
        self.info.image_size = image_size;

        Ok(())
    }

    pub(crate) fn read(reader: &mut ByteReader) -> Result<BmpHeaders, ByteIoError> {
        let file = BmpFileHeader {
            file_type:         reader.get_u16_le_err()?,
            size:              reader.get_u32_le_err()?,
            reserved1:         reader.get_u16_le_err()?,
            reserved2:         reader.get_u16_le_err()?,
            pixel_data_offset: reader.get_u32_le_err()?
        };
        let info = BmpInfoHeader {
            header_size:        reader.get_u32_le_err()?,
            width:              reader.get_i32_le_err()?,
            height:             reader.get_i32_le_err()?,
            planes:             reader.get_u16_le_err()?,
            bits_per_pixel:     reader.get_u16_le_err()?,
            compression:        reader.get_u32_le_err()?,
            image_size:         reader.get_u32_le_err()?,
            x_pixels_per_meter: reader.get_i32_le_err()?,
            y_pixels_per_meter: reader.get_i32_le_err()?,
            colors_used:        reader.get_u32_le_err()?,
            colors_important:   reader.get_u32_le_err()?
        };
        Ok(BmpHeaders { file, info })
    }

    pub(crate) fn write(&self, writer: &mut ByteWriter) -> Result<(), ByteIoError> {
        let (file, info) = (&self.file, &self.info);

        writer.write_u16_le_err(file.file_type)?;
        writer.write_u32_le_err(file.size)?;
        writer.write_u16_le_err(file.reserved1)?;
        writer.write_u16_le_err(file.reserved2)?;
        writer.write_u32_le_err(file.pixel_data_offset)?;

        writer.write_u32_le_err(info.header_size)?;
        writer.write_i32_le_err(info.width)?;
        writer.write_i32_le_err(info.height)?;
        writer.write_u16_le_err(info.planes)?;
        writer.write_u16_le_err(info.bits_per_pixel)?;
        writer.write_u32_le_err(info.compression)?;
        writer.write_u32_le_err(info.image_size)?;
        writer.write_i32_le_err(info.x_pixels_per_meter)?;
        writer.write_i32_le_err(info.y_pixels_per_meter)?;
        writer.write_u32_le_err(info.colors_used)?;
        writer.write_u32_le_err(info.colors_important)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::common::BmpHeaders;

    #[test]
    fn resize_keeps_row_order() {
        let mut headers = BmpHeaders::new(8, 6, 3);
        headers.info.height = -6;
        headers.set_dimensions(12, 9).unwrap();

        assert_eq!(headers.info.width, 12);
        assert_eq!(headers.info.height, -9);
        assert_eq!(headers.info.image_size, 12 * 9 * 3);
        assert!(!headers.is_bottom_up());
        // file size is not touched by a resize
        assert_eq!(headers.file.size, 8 * 6 * 3 + 54);
    }
}
