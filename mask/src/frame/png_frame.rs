/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::reference_frame::*;
use crate::error::*;

use std::io::Read;

impl ReferenceFrame {
    ///
    /// Decodes a reference frame from PNG data
    ///
    /// The logical size of the frame is the size of the image divided by the resolution factor. Palette and
    /// greyscale images are expanded to RGBA, and 16-bit images are reduced to 8 bits per channel.
    ///
    pub fn from_png(data: impl Read, resolution_factor: f64) -> Result<ReferenceFrame, MaskError> {
        if !resolution_factor.is_finite() || resolution_factor <= 0.0 {
            return Err(MaskError::InvalidResolutionFactor(resolution_factor));
        }

        let mut decoder = png::Decoder::new(data);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder.read_info().map_err(|err| MaskError::PngDecode(err.to_string()))?;
        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer).map_err(|err| MaskError::PngDecode(err.to_string()))?;
        buffer.truncate(info.buffer_size());

        if info.bit_depth != png::BitDepth::Eight {
            return Err(MaskError::UnsupportedPngFormat(format!("{:?} bit depth", info.bit_depth)));
        }

        let rgba = match info.color_type {
            png::ColorType::Rgba => buffer,
            png::ColorType::Rgb => buffer.chunks_exact(3).flat_map(|px| [px[0], px[1], px[2], 255]).collect(),
            png::ColorType::GrayscaleAlpha => buffer.chunks_exact(2).flat_map(|px| [px[0], px[0], px[0], px[1]]).collect(),
            png::ColorType::Grayscale => buffer.iter().flat_map(|&px| [px, px, px, 255]).collect(),
            png::ColorType::Indexed => {
                return Err(MaskError::UnsupportedPngFormat("indexed colour was not expanded".to_string()))
            }
        };

        let width = (info.width as f64 / resolution_factor).round() as usize;
        let height = (info.height as f64 / resolution_factor).round() as usize;

        ReferenceFrame::new(rgba, width, height, resolution_factor)
    }
}
