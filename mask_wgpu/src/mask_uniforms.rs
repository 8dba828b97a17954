/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

///
/// Layout for the MaskUniforms uniform in the masking shader
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct MaskUniforms {
    /// The frame window, as `[x, y, width, height]`
    pub frame: [f32; 4],

    /// The logical size of the reference frame
    pub canvas_size: [f32; 2],
    pub segment_length: f32,
    pub color_tolerance: f32,
    pub offset_scale: f32,

    /// Width of the line textures, in texels
    pub batch_width: u32,

    /// Number of lines in the batch (texels after this are padding)
    pub line_count: u32,
    pub _padding: u32,
}

impl MaskUniforms {
    ///
    /// Creates the uniforms for a batch of lines
    ///
    pub fn new(settings: &MaskSettings, frame_size: (f64, f64), layout: &BatchLayout, line_count: usize) -> MaskUniforms {
        MaskUniforms {
            frame: settings.frame_window(frame_size).to_f32_array(),
            canvas_size: [frame_size.0 as f32, frame_size.1 as f32],
            segment_length: settings.segment_length as f32,
            color_tolerance: settings.color_tolerance,
            offset_scale: settings.offset_scale as f32,
            batch_width: layout.width as u32,
            line_count: line_count as u32,
            _padding: 0,
        }
    }

    ///
    /// The contents of the uniform buffer
    ///
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(std::mem::size_of::<MaskUniforms>());

        self.frame.iter().for_each(|val| bytes.extend(val.to_ne_bytes()));
        self.canvas_size.iter().for_each(|val| bytes.extend(val.to_ne_bytes()));
        bytes.extend(self.segment_length.to_ne_bytes());
        bytes.extend(self.color_tolerance.to_ne_bytes());
        bytes.extend(self.offset_scale.to_ne_bytes());
        bytes.extend(self.batch_width.to_ne_bytes());
        bytes.extend(self.line_count.to_ne_bytes());
        bytes.extend(self._padding.to_ne_bytes());

        bytes
    }
}
