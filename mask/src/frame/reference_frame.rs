/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::frame_reader_trait::*;
use crate::error::*;
use crate::geo::*;

use std::borrow::Cow;
use std::sync::*;

///
/// The order that the rows of a reference frame's pixel buffer are stored in
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum RowOrder {
    /// The first row in the buffer is the top of the frame
    TopDown,

    /// The first row in the buffer is the bottom of the frame (as returned by `glReadPixels()`)
    BottomUp,
}

///
/// A rendered frame where every object is drawn in its sentinel colour, used to decide which lines are visible
///
/// The frame has a logical size, which is the coordinate space that lines are specified in, and a resolution
/// factor, which is used when the frame was rendered at a higher resolution than the display. The pixel buffer is
/// RGBA, 8 bits per channel, with `round(width * resolution_factor)` pixels per row.
///
/// The pixels are shared and never modified after the frame is created, so cloning a frame is cheap.
///
#[derive(Clone, Debug)]
pub struct ReferenceFrame {
    width: usize,
    height: usize,
    resolution_factor: f64,
    pixel_width: usize,
    pixel_height: usize,
    row_order: RowOrder,
    pixels: Arc<[u8]>,
}

impl ReferenceFrame {
    ///
    /// Creates a reference frame from a top-down RGBA pixel buffer
    ///
    pub fn new(pixels: Vec<u8>, width: usize, height: usize, resolution_factor: f64) -> Result<ReferenceFrame, MaskError> {
        if !resolution_factor.is_finite() || resolution_factor <= 0.0 {
            return Err(MaskError::InvalidResolutionFactor(resolution_factor));
        }

        let pixel_width = (width as f64 * resolution_factor).round() as usize;
        let pixel_height = (height as f64 * resolution_factor).round() as usize;

        if pixel_width == 0 || pixel_height == 0 {
            return Err(MaskError::EmptyFrame);
        }

        let expected = pixel_width * pixel_height * 4;
        if pixels.len() != expected {
            return Err(MaskError::FrameSizeMismatch { expected, actual: pixels.len() });
        }

        Ok(ReferenceFrame {
            width,
            height,
            resolution_factor,
            pixel_width,
            pixel_height,
            row_order: RowOrder::TopDown,
            pixels: pixels.into(),
        })
    }

    ///
    /// Changes the order that the rows in the pixel buffer are interpreted in
    ///
    pub fn with_row_order(mut self, row_order: RowOrder) -> ReferenceFrame {
        self.row_order = row_order;
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn resolution_factor(&self) -> f64 {
        self.resolution_factor
    }

    ///
    /// The size of the pixel buffer, in pixels
    ///
    #[inline]
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.pixel_width, self.pixel_height)
    }

    #[inline]
    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    ///
    /// The raw pixel buffer, in the row order it was supplied in
    ///
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    ///
    /// The pixel buffer with the first row at the top of the frame
    ///
    pub fn top_down_pixels(&self) -> Cow<'_, [u8]> {
        match self.row_order {
            RowOrder::TopDown => Cow::Borrowed(&self.pixels[..]),
            RowOrder::BottomUp => {
                let row_len = self.pixel_width * 4;
                let flipped = self.pixels.chunks_exact(row_len).rev().flatten().copied().collect::<Vec<_>>();

                Cow::Owned(flipped)
            }
        }
    }

    ///
    /// Reads the RGBA value of the pixel at the specified pixel position (measured from the top of the frame)
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let row = match self.row_order {
            RowOrder::TopDown => y,
            RowOrder::BottomUp => self.pixel_height - 1 - y,
        };
        let idx = (row * self.pixel_width + x) * 4;

        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2], self.pixels[idx + 3]]
    }

    ///
    /// Finds the pixel that a logical position falls in, clamped to the edges of the frame
    ///
    #[inline]
    fn pixel_position(&self, pos: Coord2) -> (usize, usize) {
        let x = (pos.0 / self.width as f64 * self.pixel_width as f64).floor();
        let y = (pos.1 / self.height as f64 * self.pixel_height as f64).floor();

        // Float to int casts saturate (and NaN becomes 0), so only the upper bound needs clamping
        let x = (x.max(0.0) as usize).min(self.pixel_width - 1);
        let y = (y.max(0.0) as usize).min(self.pixel_height - 1);

        (x, y)
    }
}

impl FrameReader for ReferenceFrame {
    #[inline]
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    #[inline]
    fn color_at(&self, pos: Coord2) -> [f32; 3] {
        let (x, y) = self.pixel_position(pos);
        let [r, g, b, _] = self.pixel(x, y);

        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
    }
}
