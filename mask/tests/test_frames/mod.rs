/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(dead_code)]

use flo_mask::*;

pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

///
/// Creates a frame filled with a single colour
///
pub fn solid_frame(width: usize, height: usize, color: Rgb8) -> ReferenceFrame {
    frame_with_rects(width, height, color, &[])
}

///
/// Creates a frame with a background colour and some filled rectangles
///
/// Rectangles are `(x0, y0, x1, y1, color)`, filling the pixels with `x0 <= x < x1` and `y0 <= y < y1`
///
pub fn frame_with_rects(width: usize, height: usize, background: Rgb8, rects: &[(usize, usize, usize, usize, Rgb8)]) -> ReferenceFrame {
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let color = rects
                .iter()
                .rev()
                .find(|(x0, y0, x1, y1, _)| x >= *x0 && x < *x1 && y >= *y0 && y < *y1)
                .map(|(_, _, _, _, color)| *color)
                .unwrap_or(background);

            pixels.extend([color.r, color.g, color.b, 255]);
        }
    }

    ReferenceFrame::new(pixels, width, height, 1.0).unwrap()
}

///
/// A horizontal line across a frame at the specified y position
///
pub fn horizontal_line(x1: f64, x2: f64, y: f64, color1: Rgb8, color2: Rgb8) -> CandidateLine {
    CandidateLine::new(Coord2(x1, y), Coord2(x2, y), color1, color2)
}

///
/// Asserts that two points are within a small distance of each other
///
pub fn assert_close(actual: Coord2, expected: Coord2, tolerance: f64) {
    assert!(actual.distance_to(&expected) <= tolerance, "{:?} is not close to {:?}", actual, expected);
}
