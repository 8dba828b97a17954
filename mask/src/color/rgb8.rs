/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;

use serde_derive::{Deserialize, Serialize};


///
/// A sentinel colour, as 8-bit RGB values
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb8 {
        Rgb8 { r, g, b }
    }

    ///
    /// The channels of this colour in the form they're compared against a frame (each channel divided by 256)
    ///
    #[inline]
    pub fn normalized(&self) -> [f32; 3] {
        [
            self.r as f32 / 256.0,
            self.g as f32 / 256.0,
            self.b as f32 / 256.0,
        ]
    }

    ///
    /// Checks that a single untyped channel value can be represented as a u8
    ///
    pub fn channel_from_f64(value: f64) -> Result<u8, MaskError> {
        if value.is_nan() || value < 0.0 || value > 255.0 {
            Err(MaskError::ColorOutOfRange { value })
        } else if value != value.round() {
            Err(MaskError::ColorNotInteger { value })
        } else {
            Ok(value as u8)
        }
    }
}

impl From<[u8; 3]> for Rgb8 {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Rgb8 {
        Rgb8 { r, g, b }
    }
}

impl From<Rgb8> for [u8; 3] {
    #[inline]
    fn from(color: Rgb8) -> [u8; 3] {
        [color.r, color.g, color.b]
    }
}

impl TryFrom<[f64; 3]> for Rgb8 {
    type Error = MaskError;

    fn try_from([r, g, b]: [f64; 3]) -> Result<Rgb8, MaskError> {
        Ok(Rgb8 {
            r: Rgb8::channel_from_f64(r)?,
            g: Rgb8::channel_from_f64(g)?,
            b: Rgb8::channel_from_f64(b)?,
        })
    }
}

impl TryFrom<[i64; 3]> for Rgb8 {
    type Error = MaskError;

    fn try_from([r, g, b]: [i64; 3]) -> Result<Rgb8, MaskError> {
        Rgb8::try_from([r as f64, g as f64, b as f64])
    }
}
