/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rgb8::*;
use crate::error::*;

///
/// Packs a pair of sentinel colours into three floating point values
///
/// Channels are paired up as `a * 256 + b`, which never exceeds 65535 and so is stored exactly in an f32.
/// The packed layout is `[r1:g1, b1:r2, g2:b2]`.
///
#[inline]
pub fn encode_sentinel_colors(color1: Rgb8, color2: Rgb8) -> [f32; 3] {
    [
        pack_channels(color1.r, color1.g),
        pack_channels(color1.b, color2.r),
        pack_channels(color2.g, color2.b),
    ]
}

///
/// Recovers the pair of sentinel colours from the values generated by `encode_sentinel_colors()`
///
pub fn decode_sentinel_colors(packed: [f32; 3]) -> Result<(Rgb8, Rgb8), MaskError> {
    let (r1, g1) = unpack_channels(packed[0])?;
    let (b1, r2) = unpack_channels(packed[1])?;
    let (g2, b2) = unpack_channels(packed[2])?;

    Ok((Rgb8::new(r1, g1, b1), Rgb8::new(r2, g2, b2)))
}

///
/// Decodes a packed pair of colours directly into the normalized form used when comparing against a frame
///
/// This is the operation the sampling shader performs on each line: the channels are divided by 256.
///
pub fn decode_normalized_sentinel_colors(packed: [f32; 3]) -> Result<([f32; 3], [f32; 3]), MaskError> {
    let (color1, color2) = decode_sentinel_colors(packed)?;

    Ok((color1.normalized(), color2.normalized()))
}

#[inline]
fn pack_channels(high: u8, low: u8) -> f32 {
    (high as f32) * 256.0 + (low as f32)
}

fn unpack_channels(packed: f32) -> Result<(u8, u8), MaskError> {
    if !packed.is_finite() || packed < 0.0 || packed > 65535.0 || packed != packed.floor() {
        return Err(MaskError::InvalidPackedColor { value: packed });
    }

    let high = (packed / 256.0).floor();
    let low = packed - high * 256.0;

    Ok((high as u8, low as u8))
}
