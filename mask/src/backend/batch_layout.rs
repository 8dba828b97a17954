/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;
use crate::line::*;
use crate::sampler::*;

///
/// Describes how a batch of lines is laid out when it's sent to a GPU as a texture
///
/// Each line occupies one RGBA texel, filled in row by row. The texture is as close to square as possible:
/// `ceil(sqrt(n))` texels wide and as many rows high as are needed. Unused texels at the end are zero.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct BatchLayout {
    pub width: usize,
    pub height: usize,
}

impl BatchLayout {
    ///
    /// Creates the layout for a batch containing the specified number of lines
    ///
    pub fn for_count(count: usize) -> BatchLayout {
        if count == 0 {
            return BatchLayout { width: 0, height: 0 };
        }

        let width = (count as f64).sqrt().ceil() as usize;
        let height = (count + width - 1) / width;

        BatchLayout { width, height }
    }

    ///
    /// The number of texels in the texture
    ///
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    ///
    /// Packs the endpoints of the lines as `[x1, y1, x2, y2]` texels
    ///
    pub fn pack_coordinates(&self, lines: &[CandidateLine]) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.area() * 4);

        for line in lines.iter().take(self.area()) {
            data.extend([line.pt1.0 as f32, line.pt1.1 as f32, line.pt2.0 as f32, line.pt2.1 as f32]);
        }

        data.resize(self.area() * 4, 0.0);
        data
    }

    ///
    /// Packs the sentinel colours of the lines as `[x, y, z, 0]` texels (see `encode_sentinel_colors()`)
    ///
    pub fn pack_colors(&self, lines: &[CandidateLine]) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.area() * 4);

        for line in lines.iter().take(self.area()) {
            let [x, y, z] = line.packed_colors();
            data.extend([x, y, z, 0.0]);
        }

        data.resize(self.area() * 4, 0.0);
        data
    }

    ///
    /// Reads the results of a pass back from the `[first.x, first.y, last.x, last.y]` texels of the target texture
    ///
    /// Only the first `count` texels are read: everything after that is padding. A texel that is all zeros means
    /// that nothing was visible on that line.
    ///
    pub fn unpack_results(&self, data: &[f32], count: usize) -> Result<Vec<Option<VisibleRun>>, MaskError> {
        if count > self.area() || data.len() < count * 4 {
            return Err(MaskError::Readback(format!("expected {} results but only {} values were read", count, data.len() / 4)));
        }

        let results = data
            .chunks_exact(4)
            .take(count)
            .map(|texel| {
                if texel.iter().all(|val| *val == 0.0) {
                    None
                } else {
                    Some(VisibleRun {
                        first: Coord2(texel[0] as f64, texel[1] as f64),
                        last: Coord2(texel[2] as f64, texel[3] as f64),
                    })
                }
            })
            .collect();

        Ok(results)
    }
}
