/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::color::*;
use crate::geo::*;

use serde_derive::{Deserialize, Serialize};

///
/// A line segment that might be visible in a reference frame
///
/// The two colours are the sentinel colours of the surfaces on either side of the line: the line is visible
/// wherever the frame shows either of them.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct CandidateLine {
    pub pt1: Coord2,
    pub pt2: Coord2,
    pub color1: Rgb8,
    pub color2: Rgb8,
}

impl CandidateLine {
    #[inline]
    pub fn new(pt1: Coord2, pt2: Coord2, color1: Rgb8, color2: Rgb8) -> CandidateLine {
        CandidateLine { pt1, pt2, color1, color2 }
    }

    ///
    /// The length of this line
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        self.pt1.distance_to(&self.pt2)
    }

    ///
    /// True if both endpoints are within `limit` units of the origin on both axes
    ///
    /// Lines with coordinates beyond the limit are dropped before sampling: very large values lose too much
    /// precision when they're converted to f32 for the GPU.
    ///
    #[inline]
    pub fn is_within(&self, limit: f64) -> bool {
        self.pt1.is_within(limit) && self.pt2.is_within(limit)
    }

    ///
    /// The part of this line that follows the specified point (which is assumed to be on the line)
    ///
    #[inline]
    pub fn remainder_from(&self, start: Coord2) -> CandidateLine {
        CandidateLine {
            pt1: start,
            pt2: self.pt2,
            color1: self.color1,
            color2: self.color2,
        }
    }

    ///
    /// The colours of this line packed for sending to the GPU
    ///
    #[inline]
    pub fn packed_colors(&self) -> [f32; 3] {
        encode_sentinel_colors(self.color1, self.color2)
    }
}
