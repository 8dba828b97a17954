/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use std::f64::consts::FRAC_PI_4;

///
/// The offsets from a sample point on a line to the extra points that are checked around it
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SampleOffsets {
    /// At right angles to the line
    pub normal: Coord2,

    /// The normal rotated by -45 degrees
    pub diagonal1: Coord2,

    /// The first diagonal rotated by 90 degrees
    pub diagonal2: Coord2,
}

impl SampleOffsets {
    ///
    /// Computes the offsets for a line with the specified direction vector and length
    ///
    /// `scale` is the distance from the line to each of the offset points
    ///
    pub fn for_line(delta: Coord2, length: f64, scale: f64) -> SampleOffsets {
        let normal = delta.perpendicular() / length * scale;
        let diagonal1 = normal.rotate(-FRAC_PI_4);
        let diagonal2 = diagonal1.perpendicular();

        SampleOffsets { normal, diagonal1, diagonal2 }
    }

    ///
    /// The points to check for a sample, in the order they're checked
    ///
    #[inline]
    pub fn sample_points(&self, pos: Coord2) -> [Coord2; 7] {
        [
            pos,
            pos + self.normal,
            pos - self.normal,
            pos + self.diagonal1,
            pos - self.diagonal1,
            pos + self.diagonal2,
            pos - self.diagonal2,
        ]
    }
}
