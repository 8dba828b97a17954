/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Trait implemented by types that can supply the colour of a rendered frame at a point
///
pub trait FrameReader: Send + Sync {
    ///
    /// The logical width and height of the frame (the coordinate space that lines are specified in)
    ///
    fn size(&self) -> (f64, f64);

    ///
    /// Reads the colour at the specified position as normalized RGB values
    ///
    /// Positions outside the frame read the nearest edge pixel
    ///
    fn color_at(&self, pos: Coord2) -> [f32; 3];
}
