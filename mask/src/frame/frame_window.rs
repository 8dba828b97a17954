/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;

use serde_derive::{Deserialize, Serialize};

///
/// A clip rectangle restricting which part of a frame is considered while sampling
///
/// Both edges are inclusive: a point lying exactly on the right or bottom edge is inside the window.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct FrameWindow {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FrameWindow {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> FrameWindow {
        FrameWindow { x, y, width, height }
    }

    ///
    /// The window covering the whole of a frame of the specified size
    ///
    pub fn covering(size: (f64, f64)) -> FrameWindow {
        FrameWindow { x: 0.0, y: 0.0, width: size.0, height: size.1 }
    }

    ///
    /// Returns true if the point is inside this window
    ///
    #[inline]
    pub fn contains(&self, pos: Coord2) -> bool {
        !(pos.0 < self.x || pos.0 > self.x + self.width || pos.1 < self.y || pos.1 > self.y + self.height)
    }

    ///
    /// The window as the `[x, y, width, height]` array used when sending it to the GPU
    ///
    pub fn to_f32_array(&self) -> [f32; 4] {
        [self.x as f32, self.y as f32, self.width as f32, self.height as f32]
    }

    pub(crate) fn validate(&self) -> Result<(), MaskError> {
        let all_finite = self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite();

        if !all_finite {
            Err(MaskError::InvalidSettings(format!("frame window {:?} is not finite", self)))
        } else if self.width < 0.0 || self.height < 0.0 {
            Err(MaskError::InvalidSettings(format!("frame window {:?} has a negative size", self)))
        } else {
            Ok(())
        }
    }
}
