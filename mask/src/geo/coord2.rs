/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde_derive::{Deserialize, Serialize};

use std::ops::*;

///
/// Represents a 2D point in screen space (the y axis points down from the top-left of the frame)
///
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// The length of the vector from the origin to this point
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.0 * self.0 + self.1 * self.1)
    }

    ///
    /// The straight-line distance between two points
    ///
    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        (*target - *self).magnitude()
    }

    ///
    /// The vector at right angles to this one (rotated anticlockwise in a y-up space)
    ///
    #[inline]
    pub fn perpendicular(&self) -> Coord2 {
        Coord2(-self.1, self.0)
    }

    ///
    /// Rotates this vector by the specified angle in radians
    ///
    #[inline]
    pub fn rotate(&self, radians: f64) -> Coord2 {
        let (sin, cos) = radians.sin_cos();

        Coord2(cos * self.0 - sin * self.1, sin * self.0 + cos * self.1)
    }

    ///
    /// True if both components of this coordinate are finite and within `limit` of the origin on each axis
    ///
    #[inline]
    pub fn is_within(&self, limit: f64) -> bool {
        self.0 >= -limit && self.0 <= limit && self.1 >= -limit && self.1 <= limit
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Div<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn div(self, rhs: f64) -> Coord2 {
        Coord2(self.0 / rhs, self.1 / rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<Coord2> for (f64, f64) {
    #[inline]
    fn from(coord: Coord2) -> (f64, f64) {
        (coord.0, coord.1)
    }
}
