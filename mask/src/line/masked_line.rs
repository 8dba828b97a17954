/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use serde_derive::{Deserialize, Serialize};

///
/// A section of a candidate line that was found to be visible
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct MaskedLine {
    /// The first visible point
    pub start: Coord2,

    /// The last visible point
    pub end: Coord2,

    /// The index of the line this was found on, in the list originally passed to the masker
    pub source_index: usize,
}

impl MaskedLine {
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}
