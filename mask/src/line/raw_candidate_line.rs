/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::candidate_line::*;
use crate::color::*;
use crate::error::*;
use crate::geo::*;

use serde_derive::{Deserialize, Serialize};

///
/// A candidate line where the colours have not been checked yet
///
/// This is the form lines take when they are read from JSON or passed in from a scripting layer, where the colour
/// channels are arbitrary numbers. Converting to a `CandidateLine` checks that every channel is a whole number
/// between 0 and 255.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct RawCandidateLine {
    pub pt1: Coord2,
    pub pt2: Coord2,
    pub color1: [f64; 3],
    pub color2: [f64; 3],
}

impl TryFrom<&RawCandidateLine> for CandidateLine {
    type Error = MaskError;

    fn try_from(raw: &RawCandidateLine) -> Result<CandidateLine, MaskError> {
        Ok(CandidateLine {
            pt1: raw.pt1,
            pt2: raw.pt2,
            color1: Rgb8::try_from(raw.color1)?,
            color2: Rgb8::try_from(raw.color2)?,
        })
    }
}

impl TryFrom<RawCandidateLine> for CandidateLine {
    type Error = MaskError;

    #[inline]
    fn try_from(raw: RawCandidateLine) -> Result<CandidateLine, MaskError> {
        CandidateLine::try_from(&raw)
    }
}

impl From<&CandidateLine> for RawCandidateLine {
    fn from(line: &CandidateLine) -> RawCandidateLine {
        let channels = |color: Rgb8| [color.r as f64, color.g as f64, color.b as f64];

        RawCandidateLine {
            pt1: line.pt1,
            pt2: line.pt2,
            color1: channels(line.color1),
            color2: channels(line.color2),
        }
    }
}

///
/// Checks the colours of every line in a list, returning the typed lines or the first error
///
pub fn validate_raw_lines(raw_lines: &[RawCandidateLine]) -> Result<Vec<CandidateLine>, MaskError> {
    raw_lines.iter().map(CandidateLine::try_from).collect()
}

///
/// Reads a list of raw lines from JSON and validates them
///
pub fn candidate_lines_from_json(json: &str) -> Result<Vec<CandidateLine>, MaskError> {
    let raw_lines: Vec<RawCandidateLine> = serde_json::from_str(json)?;

    validate_raw_lines(&raw_lines)
}
