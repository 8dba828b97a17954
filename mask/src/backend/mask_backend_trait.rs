/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::geo::*;
use crate::line::*;
use crate::settings::*;

///
/// The visible section found on one line during a single pass
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PassVisibility {
    /// The first visible sample
    pub first_visible: Coord2,

    /// The last visible sample in the same run
    pub last_visible: Coord2,

    /// The index of the line in the list passed to `run_pass()`
    pub index: usize,
}

///
/// Trait implemented by types that can perform a single visibility pass over a batch of lines
///
/// A backend owns the reference frame that lines are tested against. Each pass is independent: no state from one
/// pass is visible to the next.
///
pub trait MaskBackend {
    ///
    /// The logical size of the reference frame
    ///
    fn frame_size(&self) -> (f64, f64);

    ///
    /// Finds the first visible run on each line
    ///
    /// Lines with an endpoint beyond the coordinate limit are skipped. Lines where nothing long enough is visible
    /// produce no result. Results are returned in the same order as the lines.
    ///
    fn run_pass(&self, lines: &[CandidateLine], settings: &MaskSettings) -> Result<Vec<PassVisibility>, MaskError>;
}

impl<'a, TBackend> MaskBackend for &'a TBackend
where
    TBackend: ?Sized + MaskBackend,
{
    #[inline]
    fn frame_size(&self) -> (f64, f64) {
        (**self).frame_size()
    }

    #[inline]
    fn run_pass(&self, lines: &[CandidateLine], settings: &MaskSettings) -> Result<Vec<PassVisibility>, MaskError> {
        (**self).run_pass(lines, settings)
    }
}

impl<TBackend> MaskBackend for Box<TBackend>
where
    TBackend: ?Sized + MaskBackend,
{
    #[inline]
    fn frame_size(&self) -> (f64, f64) {
        (**self).frame_size()
    }

    #[inline]
    fn run_pass(&self, lines: &[CandidateLine], settings: &MaskSettings) -> Result<Vec<PassVisibility>, MaskError> {
        (**self).run_pass(lines, settings)
    }
}
