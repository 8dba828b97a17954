/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sample_offsets::*;
use crate::frame::*;
use crate::geo::*;
use crate::line::*;
use crate::settings::*;

///
/// A run of visible samples along a line
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct VisibleRun {
    pub first: Coord2,
    pub last: Coord2,
}

impl VisibleRun {
    #[inline]
    pub fn length(&self) -> f64 {
        self.first.distance_to(&self.last)
    }
}

///
/// Finds the first visible run along candidate lines by sampling a frame
///
/// The sampler only reads from the frame, so a single sampler can be used for many lines at once.
///
pub struct VisibilitySampler<'a, TFrame: ?Sized> {
    frame: &'a TFrame,
    window: FrameWindow,
    segment_length: f64,
    color_tolerance: f32,
    offset_scale: f64,
}

///
/// The number of segments a line is divided into when sampling it (there is one more sample than this)
///
#[inline]
pub fn sample_segment_count(length: f64, segment_length: f64) -> f64 {
    f64::max(2.0, (length / segment_length).floor() + 1.0)
}

///
/// True if no channel of `a` differs from `b` by `tolerance` or more
///
#[inline]
pub fn colors_match(a: [f32; 3], b: [f32; 3], tolerance: f32) -> bool {
    let max_diff = f32::max(f32::max((a[0] - b[0]).abs(), (a[1] - b[1]).abs()), (a[2] - b[2]).abs());

    max_diff < tolerance
}

impl<'a, TFrame> VisibilitySampler<'a, TFrame>
where
    TFrame: ?Sized + FrameReader,
{
    ///
    /// Creates a sampler for a frame using the specified settings
    ///
    pub fn new(frame: &'a TFrame, settings: &MaskSettings) -> VisibilitySampler<'a, TFrame> {
        VisibilitySampler {
            frame,
            window: settings.frame_window(frame.size()),
            segment_length: settings.segment_length,
            color_tolerance: settings.color_tolerance,
            offset_scale: settings.offset_scale,
        }
    }

    ///
    /// Returns the first run of visible samples on a line whose chord is longer than the segment length, if there is one
    ///
    pub fn first_visible_run(&self, line: &CandidateLine) -> Option<VisibleRun> {
        let delta = line.pt2 - line.pt1;
        let length = delta.magnitude();

        // Degenerate lines have no direction to sample along, and can never produce a long enough run
        if !length.is_finite() || length <= 0.0 {
            return None;
        }

        let num_segments = sample_segment_count(length, self.segment_length);
        let offsets = SampleOffsets::for_line(delta, length, self.offset_scale);
        let color1 = line.color1.normalized();
        let color2 = line.color2.normalized();

        let mut run: Option<VisibleRun> = None;

        for segment in 0..=(num_segments as usize) {
            let pos = line.pt1 + delta * (segment as f64) / num_segments;

            if !self.window.contains(pos) {
                continue;
            }

            if self.is_visible(pos, &offsets, color1, color2) {
                run = Some(match run {
                    Some(run) => VisibleRun { first: run.first, last: pos },
                    None => VisibleRun { first: pos, last: pos },
                });
            } else if let Some(closed_run) = run {
                // The first run that's long enough wins
                if self.is_long_enough(&closed_run) {
                    break;
                }

                run = None;
            }
        }

        run.filter(|run| self.is_long_enough(run))
    }

    ///
    /// True if the sentinel colours can be seen at the specified position or around it
    ///
    #[inline]
    fn is_visible(&self, pos: Coord2, offsets: &SampleOffsets, color1: [f32; 3], color2: [f32; 3]) -> bool {
        offsets.sample_points(pos).iter().any(|point| {
            let color_here = self.frame.color_at(*point);

            colors_match(color_here, color1, self.color_tolerance) || colors_match(color_here, color2, self.color_tolerance)
        })
    }

    #[inline]
    fn is_long_enough(&self, run: &VisibleRun) -> bool {
        run.length() > self.segment_length
    }
}
