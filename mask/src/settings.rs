/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::frame::*;

use serde_derive::{Deserialize, Serialize};

/// Lines with a coordinate further than this from the origin are not sampled
pub const DEFAULT_COORDINATE_LIMIT: f64 = 500_000.0;

/// The number of passes the masker makes before returning what it has found so far
pub const DEFAULT_MAX_ITERATIONS: usize = 32;

///
/// Settings that control how lines are masked against a frame
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskSettings {
    /// The maximum distance between samples along a line, and the length a visible run must exceed to be reported
    pub segment_length: f64,

    /// The maximum number of passes the masker will make
    pub max_iterations: usize,

    /// Lines with an endpoint beyond this distance from the origin (on either axis) are dropped
    pub coordinate_limit: f64,

    /// The largest difference in any channel for a frame colour to match a sentinel colour
    pub color_tolerance: f32,

    /// How far the extra samples either side of (and diagonally across) a line are taken from it
    pub offset_scale: f64,

    /// If set, only samples inside this part of the frame are considered
    pub frame: Option<FrameWindow>,
}

impl Default for MaskSettings {
    fn default() -> MaskSettings {
        MaskSettings {
            segment_length: 5.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            coordinate_limit: DEFAULT_COORDINATE_LIMIT,
            color_tolerance: 0.01,
            offset_scale: 1.8,
            frame: None,
        }
    }
}

impl MaskSettings {
    ///
    /// Reads mask settings from a JSON object (any fields that are left out use their default values)
    ///
    pub fn from_json(json: &str) -> Result<MaskSettings, MaskError> {
        let settings: MaskSettings = serde_json::from_str(json)?;
        settings.validate()?;

        Ok(settings)
    }

    pub fn with_segment_length(self, segment_length: f64) -> MaskSettings {
        MaskSettings { segment_length, ..self }
    }

    pub fn with_max_iterations(self, max_iterations: usize) -> MaskSettings {
        MaskSettings { max_iterations, ..self }
    }

    pub fn with_coordinate_limit(self, coordinate_limit: f64) -> MaskSettings {
        MaskSettings { coordinate_limit, ..self }
    }

    pub fn with_color_tolerance(self, color_tolerance: f32) -> MaskSettings {
        MaskSettings { color_tolerance, ..self }
    }

    pub fn with_offset_scale(self, offset_scale: f64) -> MaskSettings {
        MaskSettings { offset_scale, ..self }
    }

    pub fn with_frame(self, frame: Option<FrameWindow>) -> MaskSettings {
        MaskSettings { frame, ..self }
    }

    ///
    /// The frame window to sample within, for a frame of the specified size
    ///
    #[inline]
    pub fn frame_window(&self, frame_size: (f64, f64)) -> FrameWindow {
        self.frame.unwrap_or_else(|| FrameWindow::covering(frame_size))
    }

    ///
    /// Checks that these settings can be used for masking
    ///
    pub fn validate(&self) -> Result<(), MaskError> {
        if !self.segment_length.is_finite() || self.segment_length <= 0.0 {
            return Err(MaskError::InvalidSettings(format!("segment length must be greater than 0 (was {})", self.segment_length)));
        }

        if !self.coordinate_limit.is_finite() || self.coordinate_limit <= 0.0 {
            return Err(MaskError::InvalidSettings(format!("coordinate limit must be greater than 0 (was {})", self.coordinate_limit)));
        }

        if !self.color_tolerance.is_finite() || self.color_tolerance < 0.0 {
            return Err(MaskError::InvalidSettings(format!("colour tolerance must not be negative (was {})", self.color_tolerance)));
        }

        if !self.offset_scale.is_finite() || self.offset_scale < 0.0 {
            return Err(MaskError::InvalidSettings(format!("offset scale must not be negative (was {})", self.offset_scale)));
        }

        if let Some(frame) = &self.frame {
            frame.validate()?;
        }

        Ok(())
    }
}
