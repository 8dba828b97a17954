/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::mask_backend_trait::*;
use super::query_batch::*;
use crate::error::*;
use crate::frame::*;
use crate::line::*;
use crate::sampler::*;
use crate::settings::*;

use log::debug;

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

///
/// Mask backend that samples lines on the CPU
///
/// With the `multithreading` feature, the lines in a pass are sampled in parallel on the rayon thread pool.
///
#[derive(Clone, Debug)]
pub struct CpuMaskBackend<TFrame = ReferenceFrame> {
    frame: TFrame,
}

impl<TFrame> CpuMaskBackend<TFrame>
where
    TFrame: FrameReader,
{
    ///
    /// Creates a backend that tests lines against the specified frame
    ///
    pub fn new(frame: TFrame) -> CpuMaskBackend<TFrame> {
        CpuMaskBackend { frame }
    }

    ///
    /// The frame that this backend reads from
    ///
    #[inline]
    pub fn frame(&self) -> &TFrame {
        &self.frame
    }

    #[cfg(feature = "multithreading")]
    fn sample_batch(&self, sampler: &VisibilitySampler<'_, TFrame>, batch: &QueryBatch) -> Vec<Option<VisibleRun>> {
        batch.lines().par_iter().map(|line| sampler.first_visible_run(line)).collect()
    }

    #[cfg(not(feature = "multithreading"))]
    fn sample_batch(&self, sampler: &VisibilitySampler<'_, TFrame>, batch: &QueryBatch) -> Vec<Option<VisibleRun>> {
        batch.lines().iter().map(|line| sampler.first_visible_run(line)).collect()
    }
}

impl<TFrame> MaskBackend for CpuMaskBackend<TFrame>
where
    TFrame: FrameReader,
{
    #[inline]
    fn frame_size(&self) -> (f64, f64) {
        self.frame.size()
    }

    fn run_pass(&self, lines: &[CandidateLine], settings: &MaskSettings) -> Result<Vec<PassVisibility>, MaskError> {
        settings.validate()?;

        let batch = QueryBatch::new(lines, settings.coordinate_limit);
        if batch.is_empty() {
            debug!("Mask pass: no lines to check ({} out of bounds)", batch.num_dropped());
            return Ok(vec![]);
        }

        let sampler = VisibilitySampler::new(&self.frame, settings);
        let runs = self.sample_batch(&sampler, &batch);
        let visible = batch.collect_visible(runs);

        debug!("Mask pass: checked {} lines ({} out of bounds), {} visible", batch.len(), batch.num_dropped(), visible.len());

        Ok(visible)
    }
}
