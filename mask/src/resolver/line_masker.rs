/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::backend::*;
use crate::error::*;
use crate::line::*;
use crate::settings::*;

use log::{debug, info};

use std::time::Instant;

///
/// Finds every visible section of a set of lines by running repeated passes on a backend
///
/// A single pass only finds the first visible run on each line. After each pass, the masker submits the rest of
/// each line that produced a result (from its last visible point to its original end point) to find the next run.
/// This continues until a pass finds nothing new or the iteration limit in the settings is reached: in that case
/// the sections found so far are returned.
///
pub struct LineMasker<TBackend> {
    backend: TBackend,
}

impl<TBackend> LineMasker<TBackend>
where
    TBackend: MaskBackend,
{
    pub fn new(backend: TBackend) -> LineMasker<TBackend> {
        LineMasker { backend }
    }

    #[inline]
    pub fn backend(&self) -> &TBackend {
        &self.backend
    }

    pub fn into_backend(self) -> TBackend {
        self.backend
    }

    ///
    /// Returns the visible sections of a set of lines
    ///
    /// Each result carries the index of the line it was found on. Lines outside the coordinate limit never produce
    /// any results.
    ///
    pub fn mask(&self, lines: &[CandidateLine], settings: &MaskSettings) -> Result<Vec<MaskedLine>, MaskError> {
        settings.validate()?;

        let start_time = Instant::now();

        // Each pending line is paired with the index of the line it's a remainder of
        let mut pending = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_within(settings.coordinate_limit))
            .map(|(idx, line)| (*line, idx))
            .collect::<Vec<_>>();
        let mut masked = vec![];
        let mut iterations = 0;

        while !pending.is_empty() && iterations < settings.max_iterations {
            let pass_lines = pending.iter().map(|(line, _)| *line).collect::<Vec<_>>();
            let visible = self.backend.run_pass(&pass_lines, settings)?;

            let mut next_pending = Vec::with_capacity(visible.len());
            for section in visible {
                let (line, source_index) = pending[section.index];

                masked.push(MaskedLine {
                    start: section.first_visible,
                    end: section.last_visible,
                    source_index,
                });
                next_pending.push((line.remainder_from(section.last_visible), source_index));
            }

            pending = next_pending;
            iterations += 1;
        }

        if !pending.is_empty() {
            debug!("Stopped masking after {} iterations with {} lines unresolved", iterations, pending.len());
        }

        let elapsed = start_time.elapsed();
        info!("Masked {} lines: kept {} sections in {} passes ({}.{:03}s)", lines.len(), masked.len(), iterations, elapsed.as_secs(), elapsed.subsec_millis());

        Ok(masked)
    }

    ///
    /// Checks the colours of a set of raw lines, then returns their visible sections
    ///
    /// Every line is checked before any sampling starts, so an invalid colour anywhere in the input means that no
    /// work is done.
    ///
    pub fn mask_raw(&self, raw_lines: &[RawCandidateLine], settings: &MaskSettings) -> Result<Vec<MaskedLine>, MaskError> {
        let lines = validate_raw_lines(raw_lines)?;

        self.mask(&lines, settings)
    }
}
