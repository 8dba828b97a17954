/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::mask_backend_trait::*;
use crate::line::*;
use crate::sampler::*;

///
/// The set of lines that are sampled in a single pass
///
/// Lines outside of the coordinate limit are removed when the batch is created. The batch remembers where each of
/// the remaining lines came from so that results can be reported against the caller's indexes.
///
#[derive(Clone, Debug)]
pub struct QueryBatch {
    lines: Vec<CandidateLine>,
    source_indices: Vec<usize>,
    num_dropped: usize,
}

impl QueryBatch {
    ///
    /// Creates a batch from the lines that are within the specified coordinate limit
    ///
    pub fn new(candidates: &[CandidateLine], coordinate_limit: f64) -> QueryBatch {
        let (source_indices, lines): (Vec<_>, Vec<_>) = candidates
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_within(coordinate_limit))
            .map(|(idx, line)| (idx, *line))
            .unzip();
        let num_dropped = candidates.len() - lines.len();

        QueryBatch {
            lines,
            source_indices,
            num_dropped,
        }
    }

    ///
    /// The lines that will be sampled
    ///
    #[inline]
    pub fn lines(&self) -> &[CandidateLine] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    ///
    /// The number of lines that were left out because they were outside the coordinate limit
    ///
    #[inline]
    pub fn num_dropped(&self) -> usize {
        self.num_dropped
    }

    ///
    /// Given the result of sampling each line in this batch (in order), returns the visible sections tagged with the
    /// index of the line they came from
    ///
    pub fn collect_visible(&self, runs: impl IntoIterator<Item = Option<VisibleRun>>) -> Vec<PassVisibility> {
        runs.into_iter()
            .zip(self.source_indices.iter())
            .filter_map(|(run, index)| {
                run.map(|run| PassVisibility {
                    first_visible: run.first,
                    last_visible: run.last,
                    index: *index,
                })
            })
            .collect()
    }
}
