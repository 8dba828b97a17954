/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Visibility sampler
//!
//! Walks along a candidate line at intervals of no more than the segment length, reading the reference frame at
//! each sample. A sample is visible if the frame shows either of the line's sentinel colours at the sample point or
//! at one of six points around it (either side of the line and diagonally across it), which allows for the
//! anti-aliased fringes of the surfaces the line lies between.
//!
//! Only the first run of visible samples whose chord is longer than the segment length is returned: sampling stops
//! as soon as one is found. Shorter runs are discarded and the scan continues.
//!

mod sample_offsets;
mod visibility_sampler;

pub use self::sample_offsets::*;
pub use self::visibility_sampler::*;
