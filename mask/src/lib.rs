/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_mask
//!
//! Finds which parts of a set of 2D line segments are visible in a rendered frame.
//!
//! The frame is expected to be rendered with every object drawn in a flat 'sentinel' colour. Each candidate
//! line carries the two sentinel colours of the faces that meet at it: wherever the frame shows one of those
//! colours along the line, nothing was drawn in front of it and that part of the line is visible.
//!
//! A `MaskBackend` performs a single pass over a batch of lines, returning the first sufficiently long visible
//! run of each one. `LineMasker` repeats passes over the remainder of each line to find the runs that follow
//! an occluded section.
//!

mod backend;
mod color;
mod error;
mod frame;
mod geo;
mod line;
mod resolver;
mod sampler;
mod settings;

pub use self::backend::*;
pub use self::color::*;
pub use self::error::*;
pub use self::frame::*;
pub use self::geo::*;
pub use self::line::*;
pub use self::resolver::*;
pub use self::sampler::*;
pub use self::settings::*;
