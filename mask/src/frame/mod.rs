/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod frame_reader_trait;
mod frame_window;
#[cfg(feature = "frame_png")]
mod png_frame;
mod reference_frame;

pub use self::frame_reader_trait::*;
pub use self::frame_window::*;
pub use self::reference_frame::*;
