/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod candidate_line;
mod masked_line;
mod raw_candidate_line;

pub use self::candidate_line::*;
pub use self::masked_line::*;
pub use self::raw_candidate_line::*;
