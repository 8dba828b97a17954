/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod rgb8;
mod sentinel_codec;

pub use self::rgb8::*;
pub use self::sentinel_codec::*;
