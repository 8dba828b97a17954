/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod batch_layout;
mod cpu_backend;
mod mask_backend_trait;
mod query_batch;

pub use self::batch_layout::*;
pub use self::cpu_backend::*;
pub use self::mask_backend_trait::*;
pub use self::query_batch::*;
