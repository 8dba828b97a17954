/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_mask_wgpu
//!
//! A `MaskBackend` for `flo_mask` that runs each visibility pass on the GPU. Every candidate line in a batch
//! becomes one texel of a pair of floating point textures (coordinates and packed sentinel colours), and a
//! fragment shader writes the first visible run for each line into a float render target that is read back
//! once the pass completes.
//!

mod mask_uniforms;
mod texture;
mod wgpu_mask_backend;
mod wgpu_shader;

pub use self::mask_uniforms::*;
pub use self::wgpu_mask_backend::*;
pub use self::wgpu_shader::*;
