/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while masking lines against a frame
///
#[derive(Clone, PartialEq, Debug)]
pub enum MaskError {
    /// A colour channel was outside of the range 0..=255
    ColorOutOfRange { value: f64 },

    /// A colour channel was not a whole number
    ColorNotInteger { value: f64 },

    /// A packed colour value could not be decoded back into two RGB triples
    InvalidPackedColor { value: f32 },

    /// The pixel buffer supplied for a frame was not the size implied by its dimensions (lengths are in bytes)
    FrameSizeMismatch { expected: usize, actual: usize },

    /// A frame must contain at least one pixel
    EmptyFrame,

    /// The resolution factor for a frame must be a finite value greater than 0
    InvalidResolutionFactor(f64),

    /// A setting was outside of the range that can be used for masking
    InvalidSettings(String),

    /// A PNG file could not be decoded
    PngDecode(String),

    /// A PNG file used a colour type or bit depth that can't be used as a reference frame
    UnsupportedPngFormat(String),

    /// JSON data could not be read
    Json(String),

    /// No GPU adapter was available
    NoAdapter,

    /// The GPU device could not be created
    RequestDevice(String),

    /// The GPU cannot render to or read back from 32-bit floating point textures
    FloatTexturesUnsupported,

    /// The reference frame is bigger than the largest texture the GPU supports
    FrameTooLarge { width: usize, height: usize, max_dimension: usize },

    /// The masking shader failed to compile (the annotated source marks the failing lines)
    ShaderCompile { log: String, annotated_source: String },

    /// The results of a pass could not be read back from the GPU
    Readback(String),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::ColorOutOfRange { value } => write!(f, "RGB value {} out of 0..255 range", value),
            MaskError::ColorNotInteger { value } => write!(f, "RGB value {} is not an integer", value),
            MaskError::InvalidPackedColor { value } => write!(f, "Packed colour value {} is not valid", value),
            MaskError::FrameSizeMismatch { expected, actual } => write!(f, "Frame buffer should be {} bytes but is {} bytes", expected, actual),
            MaskError::EmptyFrame => write!(f, "Frame has no pixels"),
            MaskError::InvalidResolutionFactor(rf) => write!(f, "Resolution factor {} must be finite and greater than 0", rf),
            MaskError::InvalidSettings(msg) => write!(f, "Invalid mask settings: {}", msg),
            MaskError::PngDecode(msg) => write!(f, "Could not decode PNG frame: {}", msg),
            MaskError::UnsupportedPngFormat(msg) => write!(f, "Unsupported PNG format: {}", msg),
            MaskError::Json(msg) => write!(f, "Could not read JSON: {}", msg),
            MaskError::NoAdapter => write!(f, "No GPU adapter is available"),
            MaskError::RequestDevice(msg) => write!(f, "Could not create GPU device: {}", msg),
            MaskError::FloatTexturesUnsupported => write!(f, "GPU does not support rendering to 32-bit float textures"),
            MaskError::FrameTooLarge { width, height, max_dimension } => write!(f, "Frame size {}x{} is larger than the maximum texture size ({})", width, height, max_dimension),
            MaskError::ShaderCompile { log, annotated_source } => write!(f, "Error compiling shader: {}\n{}", log, annotated_source),
            MaskError::Readback(msg) => write!(f, "Could not read back mask results: {}", msg),
        }
    }
}

impl Error for MaskError {}

impl From<serde_json::Error> for MaskError {
    fn from(err: serde_json::Error) -> MaskError {
        MaskError::Json(err.to_string())
    }
}
