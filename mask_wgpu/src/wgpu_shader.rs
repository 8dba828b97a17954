/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

use futures::executor;
use log::error;

use std::borrow::Cow;

/// The WGSL source for the masking shader
pub const MASK_SHADER_WGSL: &str = include_str!("../shaders/mask.wgsl");

/// Entry point for the full-screen triangle
pub const MASK_VERTEX_ENTRY_POINT: &str = "vs_main";

/// Entry point that samples a single line
pub const MASK_FRAGMENT_ENTRY_POINT: &str = "fs_main";

///
/// Finds the `(line, column)` positions of the errors mentioned in a shader compiler log
///
fn error_positions(log: &str) -> Vec<(usize, usize)> {
    let mut positions = vec![];
    let mut remaining = log;

    while let Some(idx) = remaining.find("wgsl:") {
        remaining = &remaining[idx + 5..];

        let mut parts = remaining.splitn(3, ':');
        let line = parts.next().and_then(|line| line.parse::<usize>().ok());
        let column = parts.next().and_then(|column| {
            let digits = column.chars().take_while(|c| c.is_ascii_digit()).collect::<String>();
            digits.parse::<usize>().ok()
        });

        if let (Some(line), Some(column)) = (line, column) {
            positions.push((line, column));
        }
    }

    positions.sort();
    positions.dedup();
    positions
}

///
/// Numbers the lines of a shader, marking the positions of any errors mentioned in the compiler log
///
/// Errors are found by looking for `wgsl:LINE:COLUMN` in the log, which is how naga reports locations.
///
pub fn annotate_shader_source(source: &str, log: &str) -> String {
    let positions = error_positions(log);
    let mut annotated = vec![];

    for (idx, line) in source.lines().enumerate() {
        let line_number = idx + 1;
        annotated.push(format!("{:>4}: {}", line_number, line));

        for (_, column) in positions.iter().filter(|(error_line, _)| *error_line == line_number) {
            annotated.push(format!("      {}^^^", " ".repeat(column.saturating_sub(1))));
        }
    }

    annotated.join("\n")
}

///
/// Compiles a WGSL shader, returning the compiler log and the annotated source if it has errors
///
pub fn compile_mask_shader(device: &wgpu::Device, source: &str) -> Result<wgpu::ShaderModule, MaskError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("flo_mask::mask_shader"),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
    });

    match executor::block_on(device.pop_error_scope()) {
        None => Ok(module),
        Some(err) => {
            let log = err.to_string();
            let annotated_source = annotate_shader_source(source, &log);

            error!("Could not compile mask shader: {}\n{}", log, annotated_source);

            Err(MaskError::ShaderCompile { log, annotated_source })
        }
    }
}
