/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use flo_mask::*;
use flo_mask_wgpu::*;

const RED: Rgb8 = Rgb8::new(255, 0, 0);
const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

fn frame_with_rects(width: usize, height: usize, background: Rgb8, rects: &[(usize, usize, usize, usize, Rgb8)]) -> ReferenceFrame {
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let color = rects
                .iter()
                .rev()
                .find(|(x0, y0, x1, y1, _)| x >= *x0 && x < *x1 && y >= *y0 && y < *y1)
                .map(|(_, _, _, _, color)| *color)
                .unwrap_or(background);

            pixels.extend([color.r, color.g, color.b, 255]);
        }
    }

    ReferenceFrame::new(pixels, width, height, 1.0).unwrap()
}

///
/// Creates a GPU backend, or returns None if this machine has no suitable GPU
///
fn gpu_backend(frame: &ReferenceFrame) -> Option<WgpuMaskBackend> {
    match WgpuMaskBackend::new(frame) {
        Ok(backend) => Some(backend),
        Err(MaskError::NoAdapter) | Err(MaskError::FloatTexturesUnsupported) | Err(MaskError::RequestDevice(_)) => {
            println!("No GPU available: skipping test");
            None
        }
        Err(err) => panic!("{}", err),
    }
}

fn assert_close(actual: Coord2, expected: Coord2) {
    assert!(actual.distance_to(&expected) < 1e-3, "{:?} is not close to {:?}", actual, expected);
}

#[test]
fn fully_visible_line() {
    let frame = frame_with_rects(100, 100, RED, &[]);
    let backend = match gpu_backend(&frame) {
        Some(backend) => backend,
        None => return,
    };

    let lines = vec![
        CandidateLine::new(Coord2(10.0, 10.0), Coord2(90.0, 90.0), RED, BLUE),
        CandidateLine::new(Coord2(10.0, 10.0), Coord2(90.0, 90.0), GREEN, BLUE),
    ];
    let visible = backend.run_pass(&lines, &MaskSettings::default()).unwrap();

    assert!(visible.len() == 1);
    assert!(visible[0].index == 0);
    assert_close(visible[0].first_visible, Coord2(10.0, 10.0));
    assert_close(visible[0].last_visible, Coord2(90.0, 90.0));
}

#[test]
fn resolve_two_occluders() {
    let frame = frame_with_rects(100, 100, RED, &[(30, 0, 50, 100, BLACK), (70, 0, 80, 100, BLACK)]);
    let backend = match gpu_backend(&frame) {
        Some(backend) => backend,
        None => return,
    };

    let line = CandidateLine::new(Coord2(0.0, 50.0), Coord2(100.0, 50.0), RED, BLUE);
    let masked = LineMasker::new(&backend).mask(&[line], &MaskSettings::default()).unwrap();

    assert!(masked.len() == 3, "{:?}", masked);
    assert_close(masked[0].end, Coord2(600.0 / 21.0, 50.0));
    assert_close(masked[1].start, Coord2(1100.0 / 21.0, 50.0));
    assert_close(masked[2].start, Coord2(1700.0 / 21.0, 50.0));
}

#[test]
fn gpu_matches_cpu() {
    let frame = frame_with_rects(64, 64, BLACK, &[(0, 0, 32, 64, RED), (32, 16, 64, 48, GREEN)]);
    let backend = match gpu_backend(&frame) {
        Some(backend) => backend,
        None => return,
    };
    let cpu_backend = CpuMaskBackend::new(frame.clone());

    // Lines between pixel boundaries, so both backends see the same pixels
    let lines = (0..40)
        .map(|idx| {
            let y = idx as f64 * 1.5 + 0.25;
            let color = if idx % 2 == 0 { RED } else { GREEN };

            CandidateLine::new(Coord2(0.25, y), Coord2(63.75, y), color, BLUE)
        })
        .collect::<Vec<_>>();

    let gpu_visible = backend.run_pass(&lines, &MaskSettings::default()).unwrap();
    let cpu_visible = cpu_backend.run_pass(&lines, &MaskSettings::default()).unwrap();

    assert!(gpu_visible.len() == cpu_visible.len());
    for (gpu, cpu) in gpu_visible.iter().zip(cpu_visible.iter()) {
        assert!(gpu.index == cpu.index);
        assert_close(gpu.first_visible, cpu.first_visible);
        assert_close(gpu.last_visible, cpu.last_visible);
    }
}

#[test]
fn empty_and_distant_batches() {
    let frame = frame_with_rects(16, 16, RED, &[]);
    let backend = match gpu_backend(&frame) {
        Some(backend) => backend,
        None => return,
    };

    assert!(backend.run_pass(&[], &MaskSettings::default()).unwrap().is_empty());

    let distant = vec![CandidateLine::new(Coord2(0.0, 0.0), Coord2(600_000.0, 0.0), RED, BLUE)];
    assert!(backend.run_pass(&distant, &MaskSettings::default()).unwrap().is_empty());
}

#[test]
fn invalid_shader_is_annotated() {
    let frame = frame_with_rects(16, 16, RED, &[]);
    let backend = match gpu_backend(&frame) {
        Some(backend) => backend,
        None => return,
    };

    match compile_mask_shader(backend.device(), "fn broken( {\n}\n") {
        Err(MaskError::ShaderCompile { annotated_source, .. }) => {
            assert!(annotated_source.starts_with("   1: fn broken( {"), "{}", annotated_source);
        }
        Ok(_) => panic!("Shader should not compile"),
        Err(other) => panic!("Unexpected error {:?}", other),
    }
}
