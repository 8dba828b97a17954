/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use flo_mask::*;
use flo_mask_wgpu::*;

fn parse_shader() -> naga::Module {
    match naga::front::wgsl::parse_str(MASK_SHADER_WGSL) {
        Ok(module) => module,
        Err(err) => panic!("{}", err.emit_to_string(MASK_SHADER_WGSL)),
    }
}

#[test]
fn shader_is_valid() {
    let module = parse_shader();
    let mut validator = naga::valid::Validator::new(naga::valid::ValidationFlags::all(), naga::valid::Capabilities::empty());

    if let Err(err) = validator.validate(&module) {
        panic!("{:?}", err);
    }
}

#[test]
fn shader_entry_points() {
    let module = parse_shader();

    let vertex = module.entry_points.iter().find(|entry_point| entry_point.name == MASK_VERTEX_ENTRY_POINT).unwrap();
    let fragment = module.entry_points.iter().find(|entry_point| entry_point.name == MASK_FRAGMENT_ENTRY_POINT).unwrap();

    assert!(vertex.stage == naga::ShaderStage::Vertex);
    assert!(fragment.stage == naga::ShaderStage::Fragment);
}

#[test]
fn uniform_layout_matches_shader() {
    let module = parse_shader();

    let (members, span) = module
        .types
        .iter()
        .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
            (Some(name), naga::TypeInner::Struct { members, span }) if name == "MaskUniforms" => Some((members.clone(), *span)),
            _ => None,
        })
        .unwrap();
    let offsets = members.iter().map(|member| member.offset).collect::<Vec<_>>();

    assert!(span as usize == std::mem::size_of::<MaskUniforms>());
    assert!(offsets == vec![0, 16, 24, 28, 32, 36, 40, 44], "{:?}", offsets);
}

#[test]
fn uniform_bytes() {
    let settings = MaskSettings::default().with_frame(Some(FrameWindow::new(1.0, 2.0, 3.0, 4.0)));
    let layout = BatchLayout::for_count(5);
    let uniforms = MaskUniforms::new(&settings, (100.0, 50.0), &layout, 5);
    let bytes = uniforms.to_bytes();

    let float_at = |offset: usize| f32::from_ne_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]]);
    let uint_at = |offset: usize| u32::from_ne_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]]);

    assert!(bytes.len() == 48);
    assert!([float_at(0), float_at(4), float_at(8), float_at(12)] == [1.0, 2.0, 3.0, 4.0]);
    assert!([float_at(16), float_at(20)] == [100.0, 50.0]);
    assert!(float_at(24) == 5.0);
    assert!(float_at(28) == 0.01);
    assert!(float_at(32) == 1.8);
    assert!(uint_at(36) == 3);
    assert!(uint_at(40) == 5);
    assert!(uint_at(44) == 0);
}

#[test]
fn uniforms_default_to_whole_frame() {
    let layout = BatchLayout::for_count(1);
    let uniforms = MaskUniforms::new(&MaskSettings::default(), (640.0, 480.0), &layout, 1);

    assert!(uniforms.frame == [0.0, 0.0, 640.0, 480.0]);
    assert!(uniforms.batch_width == 1);
}

#[test]
fn annotate_numbers_lines() {
    let annotated = annotate_shader_source("fn a() {}\nfn b() {}", "");

    assert!(annotated == "   1: fn a() {}\n   2: fn b() {}");
}

#[test]
fn annotate_marks_error_column() {
    let source = "fn main() {\n    let x = ;\n}";
    let log = "error: expected expression\n  ┌─ wgsl:2:13\n";

    let annotated = annotate_shader_source(source, log);
    let lines = annotated.lines().collect::<Vec<_>>();

    assert!(lines.len() == 4);
    assert!(lines[1] == "   2:     let x = ;");
    assert!(lines[2] == "                  ^^^");
    assert!(lines[3] == "   3: }");
}

#[test]
fn annotate_naga_error() {
    let source = "fn main() {\n    let x = ;\n}\n";
    let err = naga::front::wgsl::parse_str(source).unwrap_err();
    let log = err.emit_to_string(source);

    let annotated = annotate_shader_source(source, &log);

    assert!(annotated.lines().nth(2).map(|line| line.trim_start().starts_with("^^^")) == Some(true), "{}\n{}", log, annotated);
}
