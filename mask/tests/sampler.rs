/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

mod test_frames;

use test_frames::*;

use flo_mask::*;

fn first_run(frame: &ReferenceFrame, line: &CandidateLine, settings: &MaskSettings) -> Option<VisibleRun> {
    VisibilitySampler::new(frame, settings).first_visible_run(line)
}

#[test]
fn segment_count() {
    assert!(sample_segment_count(100.0, 5.0) == 21.0);
    assert!(sample_segment_count(4.0, 5.0) == 2.0);
    assert!(sample_segment_count(0.0, 5.0) == 2.0);
    assert!(sample_segment_count(10.0, 5.0) == 3.0);
}

#[test]
fn offsets_for_horizontal_line() {
    let offsets = SampleOffsets::for_line(Coord2(100.0, 0.0), 100.0, 1.8);
    let diag = 1.8 * std::f64::consts::FRAC_1_SQRT_2;

    assert_close(offsets.normal, Coord2(0.0, 1.8), 1e-9);
    assert_close(offsets.diagonal1, Coord2(diag, diag), 1e-9);
    assert_close(offsets.diagonal2, Coord2(-diag, diag), 1e-9);
}

#[test]
fn sample_points_order() {
    let offsets = SampleOffsets {
        normal: Coord2(0.0, 1.0),
        diagonal1: Coord2(1.0, 1.0),
        diagonal2: Coord2(-1.0, 1.0),
    };

    let points = offsets.sample_points(Coord2(10.0, 10.0));

    assert!(points == [
        Coord2(10.0, 10.0),
        Coord2(10.0, 11.0),
        Coord2(10.0, 9.0),
        Coord2(11.0, 11.0),
        Coord2(9.0, 9.0),
        Coord2(9.0, 11.0),
        Coord2(11.0, 9.0),
    ]);
}

#[test]
fn fully_visible_diagonal_line() {
    let frame = solid_frame(100, 100, RED);
    let line = CandidateLine::new(Coord2(10.0, 10.0), Coord2(90.0, 90.0), RED, BLUE);

    let run = first_run(&frame, &line, &MaskSettings::default()).unwrap();

    assert_close(run.first, Coord2(10.0, 10.0), 1e-9);
    assert_close(run.last, Coord2(90.0, 90.0), 1e-9);
}

#[test]
fn second_color_also_matches() {
    let frame = solid_frame(100, 100, BLUE);
    let line = CandidateLine::new(Coord2(10.0, 10.0), Coord2(90.0, 90.0), RED, BLUE);

    assert!(first_run(&frame, &line, &MaskSettings::default()).is_some());
}

#[test]
fn colors_not_in_frame() {
    let frame = solid_frame(100, 100, RED);
    let line = CandidateLine::new(Coord2(10.0, 10.0), Coord2(90.0, 90.0), GREEN, BLUE);

    assert!(first_run(&frame, &line, &MaskSettings::default()).is_none());
}

#[test]
fn zero_length_line() {
    let frame = solid_frame(100, 100, RED);
    let line = CandidateLine::new(Coord2(50.0, 50.0), Coord2(50.0, 50.0), RED, RED);

    assert!(first_run(&frame, &line, &MaskSettings::default()).is_none());
}

#[test]
fn minimum_length_filter() {
    let frame = solid_frame(100, 100, RED);
    let line = horizontal_line(20.0, 26.0, 50.0, RED, BLUE);

    for segment_length in [1.0, 2.0, 5.0, 5.99] {
        let settings = MaskSettings::default().with_segment_length(segment_length);
        let run = first_run(&frame, &line, &settings);

        assert!(run.is_some(), "Segment length {}", segment_length);
        assert!(run.unwrap().length() > segment_length);
    }

    for segment_length in [6.0, 7.0, 10.0, 100.0] {
        let settings = MaskSettings::default().with_segment_length(segment_length);

        assert!(first_run(&frame, &line, &settings).is_none(), "Segment length {}", segment_length);
    }
}

#[test]
fn line_exactly_segment_length_is_not_reported() {
    let frame = solid_frame(100, 100, RED);
    let line = horizontal_line(10.0, 15.0, 50.0, RED, RED);

    assert!(first_run(&frame, &line, &MaskSettings::default()).is_none());
}

#[test]
fn stops_at_first_long_run() {
    // Two black bars cover 30..50 and 70..80: the first pass should only find the run before the first bar
    let frame = frame_with_rects(100, 100, RED, &[(30, 0, 50, 100, BLACK), (70, 0, 80, 100, BLACK)]);
    let line = horizontal_line(0.0, 100.0, 50.0, RED, BLUE);

    let run = first_run(&frame, &line, &MaskSettings::default()).unwrap();

    assert_close(run.first, Coord2(0.0, 50.0), 1e-9);
    assert_close(run.last, Coord2(600.0 / 21.0, 50.0), 1e-9);
}

#[test]
fn short_runs_are_skipped() {
    // A 3 pixel red section is too short to report, so the scan carries on to the long section after it
    let frame = frame_with_rects(100, 100, BLACK, &[(10, 0, 13, 100, RED), (40, 0, 90, 100, RED)]);
    let line = horizontal_line(0.0, 100.0, 50.0, RED, BLUE);

    let run = first_run(&frame, &line, &MaskSettings::default()).unwrap();

    // Sample 19 (at 90.48) is visible because its diagonal offsets reach back to x=89.2
    assert_close(run.first, Coord2(900.0 / 21.0, 50.0), 1e-9);
    assert_close(run.last, Coord2(1900.0 / 21.0, 50.0), 1e-9);
}

#[test]
fn offsets_see_anti_aliased_fringe() {
    // The line is at y=50 but the red is drawn just below it
    let frame = frame_with_rects(100, 100, BLACK, &[(0, 51, 100, 53, RED)]);
    let line = horizontal_line(10.0, 90.0, 50.0, RED, BLUE);

    let run = first_run(&frame, &line, &MaskSettings::default()).unwrap();

    assert_close(run.first, Coord2(10.0, 50.0), 1e-9);
    assert_close(run.last, Coord2(90.0, 50.0), 1e-9);
}

#[test]
fn offsets_do_not_reach_distant_colors() {
    let frame = frame_with_rects(100, 100, BLACK, &[(0, 53, 100, 60, RED)]);
    let line = horizontal_line(10.0, 90.0, 50.0, RED, BLUE);

    assert!(first_run(&frame, &line, &MaskSettings::default()).is_none());
}

#[test]
fn larger_offset_scale_reaches_further() {
    let frame = frame_with_rects(100, 100, BLACK, &[(0, 53, 100, 60, RED)]);
    let line = horizontal_line(10.0, 90.0, 50.0, RED, BLUE);
    let settings = MaskSettings::default().with_offset_scale(4.0);

    assert!(first_run(&frame, &line, &settings).is_some());
}

#[test]
fn frame_window_restricts_samples() {
    let frame = solid_frame(100, 100, RED);
    let line = horizontal_line(0.0, 100.0, 50.0, RED, BLUE);
    let settings = MaskSettings::default().with_frame(Some(FrameWindow::new(20.0, 0.0, 30.0, 100.0)));

    let run = first_run(&frame, &line, &settings).unwrap();

    assert_close(run.first, Coord2(500.0 / 21.0, 50.0), 1e-9);
    assert_close(run.last, Coord2(1000.0 / 21.0, 50.0), 1e-9);
}

#[test]
fn line_outside_frame_window() {
    let frame = solid_frame(100, 100, RED);
    let line = horizontal_line(0.0, 100.0, 50.0, RED, BLUE);
    let settings = MaskSettings::default().with_frame(Some(FrameWindow::new(0.0, 0.0, 100.0, 40.0)));

    assert!(first_run(&frame, &line, &settings).is_none());
}

///
/// Frame that's red on the left and blue on the right, without any pixel buffer
///
struct SplitFrame;

impl FrameReader for SplitFrame {
    fn size(&self) -> (f64, f64) {
        (100.0, 100.0)
    }

    fn color_at(&self, pos: Coord2) -> [f32; 3] {
        if pos.x() < 50.0 {
            [1.0, 0.0, 0.0]
        } else {
            [0.0, 0.0, 1.0]
        }
    }
}

#[test]
fn sample_custom_frame_reader() {
    let line = horizontal_line(0.0, 100.0, 20.0, RED, GREEN);
    let run = VisibilitySampler::new(&SplitFrame, &MaskSettings::default()).first_visible_run(&line).unwrap();

    assert_close(run.first, Coord2(0.0, 20.0), 1e-9);
    assert_close(run.last, Coord2(1000.0 / 21.0, 20.0), 1e-9);
}
