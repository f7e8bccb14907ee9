// File: crates/linechart-core/tests/dash.rs
// Purpose: Dash subdivision, phase carry-over between segments, and degenerate-length guards.

use linechart_core::{DashSegmenter, NormalizedPath, PathCommand, Point, Sample};

fn path_from(start: Point) -> NormalizedPath {
    let mut path = NormalizedPath::new();
    path.move_to(start);
    path
}

#[test]
fn horizontal_dash_length_matches_nominal_period() {
    let dash = DashSegmenter::default();
    // 1000 raw units along x at ratio 0.01 and length 100 gives 10 periods over 0.5.
    let len = dash
        .normalized_dash_length(Sample::new(0, 0), Sample::new(1000, 0), Point::new(0.0, 0.5), Point::new(0.5, 0.5))
        .unwrap();
    assert!((len - 0.05).abs() < 1e-12);
}

#[test]
fn vertical_dash_length_is_scaled_by_ratio() {
    let dash = DashSegmenter::default();
    // Vertically a period is 100 * 0.01 = 1 raw value unit, so 100 periods.
    let len = dash
        .normalized_dash_length(Sample::new(0, 0), Sample::new(0, 100), Point::new(0.0, 1.0), Point::new(0.0, 0.0))
        .unwrap();
    assert!((len - 0.01).abs() < 1e-9);
}

#[test]
fn dashes_alternate_draw_and_skip() {
    let dash = DashSegmenter::default();
    let mut path = path_from(Point::new(0.0, 0.5));
    let phase = dash.segment(&mut path, 0.0, Sample::new(0, 0), Sample::new(1000, 0), Point::new(0.5, 0.5));

    let cmds = &path.commands()[1..];
    assert_eq!(cmds.len(), 20);
    for (i, cmd) in cmds.iter().enumerate() {
        assert_eq!(cmd.is_move(), i % 2 == 1, "command {i}: {cmd:?}");
    }
    assert!((cmds[0].point().x - 0.025).abs() < 1e-12);
    assert_eq!(path.current_point(), Some(Point::new(0.5, 0.5)));
    assert!((path.drawn_length() - 0.25).abs() < 1e-9);
    assert!(phase < 1e-9 || phase > 1.0 - 1e-9);
}

#[test]
fn phase_carries_across_segments_without_gap_or_overlap() {
    let dash = DashSegmenter::default();
    let a = Sample::new(0, 0);
    let b = Sample::new(1025, 0);
    let c = Sample::new(2000, 0);
    let (pa, pb, pc) = (Point::new(0.0, 0.5), Point::new(1025.0 / 2000.0, 0.5), Point::new(1.0, 0.5));

    let mut whole = path_from(pa);
    dash.segment(&mut whole, 0.0, a, c, pc);

    let mut split = path_from(pa);
    let mid_phase = dash.segment(&mut split, 0.0, a, b, pb);
    // 10.25 periods in: a quarter of the way into a dash, still drawing.
    assert!((mid_phase - 0.25).abs() < 1e-9);
    assert_eq!(split.current_point(), Some(pb));
    let resume = split.len();
    dash.segment(&mut split, mid_phase, b, c, pc);

    // Drawing continues straight out of the shared endpoint.
    assert!(matches!(split.commands()[resume], PathCommand::LineTo(_)));
    assert_eq!(split.current_point(), Some(pc));
    assert!((whole.drawn_length() - 0.5).abs() < 1e-9);
    assert!((split.drawn_length() - whole.drawn_length()).abs() < 1e-9);
}

#[test]
fn starting_in_skip_half_moves_first() {
    let dash = DashSegmenter::default();
    let mut path = path_from(Point::new(0.0, 0.5));
    dash.segment(&mut path, 0.75, Sample::new(0, 0), Sample::new(1000, 0), Point::new(0.5, 0.5));

    let first = path.commands()[1];
    assert!(first.is_move());
    assert!((first.point().x - 0.0125).abs() < 1e-12);
    assert!(matches!(path.commands()[2], PathCommand::LineTo(_)));
}

#[test]
fn identical_raw_points_are_a_no_op() {
    let dash = DashSegmenter::default();
    let start = Point::new(0.2, 0.4);
    let mut path = path_from(start);
    let phase = dash.segment(&mut path, 0.3, Sample::new(5, 5), Sample::new(5, 5), start);
    assert_eq!(phase, 0.3);
    assert_eq!(path.len(), 1);
}

#[test]
fn zero_dash_length_draws_solid() {
    let dash = DashSegmenter::new(0.0, 0.01);
    let mut path = path_from(Point::new(0.0, 1.0));
    let phase = dash.segment(&mut path, 0.4, Sample::new(0, 0), Sample::new(10, 10), Point::new(1.0, 0.0));
    assert_eq!(phase, 0.4);
    assert_eq!(path.commands()[1..], [PathCommand::LineTo(Point::new(1.0, 0.0))]);
}

#[test]
fn zero_normalized_length_terminates() {
    let dash = DashSegmenter::default();
    let start = Point::new(0.0, 0.0);
    let mut path = path_from(start);
    // Raw points differ but both land on the same normalized point (degenerate range).
    let phase = dash.segment(&mut path, 0.1, Sample::new(0, 0), Sample::new(10, 0), start);
    assert_eq!(phase, 0.1);
    assert_eq!(path.len(), 1);
}

#[test]
fn excessively_fine_dashes_fall_back_to_solid() {
    let dash = DashSegmenter::new(1e-6, 0.01);
    let mut path = path_from(Point::new(0.0, 0.5));
    dash.segment(&mut path, 0.0, Sample::new(0, 0), Sample::new(1_000_000, 0), Point::new(1.0, 0.5));
    assert_eq!(path.len(), 2);
    assert!(!path.commands()[1].is_move());
}
