// File: crates/linechart-core/tests/snapshot.rs
// Purpose: Golden snapshot of a mixed stacked/stepped/filled chart with bless flow.
// Behavior:
// - Ticks a deterministic chart and dumps its paths and markers as text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text exactly.
// - Else, logs a note and returns (skips) without failing to ease first run.

use std::fmt::Write as _;
use std::rc::Rc;

use linechart_core::{Color, LineChart, LongSeries, PathCommand, RangeHandle, RangedSeries, RenderConfig, SeriesId};

const TIMES: [i64; 5] = [0, 10, 20, 30, 40];

fn ranged(values: [i64; 5], x: &RangeHandle, y: &RangeHandle) -> RangedSeries {
    let data = LongSeries::from_samples(TIMES.iter().copied().zip(values));
    RangedSeries::new(Rc::new(data), x.clone(), y.clone())
}

fn render_text() -> String {
    let x = RangeHandle::new(0.0, 40.0);
    let y = RangeHandle::new(0.0, 100.0);
    let base = RenderConfig::new(Color::from_rgb(0x40, 0xa0, 0xff));

    let mut chart = LineChart::named("snapshot");
    chart.register_series(SeriesId(1), ranged([10, 20, 10, 30, 20], &x, &y), Some(base.with_stacked(true).with_filled(true)));
    chart.register_series(
        SeriesId(2),
        ranged([20, 10, 20, 10, 20], &x, &y),
        Some(base.with_stacked(true).with_filled(true).with_stepped(true)),
    );
    chart.register_series(SeriesId(3), ranged([80, 60, 70, 90, 100], &x, &y), Some(base));
    chart.request_marker(20);
    chart.tick();

    let mut out = String::new();
    for (i, path) in chart.paths().iter().enumerate() {
        writeln!(out, "path {i}").unwrap();
        for cmd in path.commands() {
            let (tag, p) = match cmd {
                PathCommand::MoveTo(p) => ("M", p),
                PathCommand::LineTo(p) => ("L", p),
            };
            writeln!(out, "{tag} {:.4} {:.4}", p.x, p.y).unwrap();
        }
    }
    for p in chart.markers() {
        writeln!(out, "marker {:.4} {:.4}", p.x, p.y).unwrap();
    }
    out
}

#[test]
fn golden_stacked_chart() {
    let text = render_text();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("stacked_chart.txt");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), text.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(text, want, "geometry differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
