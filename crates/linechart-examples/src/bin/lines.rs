// File: crates/linechart-examples/src/bin/lines.rs
// Summary: Minimal example that ticks a two-layer stacked chart and prints its geometry.

use std::rc::Rc;

use linechart_core::{LineChart, LongSeries, Palette, PathCommand, RangeHandle, RangedSeries, RenderConfig, SeriesId};

fn main() {
    // Two series sharing the time and value ranges
    let x = RangeHandle::new(0.0, 50.0);
    let y = RangeHandle::new(0.0, 100.0);
    let cpu = Rc::new(LongSeries::from_samples([(0, 10), (10, 25), (20, 20), (30, 40), (40, 35), (50, 30)]));
    let io = Rc::new(LongSeries::from_samples([(0, 5), (10, 10), (20, 30), (30, 15), (40, 20), (50, 25)]));

    let palette = Palette::default();
    let mut chart = LineChart::named("example");
    let stacked = RenderConfig::new(palette.color(0)).with_stacked(true);
    chart.register_series(SeriesId(1), RangedSeries::new(cpu, x.clone(), y.clone()), Some(stacked));
    // Filled band between the first line and this one
    chart.register_series(
        SeriesId(2),
        RangedSeries::new(io, x, y),
        Some(RenderConfig::new(palette.color(1)).with_stacked(true).with_filled(true)),
    );

    chart.request_marker(30);
    let stats = chart.tick();

    for (id, path) in chart.reporting_series().iter().zip(chart.paths()) {
        println!("series {id}: {} commands", path.len());
        for cmd in path.commands() {
            match cmd {
                PathCommand::MoveTo(p) => println!("  M {:.3} {:.3}", p.x, p.y),
                PathCommand::LineTo(p) => println!("  L {:.3} {:.3}", p.x, p.y),
            }
        }
    }
    for m in chart.markers() {
        println!("marker at {:.3} {:.3}", m.x, m.y);
    }
    println!("tick took {:?}", stats.elapsed);
}
