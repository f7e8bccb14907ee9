// File: crates/linechart-core/tests/autoscale.rs
// Purpose: Validate range aggregation over shared and separate value ranges.

use std::rc::Rc;

use linechart_core::{aggregate_ranges, LineChart, LongSeries, Range, RangeHandle, RangedSeries, SeriesId};

fn ranged(samples: &[(i64, i64)], x: &RangeHandle, y: &RangeHandle) -> RangedSeries {
    RangedSeries::new(Rc::new(LongSeries::from_samples(samples.iter().copied())), x.clone(), y.clone())
}

#[test]
fn data_above_current_max_raises_target() {
    let x = RangeHandle::new(0.0, 10.0);
    let y = RangeHandle::new(0.0, 100.0);
    let series = ranged(&[(0, 20), (5, 150), (10, 40)], &x, &y);

    let report = aggregate_ranges([&series]);
    assert_eq!(report.ranges, 1);
    assert_eq!(report.raised, 1);
    assert_eq!(y.target_max(), 150.0);
    // The current max only moves when the range is animated.
    assert_eq!(y.max(), 100.0);
}

#[test]
fn data_below_current_max_leaves_range_alone() {
    let x = RangeHandle::new(0.0, 10.0);
    let y = RangeHandle::new(0.0, 100.0);
    let series = ranged(&[(0, 20), (10, 80)], &x, &y);

    let report = aggregate_ranges([&series]);
    assert_eq!(report.raised, 0);
    assert_eq!(y.target_max(), 100.0);
    assert_eq!(y.max(), 100.0);
}

#[test]
fn shared_range_takes_max_across_its_series() {
    let x = RangeHandle::new(0.0, 10.0);
    let shared = RangeHandle::new(0.0, 100.0);
    let own = RangeHandle::new(0.0, 100.0);
    let mut chart = LineChart::new();
    chart.register_series(SeriesId(1), ranged(&[(0, 120)], &x, &shared), None);
    chart.register_series(SeriesId(2), ranged(&[(0, 180)], &x, &shared), None);
    chart.register_series(SeriesId(3), ranged(&[(0, 90)], &x, &own), None);

    let stats = chart.tick();
    assert_eq!(stats.ranges, 2);
    assert_eq!(stats.raised_ranges, 1);
    assert_eq!(shared.target_max(), 180.0);
    assert_eq!(own.target_max(), 100.0);
}

#[test]
fn equal_bounds_are_still_distinct_ranges() {
    let x = RangeHandle::new(0.0, 10.0);
    let a = RangeHandle::new(0.0, 100.0);
    let b = RangeHandle::new(0.0, 100.0);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());

    let report = aggregate_ranges([&ranged(&[(0, 300)], &x, &a), &ranged(&[(0, 200)], &x, &b)]);
    assert_eq!(report.ranges, 2);
    assert_eq!(a.target_max(), 300.0);
    assert_eq!(b.target_max(), 200.0);
}

#[test]
fn target_max_never_decreases_while_animating() {
    let x = RangeHandle::new(0.0, 10.0);
    let y = RangeHandle::new(0.0, 100.0);
    assert!(y.raise_target_max(200.0));

    // Above the current max but below the pending target.
    aggregate_ranges([&ranged(&[(0, 150)], &x, &y)]);
    assert_eq!(y.target_max(), 200.0);
}

#[test]
fn animation_walks_max_to_target() {
    let mut range = Range::new(0.0, 100.0);
    range.raise_target_max(200.0);

    assert!(range.animate(0.5));
    assert_eq!(range.max, 150.0);
    assert!(!range.animate(1.0));
    assert_eq!(range.max, 200.0);
    // Nothing left to do.
    assert!(!range.animate(0.5));
    assert_eq!(range.max, 200.0);
}

#[test]
fn set_scrolls_bounds_and_only_raises_target() {
    let x = RangeHandle::new(0.0, 100.0);
    let view = x.clone();

    x.set(50.0, 150.0);
    assert_eq!((view.min(), view.max(), view.target_max()), (50.0, 150.0, 150.0));

    // Shrinking the window keeps the target where it was.
    x.set(10.0, 60.0);
    assert_eq!((view.min(), view.max(), view.target_max()), (10.0, 60.0, 150.0));

    let mut r = Range::new(0.0, 10.0);
    r.set(0.0, 5.0);
    assert_eq!(r.target_max(), 10.0);
}

#[test]
fn scrolled_time_window_moves_the_path() {
    let x = RangeHandle::new(0.0, 100.0);
    let y = RangeHandle::new(0.0, 100.0);
    let mut chart = LineChart::new();
    chart.register_series(SeriesId(1), ranged(&[(50, 0), (100, 100)], &x, &y), None);
    chart.tick();
    assert_eq!(chart.paths()[0].points().next().map(|p| p.x), Some(0.5));

    x.set(50.0, 150.0);
    chart.tick();
    let xs: Vec<f64> = chart.paths()[0].points().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 0.5]);
}

#[test]
fn empty_series_are_ignored() {
    let x = RangeHandle::new(0.0, 10.0);
    let y = RangeHandle::new(0.0, 100.0);
    let report = aggregate_ranges([&ranged(&[], &x, &y)]);
    assert_eq!(report.ranges, 0);
    assert_eq!(y.target_max(), 100.0);
}
