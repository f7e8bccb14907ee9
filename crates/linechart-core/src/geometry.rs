// File: crates/linechart-core/src/geometry.rs
// Summary: Per-tick path construction: normalization, stacking, stepping, dashing, fills, markers.

use crate::dash::DashSegmenter;
use crate::marker::MarkedSet;
use crate::path::{GeometryBuffer, NormalizedPath};
use crate::registry::{RenderConfig, SeriesRegistry};
use crate::series::RangedSeries;
use crate::types::{Point, Sample};

/// What a stacked series leaves for the next stacked series above it.
///
/// `y` holds cumulative value fractions per sample index, so each layer already
/// includes every stacked layer below it. `outline` is the series' top edge, used
/// to close the fill band of the layer above.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackLayer {
    pub y: Vec<f64>,
    pub outline: Vec<Point>,
}

impl StackLayer {
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}

/// Counters gathered while building one tick's geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub series: usize,
    pub commands: usize,
    pub markers: usize,
    /// Time or value ranges with `max <= min`, counted once per series axis that uses
    /// one. Their coordinates are pinned to 0.0.
    pub degenerate_ranges: usize,
}

/// Shared inputs of one geometry pass.
pub struct GeometryBuilder<'a> {
    pub marked: &'a MarkedSet,
    pub dash: &'a DashSegmenter,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new(marked: &'a MarkedSet, dash: &'a DashSegmenter) -> Self {
        Self { marked, dash }
    }

    /// Rebuild every series' path in registry order into `buffer`, appending marker
    /// positions to `markers`. The buffer ends up exactly as long as the registry.
    pub fn build_all(
        &self,
        registry: &SeriesRegistry,
        buffer: &mut GeometryBuffer,
        markers: &mut Vec<Point>,
    ) -> BuildReport {
        let mut report = BuildReport::default();

        registry.iter().enumerate().fold(None::<StackLayer>, |below, (slot, (id, entry))| {
            let path = buffer.slot_mut(slot);
            let (layer, degenerate) =
                self.build_series(&entry.series, &entry.config, below.as_ref(), path, markers);

            tracing::trace!(series = %id, commands = path.len(), stacked = entry.config.stacked, "built path");
            report.series += 1;
            report.commands += path.len();
            report.degenerate_ranges += degenerate;

            // Only stacked series feed the chain; an empty one leaves it untouched.
            if entry.config.stacked && !layer.is_empty() {
                Some(layer)
            } else {
                below
            }
        });

        buffer.truncate(registry.len());
        report.markers = markers.len();
        report
    }

    /// Build one series into `path`. Returns its stack layer and how many of its two
    /// ranges were degenerate.
    pub fn build_series(
        &self,
        series: &RangedSeries,
        config: &RenderConfig,
        below: Option<&StackLayer>,
        path: &mut NormalizedPath,
        markers: &mut Vec<Point>,
    ) -> (StackLayer, usize) {
        let x_range = series.x_range.get();
        let y_range = series.y_range.get();
        let degenerate = x_range.is_degenerate() as usize + y_range.is_degenerate() as usize;

        let source = &series.source;
        let count = source.len();
        let mut layer = StackLayer { y: Vec::with_capacity(count), outline: Vec::with_capacity(count) };
        let offsets = below.filter(|_| config.stacked).map(|l| l.y.as_slice()).unwrap_or(&[]);

        let mut phase = 0.0;
        let mut first_x = 0.0;
        let mut prev = Sample::new(0, 0);

        for i in 0..count {
            let sample = source.sample_at(i);
            let xd = x_range.fraction(sample.time as f64).unwrap_or(0.0);
            let mut yd = y_range.fraction(sample.value as f64).unwrap_or(0.0);
            // The layer below may still be shorter; extra samples get no offset.
            if let Some(offset) = offsets.get(i) {
                yd += offset;
            }
            layer.y.push(yd);

            let target = Point::new(xd, 1.0 - yd);
            if i == 0 {
                let start = Point::new(xd, 1.0);
                path.move_to(start);
                layer.outline.push(start);
                first_x = xd;
            } else {
                let pen_y = path.current_point().map_or(1.0, |p| p.y);
                let corner = Point::new(xd, pen_y);
                if config.draws_dashes() {
                    let mut from = prev;
                    if config.stepped {
                        let hop = Sample::new(sample.time, prev.value);
                        phase = self.dash.segment(path, phase, from, hop, corner);
                        layer.outline.push(corner);
                        from = hop;
                    }
                    phase = self.dash.segment(path, phase, from, sample, target);
                } else {
                    if config.stepped {
                        path.line_to(corner);
                        layer.outline.push(corner);
                    }
                    path.line_to(target);
                }
                layer.outline.push(target);
            }

            if self.marked.contains(sample.time) {
                markers.push(target);
            }
            prev = sample;
        }

        if config.filled && count > 0 {
            close_fill(path, config, below, first_x);
        }

        (layer, degenerate)
    }
}

/// Close a filled series: against the stacked layer below when there is one,
/// otherwise straight down to the baseline and back to the first x.
fn close_fill(path: &mut NormalizedPath, config: &RenderConfig, below: Option<&StackLayer>, first_x: f64) {
    match below.filter(|l| config.stacked && !l.outline.is_empty()) {
        Some(layer) => {
            for p in layer.outline.iter().rev() {
                path.line_to(*p);
            }
        }
        None => {
            let last_x = path.current_point().map_or(first_x, |p| p.x);
            path.line_to(Point::new(last_x, 1.0));
            path.line_to(Point::new(first_x, 1.0));
        }
    }
}
