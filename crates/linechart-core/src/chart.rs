// File: crates/linechart-core/src/chart.rs
// Summary: LineChart engine; owns the registry and runs the two-phase tick (ranges, then geometry).
// Notes:
// - `tick` takes `&mut self`, so a tick can never overlap another or a registration
//   on the same chart.
// - Paths and markers are only valid until the next tick.

use std::time::{Duration, Instant};

use crate::aggregate::{aggregate_ranges, AggregateReport};
use crate::dash::DashSegmenter;
use crate::error::{ChartError, Result};
use crate::geometry::{BuildReport, GeometryBuilder};
use crate::marker::MarkedSet;
use crate::palette::{Color, Palette};
use crate::path::{GeometryBuffer, NormalizedPath};
use crate::registry::{RenderConfig, SeriesRegistry};
use crate::series::{RangedSeries, SeriesId};
use crate::types::{Point, DASH_LENGTH, X_TO_Y_RATIO};

/// Engine configuration.
#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Dash period in raw x units.
    pub dash_length: f64,
    /// Scale from raw x deltas to raw y deltas when measuring dashes.
    pub x_to_y_ratio: f64,
    /// Colors handed out to series registered without a config.
    pub palette: Palette,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { dash_length: DASH_LENGTH, x_to_y_ratio: X_TO_Y_RATIO, palette: Palette::default() }
    }
}

/// Diagnostics for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    pub series: usize,
    pub commands: usize,
    pub markers: usize,
    pub ranges: usize,
    pub raised_ranges: usize,
    /// Series axes whose range is degenerate; a shared flat range counts once per series.
    pub degenerate_ranges: usize,
    pub elapsed: Duration,
}

impl TickStats {
    fn from_reports(ranges: AggregateReport, build: BuildReport, elapsed: Duration) -> Self {
        Self {
            series: build.series,
            commands: build.commands,
            markers: build.markers,
            ranges: ranges.ranges,
            raised_ranges: ranges.raised,
            degenerate_ranges: build.degenerate_ranges,
            elapsed,
        }
    }
}

pub struct LineChart {
    name: Option<String>,
    registry: SeriesRegistry,
    dash: DashSegmenter,
    marked: MarkedSet,
    buffer: GeometryBuffer,
    markers: Vec<Point>,
    last_stats: TickStats,
}

impl LineChart {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn named(name: impl Into<String>) -> Self {
        let mut chart = Self::new();
        chart.name = Some(name.into());
        chart
    }

    pub fn with_options(opts: EngineOptions) -> Self {
        Self {
            name: None,
            registry: SeriesRegistry::with_palette(opts.palette),
            dash: DashSegmenter::new(opts.dash_length, opts.x_to_y_ratio),
            marked: MarkedSet::new(),
            buffer: GeometryBuffer::new(),
            markers: Vec::new(),
            last_stats: TickStats::default(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append a series (or replace one already registered under `id`, keeping its
    /// position). Without `config` the next palette color is assigned.
    pub fn register_series(
        &mut self,
        id: SeriesId,
        series: RangedSeries,
        config: Option<RenderConfig>,
    ) -> RenderConfig {
        self.registry.register(id, series, config)
    }

    /// Register each pair in order with default configs.
    pub fn register_series_batch(&mut self, batch: impl IntoIterator<Item = (SeriesId, RangedSeries)>) {
        self.registry.register_batch(batch)
    }

    /// Remove a series; its path disappears from the next tick's output.
    pub fn unregister_series(&mut self, id: SeriesId) -> Result<()> {
        self.registry.unregister(id).map(|_| ())
    }

    pub fn config_for(&self, id: SeriesId) -> Result<RenderConfig> {
        self.registry.config_of(id)
    }

    pub fn color_of(&self, id: SeriesId) -> Result<Color> {
        self.config_for(id).map(|c| c.color)
    }

    /// Registered ids in draw order, e.g. for a legend.
    pub fn reporting_series(&self) -> Vec<SeriesId> {
        self.registry.ids()
    }

    pub fn registry(&self) -> &SeriesRegistry {
        &self.registry
    }

    /// Ask for a marker at the sample whose timestamp is exactly `time` on the next tick.
    pub fn request_marker(&mut self, time: i64) {
        self.marked.mark(time);
    }

    /// Phase one: raise shared value ranges that the data has outgrown.
    pub fn update_ranges(&mut self) -> AggregateReport {
        aggregate_ranges(self.registry.iter().map(|(_, e)| &e.series))
    }

    /// Phase two: rebuild paths and markers from the current ranges, then drop the
    /// pending marker requests.
    pub fn build_geometry(&mut self) -> BuildReport {
        self.markers.clear();
        let builder = GeometryBuilder::new(&self.marked, &self.dash);
        let report = builder.build_all(&self.registry, &mut self.buffer, &mut self.markers);
        self.marked.clear();
        report
    }

    /// Run one full update: ranges first, then geometry.
    pub fn tick(&mut self) -> TickStats {
        let span = tracing::debug_span!("tick", chart = self.name.as_deref().unwrap_or("line_chart"));
        let _enter = span.enter();
        let start = Instant::now();

        let ranges = self.update_ranges();
        let build = self.build_geometry();
        let stats = TickStats::from_reports(ranges, build, start.elapsed());

        if stats.degenerate_ranges > 0 {
            tracing::warn!(count = stats.degenerate_ranges, "degenerate ranges pinned to 0.0");
        }
        tracing::debug!(
            series = stats.series,
            markers = stats.markers,
            raised = stats.raised_ranges,
            elapsed_ms = stats.elapsed.as_secs_f64() * 1000.0,
            "tick complete"
        );
        self.last_stats = stats;
        stats
    }

    /// Paths from the last tick, index-aligned with `reporting_series()`.
    pub fn paths(&self) -> &[NormalizedPath] {
        self.buffer.paths()
    }

    pub fn paths_snapshot(&self) -> Vec<NormalizedPath> {
        self.buffer.paths().to_vec()
    }

    /// Path built for `id` on the last tick.
    pub fn path_of(&self, id: SeriesId) -> Result<&NormalizedPath> {
        let slot = self
            .registry
            .iter()
            .position(|(sid, _)| sid == id)
            .ok_or(ChartError::UnknownSeries(id))?;
        self.buffer.get(slot).ok_or(ChartError::UnknownSeries(id))
    }

    pub fn markers(&self) -> &[Point] {
        &self.markers
    }

    pub fn marker_snapshot(&self) -> Vec<Point> {
        self.markers.clone()
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}
