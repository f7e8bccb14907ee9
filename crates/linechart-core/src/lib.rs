// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the series registry, tick engine, and path geometry types.

pub mod aggregate;
pub mod chart;
pub mod dash;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod palette;
pub mod path;
pub mod range;
pub mod registry;
pub mod series;
pub mod types;

pub use aggregate::{aggregate_ranges, AggregateReport};
pub use chart::{EngineOptions, LineChart, TickStats};
pub use dash::DashSegmenter;
pub use error::{ChartError, Result};
pub use geometry::{BuildReport, GeometryBuilder, StackLayer};
pub use marker::MarkedSet;
pub use palette::{Color, Palette};
pub use path::{GeometryBuffer, NormalizedPath, PathCommand};
pub use range::{Range, RangeHandle};
pub use registry::{RenderConfig, SeriesRegistry};
pub use series::{LongSeries, RangedSeries, SampleSource, SeriesId};
pub use types::{Point, Sample, DASH_LENGTH, X_TO_Y_RATIO};
