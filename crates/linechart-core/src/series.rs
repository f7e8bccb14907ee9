// File: crates/linechart-core/src/series.rs
// Summary: Series identity, the sample-source interface, and an append-only i64 sample store.
// Notes:
// - Sample stores are owned by the data producer; the chart only reads them through
//   `SampleSource` once per tick.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::range::RangeHandle;
use crate::types::Sample;

/// Opaque, stable identifier of one registered series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub u64);

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read side of a time-ordered, append-only sample sequence.
///
/// `time_at`/`value_at` are only called with `i < len()`. `len()` may grow between
/// ticks but never shrinks.
pub trait SampleSource {
    fn len(&self) -> usize;
    fn time_at(&self, i: usize) -> i64;
    fn value_at(&self, i: usize) -> i64;
    /// Largest value observed so far, `None` while empty.
    fn max_value(&self) -> Option<i64>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sample_at(&self, i: usize) -> Sample {
        Sample::new(self.time_at(i), self.value_at(i))
    }
}

/// Append-only `(timestamp, value)` store with a running max.
///
/// Writes go through `&self` so the producer and the chart can share one `Rc`.
#[derive(Debug, Default)]
pub struct LongSeries {
    samples: RefCell<Vec<Sample>>,
    max: Cell<Option<i64>>,
}

impl LongSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_samples(samples: impl IntoIterator<Item = (i64, i64)>) -> Self {
        let series = Self::new();
        for (t, v) in samples {
            series.push(t, v);
        }
        series
    }

    /// Append one sample. Timestamps must not go backwards.
    pub fn push(&self, time: i64, value: i64) {
        let mut samples = self.samples.borrow_mut();
        debug_assert!(
            samples.last().map_or(true, |last| last.time <= time),
            "samples must be appended in time order"
        );
        samples.push(Sample::new(time, value));
        self.max.set(Some(self.max.get().map_or(value, |m| m.max(value))));
    }
}

impl SampleSource for LongSeries {
    fn len(&self) -> usize {
        self.samples.borrow().len()
    }

    fn time_at(&self, i: usize) -> i64 {
        self.samples.borrow()[i].time
    }

    fn value_at(&self, i: usize) -> i64 {
        self.samples.borrow()[i].value
    }

    fn max_value(&self) -> Option<i64> {
        self.max.get()
    }
}

/// A sample source plotted against a time range and a value range.
/// Ranges may be shared between several series.
#[derive(Clone)]
pub struct RangedSeries {
    pub source: Rc<dyn SampleSource>,
    pub x_range: RangeHandle,
    pub y_range: RangeHandle,
}

impl RangedSeries {
    pub fn new(source: Rc<dyn SampleSource>, x_range: RangeHandle, y_range: RangeHandle) -> Self {
        Self { source, x_range, y_range }
    }
}

impl fmt::Debug for RangedSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangedSeries")
            .field("len", &self.source.len())
            .field("x_range", &self.x_range.get())
            .field("y_range", &self.y_range.get())
            .finish()
    }
}
