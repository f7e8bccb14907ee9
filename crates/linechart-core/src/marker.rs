// File: crates/linechart-core/src/marker.rs
// Summary: Timestamps requested for marker annotation; consumed and cleared once per tick.

use ahash::AHashSet;

/// Set of timestamps to annotate on the next tick. Only exact sample timestamps
/// produce markers; there is no nearest-sample matching.
#[derive(Clone, Debug, Default)]
pub struct MarkedSet {
    times: AHashSet<i64>,
}

impl MarkedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a marker at `time`. Duplicates collapse.
    pub fn mark(&mut self, time: i64) {
        self.times.insert(time);
    }

    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        self.times.contains(&time)
    }

    pub fn clear(&mut self) {
        self.times.clear();
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
