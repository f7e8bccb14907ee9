// File: crates/linechart-core/src/aggregate.rs
// Summary: Per-tick range aggregation; raises shared value ranges' target max to fit observed data.

use ahash::RandomState;
use indexmap::IndexMap;

use crate::range::RangeHandle;
use crate::series::RangedSeries;

/// Outcome of one aggregation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AggregateReport {
    /// Distinct value ranges inspected.
    pub ranges: usize,
    /// Ranges whose target max was raised.
    pub raised: usize,
}

/// Group series by value-range identity and raise each range's target max to the
/// largest value observed across its series.
///
/// The comparison is against the range's current `max`, not its target: a range
/// already animating upward is left alone unless data outgrows where it is now.
/// Ranges are never lowered.
pub fn aggregate_ranges<'a>(series: impl IntoIterator<Item = &'a RangedSeries>) -> AggregateReport {
    let mut best: IndexMap<RangeHandle, i64, RandomState> = IndexMap::default();
    for s in series {
        let Some(observed) = s.source.max_value() else { continue };
        best.entry(s.y_range.clone())
            .and_modify(|m| *m = (*m).max(observed))
            .or_insert(observed);
    }

    let mut report = AggregateReport { ranges: best.len(), raised: 0 };
    for (range, observed) in best {
        let observed = observed as f64;
        let current = range.max();
        if observed > current && range.raise_target_max(observed) {
            tracing::trace!(current, target = observed, "raised range target max");
            report.raised += 1;
        }
    }
    report
}
