// File: crates/linechart-core/src/range.rs
// Summary: Value/time ranges with monotone target max, animation step, and shared identity handles.

use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Distance below which an animating max snaps onto its target.
const SNAP_EPSILON: f64 = 1e-6;

/// Axis range. `target_max` is where `max` is animated towards when data outgrows it.
/// Contract: `target_max` never decreases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    target_max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max, target_max: max }
    }

    pub fn target_max(&self) -> f64 {
        self.target_max
    }

    /// Current extent (`max - min`); may be zero or negative for degenerate ranges.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when `max <= min` or either bound is not finite.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        !(span > 0.0 && span.is_finite())
    }

    /// Fraction of `v` within `[min, max]`, or `None` for a degenerate range.
    #[inline]
    pub fn fraction(&self, v: f64) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some((v - self.min) / self.span())
    }

    /// Raise the target max to `value`. Lower values are ignored.
    /// Returns whether the target changed.
    pub fn raise_target_max(&mut self, value: f64) -> bool {
        if value > self.target_max {
            self.target_max = value;
            true
        } else {
            false
        }
    }

    /// Move `max` a `fraction` of the way towards `target_max`, snapping when close.
    /// Returns true while the range is still animating.
    pub fn animate(&mut self, fraction: f64) -> bool {
        let remaining = self.target_max - self.max;
        if remaining <= 0.0 {
            return false;
        }
        self.max += remaining * fraction.clamp(0.0, 1.0);
        if self.target_max - self.max <= SNAP_EPSILON * self.target_max.abs().max(1.0) {
            self.max = self.target_max;
        }
        self.max < self.target_max
    }

    /// Replace both bounds, e.g. to scroll a time window. The target follows `max`
    /// upwards but never drops.
    pub fn set(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
        self.raise_target_max(max);
    }
}

/// Shared, identity-compared handle to a [`Range`].
///
/// Several series may point at the same range (one Y axis, many lines). Equality and
/// hashing go by the underlying allocation, never by the range's current bounds.
#[derive(Clone, Debug)]
pub struct RangeHandle(Rc<RefCell<Range>>);

impl RangeHandle {
    pub fn new(min: f64, max: f64) -> Self {
        Self(Rc::new(RefCell::new(Range::new(min, max))))
    }

    /// Copy of the range as it is right now.
    pub fn get(&self) -> Range {
        *self.0.borrow()
    }

    pub fn min(&self) -> f64 {
        self.0.borrow().min
    }

    pub fn max(&self) -> f64 {
        self.0.borrow().max
    }

    pub fn target_max(&self) -> f64 {
        self.0.borrow().target_max
    }

    pub fn raise_target_max(&self, value: f64) -> bool {
        self.0.borrow_mut().raise_target_max(value)
    }

    pub fn animate(&self, fraction: f64) -> bool {
        self.0.borrow_mut().animate(fraction)
    }

    pub fn set(&self, min: f64, max: f64) {
        self.0.borrow_mut().set(min, max)
    }
}

impl From<Range> for RangeHandle {
    fn from(range: Range) -> Self {
        Self(Rc::new(RefCell::new(range)))
    }
}

impl PartialEq for RangeHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RangeHandle {}

impl Hash for RangeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state)
    }
}
