// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (normalized points, dash defaults).

/// Nominal dash length in raw x units (e.g. 100ms == 1 dash).
pub const DASH_LENGTH: f64 = 100.0;

/// Scale applied to raw x deltas before measuring dashes against raw y deltas.
/// Time is usually in ms while values are in much smaller units.
pub const X_TO_Y_RATIO: f64 = 0.01;

/// Point in the unit square. `x` is the time fraction, `y` is `1 - value fraction`
/// so larger values sit closer to the top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point `t` of the way from `self` towards `other`.
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

/// Raw sample as read from a sample source: `(timestamp, value)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sample {
    pub time: i64,
    pub value: i64,
}

impl Sample {
    pub const fn new(time: i64, value: i64) -> Self {
        Self { time, value }
    }
}
