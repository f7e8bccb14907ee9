// File: crates/linechart-core/src/dash.rs
// Summary: Slope-aware dash subdivision of normalized segments with dash-phase carry-over.
// Notes:
// - Dash length is measured in raw units (x scaled by `x_to_y_ratio`) so dashes look the
//   same length whatever the slope, then mapped onto the normalized segment.
// - Phase is the fraction of one period (draw half, then skip half) already consumed.

use crate::path::NormalizedPath;
use crate::types::{Point, Sample, DASH_LENGTH, X_TO_Y_RATIO};

/// Segments needing more periods than this are drawn solid.
pub const MAX_PERIODS_PER_SEGMENT: f64 = 100_000.0;

/// Relative slack for landing on a segment end or a period boundary.
const EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashSegmenter {
    /// Nominal period in raw x units.
    pub dash_length: f64,
    pub x_to_y_ratio: f64,
}

impl Default for DashSegmenter {
    fn default() -> Self {
        Self { dash_length: DASH_LENGTH, x_to_y_ratio: X_TO_Y_RATIO }
    }
}

impl DashSegmenter {
    pub fn new(dash_length: f64, x_to_y_ratio: f64) -> Self {
        Self { dash_length, x_to_y_ratio }
    }

    /// Dash period along the normalized segment `from -> to` whose raw endpoints are
    /// `raw_from -> raw_to`. `None` when either length is zero or not finite.
    pub fn normalized_dash_length(
        &self,
        raw_from: Sample,
        raw_to: Sample,
        from: Point,
        to: Point,
    ) -> Option<f64> {
        let dx = raw_to.time as f64 - raw_from.time as f64;
        let dy = raw_to.value as f64 - raw_from.value as f64;

        let angle = dy.atan2(dx * self.x_to_y_ratio);
        let raw_dash = (self.dash_length * angle.cos())
            .hypot(self.dash_length * self.x_to_y_ratio * angle.sin());
        let raw_len = dx.hypot(dy);
        if !(raw_dash > 0.0 && raw_len > 0.0) {
            return None;
        }

        let periods = raw_len / raw_dash;
        let norm = from.distance(to) / periods;
        (norm.is_finite() && norm > 0.0).then_some(norm)
    }

    /// Append dashes from the path's current point to `to`, starting `phase` into the
    /// pattern. Returns the phase at `to` for the next segment.
    ///
    /// The pen always finishes exactly on `to`, either drawing or jumping there.
    pub fn segment(
        &self,
        path: &mut NormalizedPath,
        phase: f64,
        raw_from: Sample,
        raw_to: Sample,
        to: Point,
    ) -> f64 {
        let Some(from) = path.current_point() else {
            path.move_to(to);
            return phase;
        };

        if raw_from == raw_to {
            // A point; nothing to draw. Stacking offsets can still shift it.
            if from != to {
                path.move_to(to);
            }
            return phase;
        }

        let length = from.distance(to);
        if !(length > 0.0 && length.is_finite()) {
            return phase;
        }

        let Some(dash) = self.normalized_dash_length(raw_from, raw_to, from, to) else {
            path.line_to(to);
            return phase;
        };
        if length / dash > MAX_PERIODS_PER_SEGMENT {
            tracing::trace!(periods = length / dash, "dash period too small, drawing solid");
            path.line_to(to);
            return phase;
        }

        let half = dash * 0.5;
        let wrap_at = dash * (1.0 - EPSILON);
        let snap = length * EPSILON;
        let mut pos = phase.clamp(0.0, 1.0) * dash;
        if pos >= wrap_at {
            pos = 0.0;
        }

        let mut walked = 0.0;
        while walked < length {
            let drawing = pos < half;
            let boundary = if drawing { half } else { dash };
            let to_boundary = boundary - pos;
            let remaining = length - walked;

            let p = if to_boundary >= remaining - snap {
                walked = length;
                pos += remaining;
                to
            } else {
                walked += to_boundary;
                pos = boundary;
                from.lerp(to, walked / length)
            };

            if drawing {
                path.line_to(p);
            } else {
                path.move_to(p);
            }

            if pos >= wrap_at {
                pos = 0.0;
            }
        }

        pos / dash
    }
}
