// File: crates/linechart-core/src/path.rs
// Summary: Renderer-agnostic normalized paths and the per-series output buffer reused across ticks.

use crate::types::Point;

/// One pen instruction in unit-square coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and start a new subpath at the point.
    MoveTo(Point),
    /// Draw a straight segment from the current point.
    LineTo(Point),
}

impl PathCommand {
    #[inline]
    pub fn point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, PathCommand::MoveTo(_))
    }
}

/// Ordered pen commands for one series, x in `[0,1]` time fraction, y flipped so
/// that `0.0` is the top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedPath {
    commands: Vec<PathCommand>,
}

impl NormalizedPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Pen position after the last command.
    pub fn current_point(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::point)
    }

    /// Drop all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Every command's point in order, regardless of pen state.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().map(PathCommand::point)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Total length of the drawn (`LineTo`) segments.
    pub fn drawn_length(&self) -> f64 {
        let mut total = 0.0;
        let mut pen: Option<Point> = None;
        for cmd in &self.commands {
            if let (PathCommand::LineTo(p), Some(prev)) = (cmd, pen) {
                total += prev.distance(*p);
            }
            pen = Some(cmd.point());
        }
        total
    }
}

/// Output paths, one per registered series and index-aligned with registry order.
///
/// Slots are addressed by position and truncated to the series count every tick, so
/// allocations survive across ticks without tying a buffer to a particular series.
#[derive(Clone, Debug, Default)]
pub struct GeometryBuffer {
    paths: Vec<NormalizedPath>,
}

impl GeometryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cleared path for `slot`, growing the buffer by one if `slot == len`.
    pub fn slot_mut(&mut self, slot: usize) -> &mut NormalizedPath {
        debug_assert!(slot <= self.paths.len(), "slots are filled in order");
        if slot == self.paths.len() {
            self.paths.push(NormalizedPath::new());
        }
        let path = &mut self.paths[slot];
        path.clear();
        path
    }

    pub fn truncate(&mut self, len: usize) {
        self.paths.truncate(len);
    }

    pub fn paths(&self) -> &[NormalizedPath] {
        &self.paths
    }

    pub fn get(&self, slot: usize) -> Option<&NormalizedPath> {
        self.paths.get(slot)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
