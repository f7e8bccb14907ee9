// File: crates/linechart-core/src/palette.rs
// Summary: Line colors and the round-robin slot allocator used for default series configs.

use crate::error::{ChartError, Result};

/// Straight (non-premultiplied) ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
}

/// Fixed, non-empty list of line colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `slot`, wrapping past the end.
    pub fn color(&self, slot: usize) -> Color {
        self.colors[slot % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::from_rgb(0x6b, 0xaf, 0xe6), // blue
                Color::from_rgb(0xe6, 0x8a, 0x3c), // orange
                Color::from_rgb(0x5b, 0xbd, 0x72), // green
                Color::from_rgb(0xd9, 0x5c, 0x5c), // red
                Color::from_rgb(0x9b, 0x7f, 0xd4), // purple
                Color::from_rgb(0xc2, 0x8e, 0x5a), // brown
                Color::from_rgb(0xe0, 0x7e, 0xc4), // pink
                Color::from_rgb(0x9e, 0x9e, 0x9e), // grey
                Color::from_rgb(0xc4, 0xc4, 0x4a), // olive
                Color::from_rgb(0x4a, 0xc4, 0xc4), // teal
                Color::from_rgb(0x3c, 0x6e, 0xe6), // deep blue
                Color::from_rgb(0xe6, 0xc0, 0x3c), // amber
            ],
        }
    }
}

/// Round-robin cursor over a palette. Owned by the registry; advances only when a
/// series is registered without an explicit config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaletteCursor {
    next: usize,
}

impl PaletteCursor {
    /// Hand out the current slot and advance, wrapping at `len`.
    pub fn allocate(&mut self, len: usize) -> usize {
        let slot = self.next;
        self.next = (self.next + 1) % len.max(1);
        slot
    }
}
