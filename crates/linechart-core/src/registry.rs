// File: crates/linechart-core/src/registry.rs
// Summary: Ordered series registry with per-series render configuration and palette allocation.
// Notes:
// - Iteration order is registration order; stacking and draw order follow it.
// - Re-registering an id keeps its position and replaces its series/config.

use indexmap::IndexMap;

use crate::error::{ChartError, Result};
use crate::palette::{Color, Palette, PaletteCursor};
use crate::series::{RangedSeries, SeriesId};

/// How one series is turned into geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub color: Color,
    /// Palette slot the color came from; `None` for caller-supplied colors.
    pub slot: Option<usize>,
    pub filled: bool,
    pub stacked: bool,
    pub stepped: bool,
    pub dashed: bool,
}

impl RenderConfig {
    /// Plain line in `color` with no flags set.
    pub const fn new(color: Color) -> Self {
        Self { color, slot: None, filled: false, stacked: false, stepped: false, dashed: false }
    }

    pub const fn from_slot(palette_color: Color, slot: usize) -> Self {
        let mut c = Self::new(palette_color);
        c.slot = Some(slot);
        c
    }

    pub const fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub const fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub const fn with_stepped(mut self, stepped: bool) -> Self {
        self.stepped = stepped;
        self
    }

    pub const fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    /// Dashes are only drawn on open outlines; fills need a continuous boundary.
    #[inline]
    pub const fn draws_dashes(&self) -> bool {
        self.dashed && !self.filled
    }
}

/// A registered series and its configuration.
#[derive(Clone, Debug)]
pub struct SeriesEntry {
    pub series: RangedSeries,
    pub config: RenderConfig,
}

#[derive(Debug, Default)]
pub struct SeriesRegistry {
    entries: IndexMap<SeriesId, SeriesEntry>,
    palette: Palette,
    cursor: PaletteCursor,
}

impl SeriesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self { entries: IndexMap::new(), palette, cursor: PaletteCursor::default() }
    }

    /// Register `series` under `id`. Without a config the next palette color is assigned.
    /// Returns the config now in effect.
    pub fn register(
        &mut self,
        id: SeriesId,
        series: RangedSeries,
        config: Option<RenderConfig>,
    ) -> RenderConfig {
        let config = config.unwrap_or_else(|| {
            let slot = self.cursor.allocate(self.palette.len());
            RenderConfig::from_slot(self.palette.color(slot), slot)
        });
        if self.entries.insert(id, SeriesEntry { series, config }).is_some() {
            tracing::debug!("re-registered series {id}");
        }
        config
    }

    /// Register every pair in order with default configs.
    pub fn register_batch(&mut self, batch: impl IntoIterator<Item = (SeriesId, RangedSeries)>) {
        for (id, series) in batch {
            self.register(id, series, None);
        }
    }

    pub fn config_of(&self, id: SeriesId) -> Result<RenderConfig> {
        self.entries.get(&id).map(|e| e.config).ok_or(ChartError::UnknownSeries(id))
    }

    /// Remove `id`, keeping the relative order of the remaining series.
    pub fn unregister(&mut self, id: SeriesId) -> Result<SeriesEntry> {
        self.entries.shift_remove(&id).ok_or(ChartError::UnknownSeries(id))
    }

    pub fn contains(&self, id: SeriesId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in registration order.
    pub fn ids(&self) -> Vec<SeriesId> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeriesId, &SeriesEntry)> + '_ {
        self.entries.iter().map(|(id, e)| (*id, e))
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
