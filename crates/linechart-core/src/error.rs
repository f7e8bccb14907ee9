// File: crates/linechart-core/src/error.rs
// Summary: Error type for invalid API usage (unknown series, unusable palette).

use crate::series::SeriesId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("series {0} is not registered")]
    UnknownSeries(SeriesId),
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, ChartError>;
