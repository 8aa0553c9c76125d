//! Error types for RegionKit

use thiserror::Error;

/// Main error type for RegionKit operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid raster dimensions: {rows}x{cols} does not hold {len} cells")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        len: usize,
    },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch {
        er: usize,
        ec: usize,
        ar: usize,
        ac: usize,
    },

    #[error("Invalid stride: {0} (must be positive)")]
    InvalidStride(i64),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for RegionKit operations
pub type Result<T> = std::result::Result<T, Error>;
