//! Error types for feasgen-core
//!
//! Provides a unified error type for the packed boolean grid. Each variant
//! captures enough context for diagnostics without exposing internal
//! implementation details.

use thiserror::Error;

/// feasgen-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Two grids that must match in size do not
    #[error("incompatible grid sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for feasgen-core operations
pub type Result<T> = std::result::Result<T, Error>;
