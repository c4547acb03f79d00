use thiserror::Error;

use crate::artwork::ArtworkId;

/// Errors raised by grid construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height is zero or above the size limit
    #[error(
        "invalid canvas dimensions {width}x{height}: both must be between 1 and {}",
        crate::grid::MAX_DIMENSION
    )]
    InvalidDimension { width: u32, height: u32 },

    /// A cell outside the grid was addressed. The view should never emit
    /// these, so they indicate a bug rather than bad user input.
    #[error("cell ({row}, {col}) is outside a {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: u32,
        height: u32,
    },

    /// Row data does not match the declared dimensions
    #[error("pixel rows do not form a {width}x{height} grid")]
    InvalidShape { width: u32, height: u32 },
}

/// Errors raised by the artwork collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("no artwork with id {0}")]
    NotFound(ArtworkId),

    /// A save was requested while no artwork is open
    #[error("no artwork is open")]
    NoSelection,

    /// Stored data could not be read back. `ArtworkStore::load` recovers
    /// from this by starting empty.
    #[error("corrupt persisted state: {0}")]
    CorruptPersistedState(String),

    #[error("failed to serialize artworks: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
