use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::grid::PixelGrid;

/// Identifier assigned once at creation time.
///
/// A plain string so ids written by older builds (millisecond
/// timestamps) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(String);

impl ArtworkId {
    /// Fresh timestamp-ordered id (UUID v7).
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtworkId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ArtworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named canvas. Serializes as `{id, name, width, height, pixels}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artwork {
    id: ArtworkId,
    name: String,
    #[serde(flatten)]
    grid: PixelGrid,
}

// Artworks are shared read-only; a save swaps in a new record.
pub type ArtworkRef = Arc<Artwork>;

impl Artwork {
    pub fn new(id: ArtworkId, name: impl Into<String>, grid: PixelGrid) -> Self {
        Self {
            id,
            name: name.into(),
            grid,
        }
    }

    pub fn new_ref(id: ArtworkId, name: impl Into<String>, grid: PixelGrid) -> ArtworkRef {
        Arc::new(Self::new(id, name, grid))
    }

    /// Same id and name, different pixels.
    pub fn with_grid(&self, grid: PixelGrid) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            grid,
        }
    }

    pub fn id(&self) -> &ArtworkId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }
}
