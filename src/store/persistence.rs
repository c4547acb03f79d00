use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::artwork::{Artwork, ArtworkId, ArtworkRef};
use crate::error::{StoreError, StoreResult};
use crate::grid::PixelGrid;

/// Shape of one artwork as written to storage.
///
/// `pixels` is kept as raw JSON so malformed grids can be repaired
/// instead of failing the whole collection.
#[derive(Debug, Deserialize)]
struct StoredArtwork {
    id: ArtworkId,
    #[serde(default)]
    name: Option<String>,
    width: u32,
    height: u32,
    #[serde(default)]
    pixels: serde_json::Value,
}

/// Serialize the whole collection as a JSON array.
pub fn encode(artworks: &[ArtworkRef]) -> StoreResult<String> {
    Ok(serde_json::to_string(artworks)?)
}

/// Parse a stored collection.
///
/// Only a top level that is not an array is reported as corrupt. Each
/// record is read on its own: records that cannot be read, declare
/// unusable dimensions or repeat an earlier id are dropped, and grids that
/// do not match their declared size are replaced by empty ones.
pub fn decode(json: &str) -> StoreResult<Vec<ArtworkRef>> {
    let records: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|err| StoreError::CorruptPersistedState(err.to_string()))?;

    let mut seen = HashSet::new();
    let mut artworks = Vec::with_capacity(records.len());
    for (index, value) in records.into_iter().enumerate() {
        let record: StoredArtwork = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(err) => {
                log::warn!("Dropping unreadable stored artwork at position {index}: {err}");
                continue;
            }
        };
        if seen.contains(&record.id) {
            log::warn!("Dropping stored artwork with duplicate id {}", record.id);
            continue;
        }
        match PixelGrid::validate(record.pixels, record.width, record.height) {
            Ok(grid) => {
                seen.insert(record.id.clone());
                let name = record.name.unwrap_or_default();
                artworks.push(Artwork::new_ref(record.id, name, grid));
            }
            Err(err) => log::warn!("Dropping stored artwork {}: {}", record.id, err),
        }
    }
    Ok(artworks)
}

/// In-process key-value storage.
///
/// Used when the host provides no persistent storage, and by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    flushes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the contents were flushed
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
