mod persistence;

use eframe::Storage;

use crate::artwork::{Artwork, ArtworkId, ArtworkRef};
use crate::error::{GridError, StoreError, StoreResult};
use crate::grid::PixelGrid;

pub use persistence::{MemoryStorage, decode, encode};

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "pixelArtworks";

/// The ordered collection of artworks and its link to persistent storage.
///
/// Every mutation rewrites the full collection under a single key. New
/// state is only committed after it has been written, so a failed write
/// leaves the collection as it was.
#[derive(Debug, Clone)]
pub struct ArtworkStore {
    artworks: Vec<ArtworkRef>,
    storage_key: String,
}

impl Default for ArtworkStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_KEY)
    }
}

impl ArtworkStore {
    /// Empty store writing under `storage_key`
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            artworks: Vec::new(),
            storage_key: storage_key.into(),
        }
    }

    /// Read the collection from storage.
    ///
    /// Missing data gives an empty store. Unreadable data is logged and
    /// also gives an empty store; it is never reported to the caller.
    pub fn load<S: Storage + ?Sized>(storage: Option<&S>, storage_key: impl Into<String>) -> Self {
        let mut store = Self::new(storage_key);

        let Some(json) = storage.and_then(|s| s.get_string(&store.storage_key)) else {
            log::debug!("No saved artworks under {:?}", store.storage_key);
            return store;
        };

        match decode(&json) {
            Ok(artworks) => {
                log::info!("Loaded {} artworks", artworks.len());
                store.artworks = artworks;
            }
            Err(err) => {
                log::error!("Error parsing saved artworks, starting empty: {err}");
            }
        }
        store
    }

    /// Create an empty artwork, append it and persist.
    pub fn create<S: Storage + ?Sized>(
        &mut self,
        storage: &mut S,
        name: &str,
        width: u32,
        height: u32,
    ) -> StoreResult<ArtworkRef> {
        let grid = PixelGrid::new(width, height)?;
        let artwork = Artwork::new_ref(self.fresh_id(), name, grid);

        let mut next = self.artworks.clone();
        next.push(artwork.clone());
        self.commit(storage, next)?;

        log::info!("Created artwork {} ({:?}, {}x{})", artwork.id(), name, width, height);
        Ok(artwork)
    }

    /// Replace the pixels of an existing artwork, keeping its position.
    pub fn save<S: Storage + ?Sized>(
        &mut self,
        storage: &mut S,
        id: &ArtworkId,
        grid: PixelGrid,
    ) -> StoreResult<ArtworkRef> {
        let index = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        let current = &self.artworks[index];
        if (current.width(), current.height()) != (grid.width(), grid.height()) {
            return Err(GridError::InvalidShape {
                width: current.width(),
                height: current.height(),
            }
            .into());
        }

        let updated = ArtworkRef::new(current.with_grid(grid));
        let mut next = self.artworks.clone();
        next[index] = updated.clone();
        self.commit(storage, next)?;

        log::info!("Saved artwork {}", id);
        Ok(updated)
    }

    /// Write the whole collection under the storage key.
    pub fn persist<S: Storage + ?Sized>(&self, storage: &mut S) -> StoreResult<()> {
        write_collection(storage, &self.storage_key, &self.artworks)
    }

    pub fn artworks(&self) -> &[ArtworkRef] {
        &self.artworks
    }

    pub fn get(&self, id: &ArtworkId) -> Option<&ArtworkRef> {
        self.artworks.iter().find(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn position(&self, id: &ArtworkId) -> Option<usize> {
        self.artworks.iter().position(|a| a.id() == id)
    }

    fn fresh_id(&self) -> ArtworkId {
        loop {
            let id = ArtworkId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn commit<S: Storage + ?Sized>(&mut self, storage: &mut S, next: Vec<ArtworkRef>) -> StoreResult<()> {
        write_collection(storage, &self.storage_key, &next)?;
        self.artworks = next;
        Ok(())
    }
}

fn write_collection<S: Storage + ?Sized>(storage: &mut S, key: &str, artworks: &[ArtworkRef]) -> StoreResult<()> {
    let json = encode(artworks)?;
    log::debug!("Persisting {} artworks ({} bytes)", artworks.len(), json.len());
    storage.set_string(key, json);
    storage.flush();
    Ok(())
}
