use eframe::Storage;
use egui::Color32;

use crate::artwork::{ArtworkId, ArtworkRef};
use crate::config::AppConfig;
use crate::error::{StoreError, StoreResult};
use crate::export::{self, ExportResult, SavedImage};
use crate::grid::PixelGrid;
use crate::session::PointerEvent;
use crate::store::ArtworkStore;

use super::EditorState;

/// All application state the view renders from.
///
/// Owns the artwork collection and the current selection. There is one of
/// these per process; it is passed explicitly to whatever needs it.
#[derive(Debug)]
pub struct EditorContext {
    store: ArtworkStore,
    editor: Option<EditorState>,
    brush_color: Color32,
    export_filename: String,
}

impl EditorContext {
    /// Load the collection from storage. Nothing is selected.
    pub fn load<S: Storage + ?Sized>(storage: Option<&S>, config: &AppConfig) -> Self {
        Self::with_store(ArtworkStore::load(storage, config.storage_key.clone()), config)
    }

    pub fn with_store(store: ArtworkStore, config: &AppConfig) -> Self {
        Self {
            store,
            editor: None,
            brush_color: config.brush_color,
            export_filename: config.export_filename.clone(),
        }
    }

    pub fn store(&self) -> &ArtworkStore {
        &self.store
    }

    pub fn artworks(&self) -> &[ArtworkRef] {
        self.store.artworks()
    }

    pub fn editor(&self) -> Option<&EditorState> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditorState> {
        self.editor.as_mut()
    }

    pub fn brush_color(&self) -> Color32 {
        self.brush_color
    }

    /// Change the paint color, including for a drag already in progress.
    pub fn set_color(&mut self, color: Color32) {
        self.brush_color = color;
        if let Some(editor) = &mut self.editor {
            editor.set_color(color);
        }
    }

    /// Create a new artwork and open it.
    pub fn request_create<S: Storage + ?Sized>(
        &mut self,
        storage: &mut S,
        name: &str,
        width: u32,
        height: u32,
    ) -> StoreResult<ArtworkRef> {
        let artwork = self.store.create(storage, name, width, height)?;
        self.editor = Some(EditorState::open(artwork.clone(), self.brush_color));
        Ok(artwork)
    }

    /// Save the open artwork's working copy.
    pub fn request_save<S: Storage + ?Sized>(&mut self, storage: &mut S) -> StoreResult<ArtworkRef> {
        let Some(editor) = &self.editor else {
            return Err(StoreError::NoSelection);
        };
        let (id, grid) = (editor.artwork_id().clone(), editor.grid().clone());
        self.request_save_grid(storage, &id, grid)
    }

    /// Save `grid` as the pixels of artwork `id`.
    ///
    /// If that artwork is open, it now refers to the saved record; its
    /// working copy is left alone.
    pub fn request_save_grid<S: Storage + ?Sized>(
        &mut self,
        storage: &mut S,
        id: &ArtworkId,
        grid: PixelGrid,
    ) -> StoreResult<ArtworkRef> {
        let saved = self.store.save(storage, id, grid)?;
        if let Some(editor) = self.editor.as_mut().filter(|e| e.artwork_id() == id) {
            editor.mark_saved(saved.clone());
        }
        Ok(saved)
    }

    /// Open an artwork from its last saved state, or close the editor.
    ///
    /// Unsaved edits of the previously open artwork are discarded.
    pub fn request_select(&mut self, id: Option<&ArtworkId>) -> StoreResult<()> {
        if let Some(editor) = &self.editor {
            if editor.has_unsaved_changes() {
                log::info!("Discarding unsaved changes to {}", editor.artwork_id());
            }
        }

        self.editor = match id {
            Some(id) => {
                let artwork = self
                    .store
                    .get(id)
                    .ok_or_else(|| StoreError::NotFound(id.clone()))?;
                log::info!("Opened artwork {}", id);
                Some(EditorState::open(artwork.clone(), self.brush_color))
            }
            None => None,
        };
        Ok(())
    }

    /// Route a canvas event to the open artwork. Returns whether the
    /// working grid changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        let Some(editor) = &mut self.editor else {
            return false;
        };
        match editor.handle_pointer(event) {
            Ok(changed) => changed,
            Err(err) => {
                log::error!("Ignoring canvas event {:?}: {}", event, err);
                false
            }
        }
    }

    pub fn clear_canvas(&mut self) {
        if let Some(editor) = &mut self.editor {
            editor.clear();
        }
    }

    /// PNG of the open artwork's working copy, or `None` when nothing is open.
    pub fn export_png(&self) -> Option<ExportResult<Vec<u8>>> {
        self.editor.as_ref().map(|e| export::encode_png(e.grid()))
    }

    /// Encode the open artwork and hand it to the host as a download.
    pub fn download_png(&self) -> Option<ExportResult<SavedImage>> {
        self.export_png()
            .map(|bytes| bytes.and_then(|bytes| export::download(&bytes, &self.export_filename)))
    }
}
