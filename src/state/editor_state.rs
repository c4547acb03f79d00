use egui::Color32;

use crate::artwork::{ArtworkId, ArtworkRef};
use crate::error::GridError;
use crate::grid::PixelGrid;
use crate::input::CanvasInput;
use crate::session::{DrawingSession, PointerEvent};

/// The artwork currently open for editing.
///
/// Painting happens on `working`, a private copy of the artwork's last
/// saved grid. Nothing reaches the store until the context saves it, and
/// dropping this value discards unsaved edits.
#[derive(Debug, Clone)]
pub struct EditorState {
    artwork: ArtworkRef,
    working: PixelGrid,
    session: DrawingSession,
    input: CanvasInput,
}

impl EditorState {
    pub fn open(artwork: ArtworkRef, color: Color32) -> Self {
        Self {
            working: artwork.grid().clone(),
            artwork,
            session: DrawingSession::new(color),
            input: CanvasInput::new(),
        }
    }

    pub fn artwork(&self) -> &ArtworkRef {
        &self.artwork
    }

    pub fn artwork_id(&self) -> &ArtworkId {
        self.artwork.id()
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.working
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn input_mut(&mut self) -> &mut CanvasInput {
        &mut self.input
    }

    /// True when the working copy differs from the last save
    pub fn has_unsaved_changes(&self) -> bool {
        &self.working != self.artwork.grid()
    }

    pub fn set_color(&mut self, color: Color32) {
        self.session.set_color(color);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<bool, GridError> {
        self.session.handle(&mut self.working, event)
    }

    /// Wipe the working copy. Like painting, this is only kept if saved.
    pub fn clear(&mut self) {
        self.session.end();
        self.working.clear();
    }

    /// Called after a successful save with the stored record.
    pub(crate) fn mark_saved(&mut self, artwork: ArtworkRef) {
        self.artwork = artwork;
    }
}
