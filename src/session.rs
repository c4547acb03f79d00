use egui::Color32;

use crate::color::Pixel;
use crate::error::GridError;
use crate::grid::{CellPos, PixelGrid};

/// Pointer events over the canvas, already mapped to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button went down over a cell
    Press(CellPos),
    /// The pointer moved onto a different cell
    Enter(CellPos),
    /// Primary button went up, anywhere
    Release,
    /// The pointer left the canvas area
    LeaveBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Painting,
}

/// State machine for one press-drag-release paint gesture.
///
/// The active color is read each time a cell is painted, so changing it
/// mid-drag only affects cells painted afterwards.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    state: SessionState,
    color: Color32,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(Color32::BLACK)
    }
}

impl DrawingSession {
    pub fn new(color: Color32) -> Self {
        Self {
            state: SessionState::Idle,
            color,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_painting(&self) -> bool {
        self.state == SessionState::Painting
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Start a gesture, painting the pressed cell right away.
    ///
    /// An out-of-range cell leaves both the grid and the state untouched.
    pub fn begin(&mut self, grid: &mut PixelGrid, cell: CellPos) -> Result<(), GridError> {
        grid.set_cell(cell, Pixel::from(self.color))?;
        log::debug!("Paint gesture started at {:?}", cell);
        self.state = SessionState::Painting;
        Ok(())
    }

    /// Paint a newly entered cell. Returns whether anything was painted;
    /// outside a gesture this is a no-op.
    pub fn extend(&mut self, grid: &mut PixelGrid, cell: CellPos) -> Result<bool, GridError> {
        if !self.is_painting() {
            return Ok(false);
        }
        grid.set_cell(cell, Pixel::from(self.color))?;
        Ok(true)
    }

    pub fn end(&mut self) {
        if self.is_painting() {
            log::debug!("Paint gesture ended");
        }
        self.state = SessionState::Idle;
    }

    /// Feed one pointer event. Returns whether the grid changed.
    pub fn handle(&mut self, grid: &mut PixelGrid, event: PointerEvent) -> Result<bool, GridError> {
        match event {
            PointerEvent::Press(cell) => self.begin(grid, cell).map(|()| true),
            PointerEvent::Enter(cell) => self.extend(grid, cell),
            PointerEvent::Release | PointerEvent::LeaveBounds => {
                self.end();
                Ok(false)
            }
        }
    }
}
