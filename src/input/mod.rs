use egui::{Context, Pos2, Rect, Vec2, vec2};

use crate::grid::CellPos;
use crate::session::PointerEvent;

/// Placement of a grid on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Top-left corner of cell (0, 0)
    pub origin: Pos2,
    pub cell_size: f32,
    pub width: u32,
    pub height: u32,
}

impl CanvasLayout {
    pub fn new(origin: Pos2, cell_size: f32, width: u32, height: u32) -> Self {
        Self {
            origin,
            cell_size,
            width,
            height,
        }
    }

    /// Total on-screen size of the grid
    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32) * self.cell_size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size())
    }

    /// The cell under `pos`, if any
    pub fn cell_at(&self, pos: Pos2) -> Option<CellPos> {
        if self.cell_size <= 0.0 || !self.rect().contains(pos) {
            return None;
        }
        let local = pos - self.origin;
        let col = (local.x / self.cell_size).floor() as usize;
        let row = (local.y / self.cell_size).floor() as usize;
        // The far edges are inclusive in `Rect::contains`.
        (row < self.height as usize && col < self.width as usize).then(|| CellPos::new(row, col))
    }

    pub fn cell_rect(&self, cell: CellPos) -> Rect {
        let min = self.origin + vec2(cell.col as f32, cell.row as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}

/// The parts of one frame's pointer input the canvas cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerSnapshot {
    pub fn from_egui(ctx: &Context) -> Self {
        ctx.input(|i| Self {
            hover_pos: i.pointer.hover_pos(),
            primary_pressed: i.pointer.primary_pressed(),
            primary_released: i.pointer.primary_released(),
        })
    }

    pub fn at(pos: Pos2) -> Self {
        Self {
            hover_pos: Some(pos),
            ..Default::default()
        }
    }
}

/// Turns per-frame pointer snapshots into cell-level events.
#[derive(Debug, Clone, Default)]
pub struct CanvasInput {
    hovered: Option<CellPos>,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<CellPos> {
        self.hovered
    }

    /// Forget the hovered cell, e.g. when a different artwork is opened
    pub fn reset(&mut self) {
        self.hovered = None;
    }

    pub fn process(&mut self, layout: &CanvasLayout, pointer: PointerSnapshot) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let cell = pointer.hover_pos.and_then(|pos| layout.cell_at(pos));

        if cell != self.hovered {
            match cell {
                Some(cell) => events.push(PointerEvent::Enter(cell)),
                None => events.push(PointerEvent::LeaveBounds),
            }
            self.hovered = cell;
        }

        if pointer.primary_pressed {
            if let Some(cell) = cell {
                events.push(PointerEvent::Press(cell));
            }
        }

        if pointer.primary_released {
            events.push(PointerEvent::Release);
        }

        events
    }
}
