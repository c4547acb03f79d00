use egui::{Color32, Painter, Sense, Stroke};

use crate::PixelArtApp;
use crate::color::Pixel;
use crate::grid::PixelGrid;
use crate::input::{CanvasLayout, PointerSnapshot};

const GRID_LINE: Color32 = Color32::from_gray(70);
const CHECKER_LIGHT: Color32 = Color32::from_gray(58);
const CHECKER_DARK: Color32 = Color32::from_gray(46);

/// Draw `grid` into `layout`. Transparent cells get a checkerboard.
pub fn paint_grid(painter: &Painter, layout: &CanvasLayout, grid: &PixelGrid, show_grid: bool) {
    for (cell, pixel) in grid.iter() {
        let rect = layout.cell_rect(cell);
        let fill = match pixel {
            Pixel::Color(color) => color,
            Pixel::Transparent if (cell.row + cell.col) % 2 == 0 => CHECKER_LIGHT,
            Pixel::Transparent => CHECKER_DARK,
        };
        painter.rect_filled(rect, 0.0, fill);
        if show_grid {
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, GRID_LINE));
        }
    }
    painter.rect_stroke(layout.rect(), 0.0, Stroke::new(1.0, Color32::from_gray(100)));
}

/// Editor view for the open artwork.
pub fn canvas_panel(app: &mut PixelArtApp, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
    let Some(editor) = app.context.editor() else {
        return;
    };
    let title = editor.artwork().name().to_owned();
    let (width, height) = (editor.grid().width(), editor.grid().height());

    let mut close = false;
    ui.horizontal(|ui| {
        ui.heading(if title.is_empty() { "Untitled" } else { title.as_str() });
        ui.label(format!("{width}x{height}"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close = ui.button("✖ Close").clicked();
        });
    });
    ui.separator();

    if close {
        app.select_artwork(None);
        return;
    }

    let (mut clear, mut save, mut download) = (false, false, false);
    ui.horizontal(|ui| {
        ui.label("Color:");
        let mut color = app.context.brush_color();
        if egui::color_picker::color_edit_button_srgba(ui, &mut color, egui::color_picker::Alpha::Opaque).changed() {
            app.context.set_color(color);
        }
        clear = ui.button("Clear Canvas").clicked();
        save = ui.button("Save").clicked();
        download = ui.button("Download Image").clicked();
        ui.checkbox(&mut app.config.show_grid, "Show Grid");
    });
    ui.add_space(8.0);

    if clear {
        app.context.clear_canvas();
    }
    if save {
        app.save_artwork(frame);
    }
    if download {
        app.download_image();
    }

    let cell_size = app.config.cell_size;
    let show_grid = app.config.show_grid;

    egui::ScrollArea::both().show(ui, |ui| {
        let size = CanvasLayout::new(egui::Pos2::ZERO, cell_size, width, height).size();
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let layout = CanvasLayout::new(response.rect.min, cell_size, width, height);

        let mut pointer = PointerSnapshot::from_egui(ui.ctx());
        if !response.contains_pointer() {
            // Covered by another window, or outside the visible scroll area.
            pointer.hover_pos = None;
        }

        let events = match app.context.editor_mut() {
            Some(editor) => editor.input_mut().process(&layout, pointer),
            None => Vec::new(),
        };
        for event in events {
            app.context.handle_pointer(event);
        }

        if let Some(editor) = app.context.editor() {
            paint_grid(&painter, &layout, editor.grid(), show_grid);
        }
    });
}
