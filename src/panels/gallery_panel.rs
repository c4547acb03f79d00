use egui::{Sense, vec2};

use crate::PixelArtApp;
use crate::artwork::ArtworkId;
use crate::input::CanvasLayout;

use super::paint_grid;

const THUMBNAIL_SIZE: f32 = 120.0;

/// List of saved artworks, plus the button that opens the new-artwork dialog.
pub fn gallery_panel(app: &mut PixelArtApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading("Pixel Art Gallery");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Create New Artwork").clicked() {
                app.dialog.open();
            }
        });
    });
    ui.separator();

    if app.context.artworks().is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No artworks yet. Click \"Create New Artwork\" to get started!");
        });
        return;
    }

    let mut clicked: Option<ArtworkId> = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for artwork in app.context.artworks() {
                let card = egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.strong(artwork.name());
                        ui.weak(format!("{}x{}", artwork.width(), artwork.height()));

                        let grid = artwork.grid();
                        let cell_size = THUMBNAIL_SIZE / grid.width().max(grid.height()) as f32;
                        let (response, painter) = ui.allocate_painter(vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE), Sense::click());
                        let layout = CanvasLayout::new(response.rect.min, cell_size, grid.width(), grid.height());
                        paint_grid(&painter, &layout, grid, false);
                        response.clicked()
                    })
                    .inner
                });

                let card_clicked = card.response.interact(Sense::click()).clicked();
                if card.inner || card_clicked {
                    clicked = Some(artwork.id().clone());
                }
            }
        });
    });

    if let Some(id) = clicked {
        app.select_artwork(Some(&id));
    }
}
