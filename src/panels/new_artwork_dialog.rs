use crate::config::AppConfig;
use crate::grid::MAX_DIMENSION;

/// What the dialog hands back when the user presses Save.
///
/// Dimensions are signed because they come straight from the number
/// fields; validation happens when the artwork is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtworkRequest {
    pub name: String,
    pub width: i64,
    pub height: i64,
}

/// Modal window collecting a name and size for a new artwork.
#[derive(Debug, Clone)]
pub struct NewArtworkDialog {
    is_open: bool,
    name: String,
    width: i64,
    height: i64,
    error: Option<String>,
}

impl NewArtworkDialog {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            is_open: false,
            name: String::new(),
            width: i64::from(config.default_width),
            height: i64::from(config.default_height),
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close and reset the fields for next time
    pub fn close(&mut self, config: &AppConfig) {
        *self = Self::new(config);
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<NewArtworkRequest> {
        if !self.is_open {
            return None;
        }

        let mut request = None;
        let mut is_open = self.is_open;
        egui::Window::new("Create New Artwork")
            .collapsible(false)
            .resizable(false)
            .open(&mut is_open)
            .show(ctx, |ui| {
                egui::Grid::new("new_artwork_fields")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.add(egui::TextEdit::singleline(&mut self.name).hint_text("Art name"));
                        ui.end_row();

                        ui.label("Width");
                        ui.add(egui::DragValue::new(&mut self.width).range(1..=i64::from(MAX_DIMENSION)));
                        ui.end_row();

                        ui.label("Height");
                        ui.add(egui::DragValue::new(&mut self.height).range(1..=i64::from(MAX_DIMENSION)));
                        ui.end_row();
                    });

                if let Some(error) = &self.error {
                    ui.colored_label(ui.visuals().error_fg_color, error.as_str());
                }

                ui.separator();
                if ui.button("Save").clicked() {
                    self.error = None;
                    request = Some(NewArtworkRequest {
                        name: self.name.clone(),
                        width: self.width,
                        height: self.height,
                    });
                }
            });

        // Closing via the title bar keeps the typed values.
        self.is_open = is_open;
        request
    }
}
