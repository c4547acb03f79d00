use crate::config::AppConfig;
use crate::panels::{self, NewArtworkDialog, NewArtworkRequest};
use crate::state::EditorContext;
use crate::store::MemoryStorage;

/// A one-line message shown at the bottom of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct PixelArtApp {
    pub(crate) config: AppConfig,
    pub(crate) context: EditorContext,
    pub(crate) dialog: NewArtworkDialog,
    pub(crate) status: Option<StatusMessage>,
    // Stand-in when the host offers no persistent storage
    fallback_storage: MemoryStorage,
}

impl PixelArtApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config: AppConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        if cc.storage.is_none() {
            log::warn!("No persistent storage available; artworks will not survive a restart");
        }

        Self {
            context: EditorContext::load(cc.storage, &config),
            dialog: NewArtworkDialog::new(&config),
            config,
            status: None,
            fallback_storage: MemoryStorage::new(),
        }
    }

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub(crate) fn create_artwork(&mut self, frame: &mut eframe::Frame, request: NewArtworkRequest) {
        // Negative input is as invalid as zero.
        let width = u32::try_from(request.width).unwrap_or(0);
        let height = u32::try_from(request.height).unwrap_or(0);

        let context = &mut self.context;
        let result = match frame.storage_mut() {
            Some(storage) => context.request_create(storage, &request.name, width, height),
            None => context.request_create(&mut self.fallback_storage, &request.name, width, height),
        };

        match result {
            Ok(artwork) => {
                self.dialog.close(&self.config);
                self.status = Some(StatusMessage::info(format!("Created \"{}\"", artwork.name())));
            }
            Err(err) => {
                log::warn!("Could not create artwork: {err}");
                self.dialog.set_error(err.to_string());
            }
        }
    }

    pub(crate) fn save_artwork(&mut self, frame: &mut eframe::Frame) {
        let context = &mut self.context;
        let result = match frame.storage_mut() {
            Some(storage) => context.request_save(storage),
            None => context.request_save(&mut self.fallback_storage),
        };

        self.status = Some(match result {
            Ok(artwork) => StatusMessage::info(format!("Saved \"{}\"", artwork.name())),
            Err(err) => {
                log::error!("Save failed: {err}");
                StatusMessage::error(format!("Save failed: {err}"))
            }
        });
    }

    pub(crate) fn select_artwork(&mut self, id: Option<&crate::ArtworkId>) {
        if let Err(err) = self.context.request_select(id) {
            log::error!("Could not open artwork: {err}");
            self.status = Some(StatusMessage::error(err.to_string()));
        }
    }

    pub(crate) fn download_image(&mut self) {
        self.status = match self.context.download_png() {
            Some(Ok(saved)) => Some(StatusMessage::info(format!("Image saved: {saved}"))),
            Some(Err(err)) => {
                log::error!("Export failed: {err}");
                Some(StatusMessage::error(err.to_string()))
            }
            None => None,
        };
    }
}

impl eframe::App for PixelArtApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config.brush_color = self.context.brush_color();
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if let Some(status) = &self.status {
            let (text, is_error) = (status.text.clone(), status.is_error);
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                if is_error {
                    ui.colored_label(ui.visuals().error_fg_color, text);
                } else {
                    ui.label(text);
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.context.editor().is_some() {
                panels::canvas_panel(self, ui, frame);
            } else {
                panels::gallery_panel(self, ui);
            }
        });

        if let Some(request) = self.dialog.show(ctx) {
            self.create_artwork(frame, request);
        }
    }
}
