use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::export::DEFAULT_EXPORT_FILENAME;
use crate::store::DEFAULT_STORAGE_KEY;

/// Application settings.
///
/// Persisted alongside the eframe window state, so every field needs a
/// default for data written by older builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage key holding the serialized artwork collection
    pub storage_key: String,
    /// Initial width offered by the new-artwork dialog
    pub default_width: u32,
    /// Initial height offered by the new-artwork dialog
    pub default_height: u32,
    /// On-screen size of one cell in the editor, in points
    pub cell_size: f32,
    pub export_filename: String,
    pub show_grid: bool,
    #[serde(with = "crate::color::hex")]
    pub brush_color: Color32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_width: 16,
            default_height: 16,
            cell_size: 20.0,
            export_filename: DEFAULT_EXPORT_FILENAME.to_owned(),
            show_grid: true,
            brush_color: Color32::BLACK,
        }
    }
}
