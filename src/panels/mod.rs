mod canvas_panel;
mod gallery_panel;
mod new_artwork_dialog;

pub use canvas_panel::{canvas_panel, paint_grid};
pub use gallery_panel::gallery_panel;
pub use new_artwork_dialog::{NewArtworkDialog, NewArtworkRequest};
