#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod artwork;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod input;
pub mod panels;
pub mod session;
pub mod state;
pub mod store;

pub use app::PixelArtApp;
pub use artwork::{Artwork, ArtworkId, ArtworkRef};
pub use color::Pixel;
pub use config::AppConfig;
pub use error::{GridError, StoreError, StoreResult};
pub use export::{ExportError, ExportResult};
pub use grid::{CellPos, MAX_DIMENSION, PixelGrid};
pub use session::{DrawingSession, PointerEvent, SessionState};
pub use state::{EditorContext, EditorState};
pub use store::{ArtworkStore, MemoryStorage};
