use image::{ImageFormat, Rgba, RgbaImage};
use std::fs::OpenOptions;
use std::io::{self, Cursor, Write as _};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::grid::{CellPos, PixelGrid};

/// Filename offered for downloads unless configured otherwise
pub const DEFAULT_EXPORT_FILENAME: &str = "pixel-art.png";

/// How many numbered variants of a taken filename are tried
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Delay before a browser download's object URL is released
#[cfg(target_arch = "wasm32")]
const REVOKE_DELAY_MS: i32 = 10_000;

/// Errors that can occur while exporting an image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// The host refused or could not perform the download
    #[error("download failed: {0}")]
    Host(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Where a downloaded image ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedImage {
    /// Written to the local filesystem
    File(PathBuf),
    /// Handed to the browser's download mechanism
    Browser(String),
}

impl std::fmt::Display for SavedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Browser(name) => write!(f, "{name} (browser download)"),
        }
    }
}

/// One image pixel per cell, row 0 at the top.
pub fn to_rgba_image(grid: &PixelGrid) -> RgbaImage {
    RgbaImage::from_fn(grid.width(), grid.height(), |x, y| {
        let pixel = grid
            .get(CellPos::new(y as usize, x as usize))
            .unwrap_or_default();
        Rgba(pixel.to_rgba())
    })
}

/// Encode the grid as a PNG at 1:1 scale.
pub fn encode_png(grid: &PixelGrid) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    to_rgba_image(grid).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    log::debug!(
        "Encoded {}x{} grid as {} PNG bytes",
        grid.width(),
        grid.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Write `bytes` into `dir` as `filename`. An existing file is never
/// replaced: a taken name becomes `stem (1).ext`, `stem (2).ext` and so on.
pub fn download_to(dir: &Path, bytes: &[u8], filename: &str) -> ExportResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    for candidate in candidate_names(filename) {
        let path = dir.join(&candidate);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(bytes)?;
                return Ok(path);
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free file name for {filename:?} in {}", dir.display()),
    )
    .into())
}

fn candidate_names(filename: &str) -> impl Iterator<Item = String> + '_ {
    let name = Path::new(filename);
    let stem = name.file_stem().and_then(|s| s.to_str()).unwrap_or(filename);
    let extension = name.extension().and_then(|e| e.to_str());
    std::iter::once(filename.to_owned()).chain((1..MAX_NAME_ATTEMPTS).map(move |n| match extension {
        Some(extension) => format!("{stem} ({n}).{extension}"),
        None => format!("{stem} ({n})"),
    }))
}

/// Save into the user's download directory, or the working directory when
/// there is none.
#[cfg(not(target_arch = "wasm32"))]
pub fn download(bytes: &[u8], filename: &str) -> ExportResult<SavedImage> {
    let dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
    let path = download_to(&dir, bytes, filename)?;
    log::info!("Exported image to {}", path.display());
    Ok(SavedImage::File(path))
}

/// Trigger a browser download through a temporary object URL.
#[cfg(target_arch = "wasm32")]
pub fn download(bytes: &[u8], filename: &str) -> ExportResult<SavedImage> {
    use eframe::wasm_bindgen::JsCast as _;

    let host_err = |e: eframe::wasm_bindgen::JsValue| ExportError::Host(format!("{e:?}"));

    let window = web_sys::window().ok_or_else(|| ExportError::Host("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Host("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(host_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(host_err)?;

    let anchor = document
        .create_element("a")
        .map_err(host_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Host("anchor element has unexpected type".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    // The URL has to outlive the click until the browser has fetched it.
    let revoke = eframe::wasm_bindgen::closure::Closure::once_into_js(move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke download URL: {err:?}");
        }
    });
    if let Err(err) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), REVOKE_DELAY_MS)
    {
        log::warn!("Could not schedule download URL cleanup: {err:?}");
    }
    log::info!("Exported image as {filename}");
    Ok(SavedImage::Browser(filename.to_owned()))
}
