use egui::Color32;
use pixel_gallery::export::{self, DEFAULT_EXPORT_FILENAME};
use pixel_gallery::{CellPos, Pixel, PixelGrid};

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

#[test]
fn test_two_by_two_export() {
    let mut grid = PixelGrid::new(2, 2).unwrap();
    grid.set_cell(CellPos::new(0, 1), Pixel::Color(Color32::from_rgb(255, 0, 0))).unwrap();
    grid.set_cell(CellPos::new(1, 0), Pixel::Color(Color32::from_rgb(0, 0, 255))).unwrap();

    let image = decode(&export::encode_png(&grid).unwrap());

    assert_eq!(image.dimensions(), (2, 2));
    // `get_pixel` takes (x, y), i.e. (col, row).
    assert_eq!(image.get_pixel(0, 0)[3], 0);
    assert_eq!(image.get_pixel(1, 0).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(0, 1).0, [0, 0, 255, 255]);
    assert_eq!(image.get_pixel(1, 1)[3], 0);
}

#[test]
fn test_export_is_one_pixel_per_cell() {
    let mut grid = PixelGrid::new(5, 3).unwrap();
    grid.set_cell(CellPos::new(2, 4), Pixel::from(Color32::WHITE)).unwrap();

    let image = decode(&export::encode_png(&grid).unwrap());
    assert_eq!(image.dimensions(), (5, 3));
    assert_eq!(image.get_pixel(4, 2).0, [255, 255, 255, 255]);
    assert_eq!(
        image.pixels().filter(|p| p[3] == 255).count(),
        1,
        "only the painted cell should be opaque"
    );
}

#[test]
fn test_rgba_image_matches_grid() {
    let mut grid = PixelGrid::new(3, 1).unwrap();
    grid.set_cell(CellPos::new(0, 1), Pixel::from(Color32::from_rgb(10, 20, 30))).unwrap();

    let image = export::to_rgba_image(&grid);
    assert_eq!(image.get_pixel(1, 0).0, [10, 20, 30, 255]);
    assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn test_download_to_writes_file() {
    let dir = std::env::temp_dir().join(format!("pixel_gallery_export_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let grid = PixelGrid::new(1, 1).unwrap();
    let bytes = export::encode_png(&grid).unwrap();

    let path = export::download_to(&dir, &bytes, DEFAULT_EXPORT_FILENAME).unwrap();

    assert_eq!(path.file_name().unwrap(), DEFAULT_EXPORT_FILENAME);
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_download_to_reports_io_errors() {
    let file = std::env::temp_dir().join(format!("pixel_gallery_not_a_dir_{}", std::process::id()));
    std::fs::write(&file, b"occupied").unwrap();

    // A regular file where a directory is expected.
    let result = export::download_to(&file, b"png", DEFAULT_EXPORT_FILENAME);
    assert!(matches!(result, Err(export::ExportError::Io(_))));
    std::fs::remove_file(&file).unwrap();
}

#[test]
fn test_download_to_never_overwrites() {
    let dir = std::env::temp_dir().join(format!("pixel_gallery_numbered_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let first = export::download_to(&dir, b"first", DEFAULT_EXPORT_FILENAME).unwrap();
    let second = export::download_to(&dir, b"second", DEFAULT_EXPORT_FILENAME).unwrap();
    let third = export::download_to(&dir, b"third", DEFAULT_EXPORT_FILENAME).unwrap();

    assert_eq!(first.file_name().unwrap(), "pixel-art.png");
    assert_eq!(second.file_name().unwrap(), "pixel-art (1).png");
    assert_eq!(third.file_name().unwrap(), "pixel-art (2).png");
    assert_eq!(std::fs::read(&first).unwrap(), b"first");
    assert_eq!(std::fs::read(&second).unwrap(), b"second");

    let bare = export::download_to(&dir, b"x", "noext").unwrap();
    let bare_again = export::download_to(&dir, b"y", "noext").unwrap();
    assert_eq!(bare.file_name().unwrap(), "noext");
    assert_eq!(bare_again.file_name().unwrap(), "noext (1)");
    std::fs::remove_dir_all(&dir).unwrap();
}
