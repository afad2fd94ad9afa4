use std::path::Path;

use crate::imaging::domain::grid_reader::GridReader;
use crate::shared::pixel_grid::PixelGrid;

/// Decodes an image file with the `image` crate and converts it to RGB8.
///
/// Any format the `image` crate can sniff is accepted. Alpha and extra
/// bit depth are discarded by the RGB8 conversion.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl GridReader for ImageFileReader {
    fn read(&mut self, path: &Path) -> Result<PixelGrid, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        log::debug!("Decoded {} ({width}x{height})", path.display());
        let grid = PixelGrid::from_raw_rgb(img.as_raw(), width as usize, height as usize)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::color::Color;
    use std::path::PathBuf;

    fn write_test_image(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("test.png");
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.put_pixel(width - 1, 0, image::Rgb([1, 2, 3]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_read_dimensions_are_rows_by_cols() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 10, 4);
        let grid = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(grid.dimensions(), (4, 10));
    }

    #[test]
    fn test_read_pixel_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 10, 4);
        let grid = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), Color::from_rgb(50, 100, 200));
        assert_eq!(grid.get(0, 9).unwrap(), Color::from_rgb(1, 2, 3));
        assert_eq!(grid.get(3, 9).unwrap(), Color::from_rgb(50, 100, 200));
    }

    #[test]
    fn test_read_discards_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 0]));
        img.save(&path).unwrap();

        let grid = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.get(1, 2).unwrap(), Color::from_rgb(10, 20, 30));
    }

    #[test]
    fn test_read_nonexistent_returns_error() {
        let mut reader = ImageFileReader::new();
        assert!(reader.read(Path::new("/nonexistent/test.png")).is_err());
    }

    #[test]
    fn test_read_garbage_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(ImageFileReader::new().read(&path).is_err());
    }
}
