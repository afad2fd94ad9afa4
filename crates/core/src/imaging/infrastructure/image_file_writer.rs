use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::imaging::domain::grid_writer::GridWriter;
use crate::shared::pixel_grid::PixelGrid;

/// Encodes a grid as an RGB8 image file using the `image` crate.
///
/// The format follows the output extension; unknown or missing extensions
/// are written as PNG. The image is fully encoded in memory before the
/// output path is touched, so an encoder failure leaves no file behind.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GridWriter for ImageFileWriter {
    fn write(&self, path: &Path, grid: &PixelGrid) -> Result<(), Box<dyn std::error::Error>> {
        let (rows, cols) = grid.dimensions();
        let img = image::RgbImage::from_raw(cols as u32, rows as u32, grid.to_raw_rgb())
            .ok_or("Failed to create image from grid data")?;

        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
        let mut encoded = Cursor::new(Vec::new());
        img.write_to(&mut encoded, format)?;

        // Ensure parent directory exists (infrastructure concern)
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, encoded.into_inner())?;
        Ok(())
    }
}
