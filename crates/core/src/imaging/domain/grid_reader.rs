use std::path::Path;

use crate::shared::pixel_grid::PixelGrid;

/// Loads a decoded image into a [`PixelGrid`].
///
/// The grid has the image's dimensions (rows = height, cols = width) and
/// 8-bit RGB channels; alpha, if present, is dropped.
pub trait GridReader: Send {
    fn read(&mut self, path: &Path) -> Result<PixelGrid, Box<dyn std::error::Error>>;
}
