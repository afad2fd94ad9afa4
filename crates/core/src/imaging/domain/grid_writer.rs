use std::path::Path;

use crate::shared::pixel_grid::PixelGrid;

/// Writes a [`PixelGrid`] out as an image of the same dimensions.
pub trait GridWriter: Send {
    fn write(&self, path: &Path, grid: &PixelGrid) -> Result<(), Box<dyn std::error::Error>>;
}
