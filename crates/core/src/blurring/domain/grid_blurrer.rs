use crate::shared::pixel_error::PixelError;
use crate::shared::pixel_grid::PixelGrid;

/// Domain interface for a single-pass blur over a whole grid.
///
/// Implementations modify the grid in-place (`&mut PixelGrid`). A pass is
/// atomic from the caller's point of view: nothing outside the blurrer
/// observes a half-updated grid.
pub trait GridBlurrer: Send {
    fn blur_once(&self, grid: &mut PixelGrid) -> Result<(), PixelError>;

    /// Applies `times` passes sequentially, each reading the previous
    /// pass's committed output. `times == 0` leaves the grid untouched.
    fn blur_repeated(&self, grid: &mut PixelGrid, times: usize) -> Result<(), PixelError> {
        for _ in 0..times {
            self.blur_once(grid)?;
        }
        Ok(())
    }
}
