use std::cell::RefCell;

use crate::blurring::domain::grid_blurrer::GridBlurrer;
use crate::shared::color::Color;
use crate::shared::pixel_error::PixelError;
use crate::shared::pixel_grid::PixelGrid;

/// Box blur over each cell's 3x3 neighborhood, clipped at the grid edges.
///
/// Every output cell is the unweighted mean of itself and its in-bounds
/// neighbors. Neighbor values are read from a snapshot taken before the pass,
/// so no cell ever sees a value written earlier in the same pass.
/// Grids with fewer than two rows are returned unchanged.
pub struct NeighborhoodBlurrer {
    neighbors: RefCell<Vec<Color>>,
}

impl NeighborhoodBlurrer {
    pub fn new() -> Self {
        Self {
            neighbors: RefCell::new(Vec::with_capacity(9)),
        }
    }
}

impl Default for NeighborhoodBlurrer {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBlurrer for NeighborhoodBlurrer {
    fn blur_once(&self, grid: &mut PixelGrid) -> Result<(), PixelError> {
        if grid.rows() < 2 {
            return Ok(());
        }

        let snapshot = grid.clone();
        let mut neighbors = self.neighbors.borrow_mut();

        for (row, col) in snapshot.coordinates() {
            neighbors.clear();
            for (r, c) in snapshot.neighbor_coordinates(row, col)? {
                neighbors.push(snapshot.get(r, c)?);
            }
            grid.set(row, col, Color::average(&neighbors)?)?;
        }

        log::debug!(
            "Blurred {}x{} grid in one pass",
            snapshot.rows(),
            snapshot.cols()
        );
        Ok(())
    }
}
