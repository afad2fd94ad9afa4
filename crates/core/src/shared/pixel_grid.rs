use super::color::Color;
use super::pixel_error::PixelError;

/// A rectangular, row-major grid of [`Color`] cells.
///
/// A grid with zero rows always has zero columns. Format conversion happens
/// at the I/O boundary ([`from_raw_rgb`](Self::from_raw_rgb) /
/// [`to_raw_rgb`](Self::to_raw_rgb)); everything else works on colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    cells: Vec<Color>,
    rows: usize,
    cols: usize,
}

impl PixelGrid {
    /// Creates a `rows x cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: Color) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        Self {
            cells: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a grid from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, PixelError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(PixelError::MalformedGrid {
                reason: format!("row {i} has {} cells, expected {cols}", row.len()),
            });
        }
        let n_rows = rows.len();
        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols,
        })
    }

    /// Builds a grid from interleaved 8-bit RGB bytes in row-major order.
    pub fn from_raw_rgb(data: &[u8], width: usize, height: usize) -> Result<Self, PixelError> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(PixelError::MalformedGrid {
                reason: format!(
                    "{} bytes cannot form a {width}x{height} RGB grid (expected {expected})",
                    data.len()
                ),
            });
        }
        let cells = data
            .chunks_exact(3)
            .map(|px| Color::from_rgb(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            cells,
            rows: height,
            cols: if height == 0 { 0 } else { width },
        })
    }

    /// Interleaved 8-bit RGB bytes in row-major order.
    pub fn to_raw_rgb(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|&c| <[u8; 3]>::from(c))
            .collect()
    }

    /// Returns `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Color, PixelError> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, value: Color) -> Result<(), PixelError> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// In-bounds coordinates of the 3x3 block centered on `(row, col)`.
    ///
    /// Yields the center exactly once plus every orthogonal and diagonal
    /// neighbor inside the grid, row by row. Out-of-range neighbors are
    /// omitted: no wraparound, padding, or reflection. For a grid of at least
    /// 2x2 a corner yields 4 coordinates, an edge 6, and an interior cell 9.
    pub fn neighbor_coordinates(
        &self,
        row: usize,
        col: usize,
    ) -> Result<impl Iterator<Item = (usize, usize)>, PixelError> {
        self.index_of(row, col)?;
        let row_span = row.saturating_sub(1)..=(row + 1).min(self.rows - 1);
        let col_span = col.saturating_sub(1)..=(col + 1).min(self.cols - 1);
        Ok(row_span.flat_map(move |r| col_span.clone().map(move |c| (r, c))))
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, PixelError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(PixelError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}
