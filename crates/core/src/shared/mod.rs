pub mod color;
pub mod constants;
pub mod pixel_error;
pub mod pixel_grid;
