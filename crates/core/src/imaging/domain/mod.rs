pub mod grid_reader;
pub mod grid_writer;
